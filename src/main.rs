//! # Mosaique CLI
//!
//! Usage:
//!   mosaique request.json -o layout.json
//!   echo '{ ... }' | mosaique -o layout.json
//!   mosaique --example > request.json

use std::env;
use std::fs;
use std::io::{self, Read};

use mosaique::MosaiqueError;

fn main() {
    let args: Vec<String> = env::args().collect();

    // Handle --example flag
    if args.iter().any(|a| a == "--example") {
        print!("{}", example_request_json());
        return;
    }

    match run(&args) {
        Ok(output_path) => {
            eprintln!("✓ Written layout to {}", output_path);
        }
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    }
}

fn run(args: &[String]) -> Result<String, MosaiqueError> {
    // Read input
    let input = if args.len() > 1 && !args[1].starts_with('-') {
        fs::read_to_string(&args[1])?
    } else {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    };

    // Parse output path
    let output_path = args
        .windows(2)
        .find(|w| w[0] == "-o")
        .map(|w| w[1].clone())
        .unwrap_or_else(|| "layout.json".to_string());

    let layout = mosaique::pack_json(&input)?;
    fs::write(&output_path, layout)?;
    Ok(output_path)
}

fn example_request_json() -> &'static str {
    r##"{
  "cards": [
    { "size": 4, "id": "lead-story" },
    { "size": 1, "id": "brief-1" },
    { "size": 1, "id": "brief-2" },
    { "size": 2, "id": "interview" },
    { "size": 3, "id": "photo-essay" },
    { "size": 1, "id": "brief-3" },
    { "size": 2, "id": "opinion" },
    { "size": 1, "id": "brief-4" }
  ],
  "maxRows": 6,
  "presentation": {
    "cardWidth": 240,
    "cardRatio": 0.75,
    "containerWidth": 1440
  }
}"##
}
