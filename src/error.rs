//! Structured error types for the mosaique packing engine.
//!
//! There is deliberately only one domain-level non-success outcome, the
//! unplaced card, and it is not represented here: it is a normal `None` in
//! the pass results. The variants below cover the mechanical failure
//! sources around the core: JSON parsing at the request boundary and
//! filesystem access in the CLI.

use std::io;

use thiserror::Error;

/// The unified error type returned by all fallible mosaique API functions.
#[derive(Debug, Error)]
pub enum MosaiqueError {
    /// JSON input failed to parse as a valid pack request.
    #[error("Failed to parse pack request: {source}{hint}")]
    Parse {
        source: serde_json::Error,
        hint: String,
    },

    /// The CLI could not read its input or write its output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<serde_json::Error> for MosaiqueError {
    fn from(e: serde_json::Error) -> Self {
        let hint = match e.classify() {
            serde_json::error::Category::Syntax => {
                "\n  Hint: Check for trailing commas, missing quotes, or unescaped characters."
            }
            serde_json::error::Category::Data => {
                "\n  Hint: The JSON is valid but doesn't match the pack request schema. Check field names and types."
            }
            serde_json::error::Category::Eof => {
                "\n  Hint: Unexpected end of input. Is the JSON truncated?"
            }
            serde_json::error::Category::Io => "",
        };
        MosaiqueError::Parse {
            source: e,
            hint: hint.to_string(),
        }
    }
}
