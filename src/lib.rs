//! # Mosaique
//!
//! A slot-native mosaic layout engine.
//!
//! Most card mosaics are laid out in pixel space: measure everything, nudge
//! rectangles around, and re-derive the world on every resize. That couples
//! the packing decision to the pixel geometry and makes the result
//! impossible to reason about, let alone test.
//!
//! Mosaique does the opposite: **the slot is the fundamental unit of
//! layout.** The container is a grid of unit slots, every card wants an
//! integer number of them along the line, and packing is a deterministic
//! first-fit pass over that grid. Pixels only appear at the very edge, as a
//! percent-space projection of slot rectangles. Resize the container and
//! nothing changes unless the number of slots per line changes.
//!
//! ## Architecture
//!
//! ```text
//! Input (JSON/API)
//!       ↓
//!   [model]     — Card list, pass configuration
//!       ↓
//!   [layout]    — First-fit allocator: occupancy grid + free-line cursor
//!       ↓
//!   [geometry]  — Slot space → percent rects, container height, size tags
//!       ↓
//!   [presenter] — Change detection across container resizes
//! ```
//!
//! A card the pass cannot fit under the configured row bound comes back as
//! `None` rather than an error; hiding it is the container's job.

pub mod error;
pub mod geometry;
pub mod layout;
pub mod model;
pub mod presenter;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::MosaiqueError;
pub use geometry::MosaicFrame;
pub use layout::{pack, Packing, Placement};
pub use model::{Card, PackConfig, PackRequest, PackResponse};
pub use presenter::{Mosaic, MosaicConfig, MosaicUpdate};

/// Pack a request and assemble the full response, including percent
/// geometry when the request carries presentation parameters.
pub fn pack_request(request: &PackRequest) -> PackResponse {
    let config = request.pass_config();
    let packing = layout::pack(&request.cards, &config);
    let lines_amount = packing.lines_amount();

    let frame = request.presentation.as_ref().map(|p| {
        MosaicFrame::build(
            &packing,
            config.slots_per_line,
            p.card_ratio,
            p.container_width,
        )
    });

    PackResponse {
        placements: packing.placements,
        lines_amount,
        frame,
    }
}

/// Pack a request described as JSON, returning the response as JSON.
pub fn pack_json(json: &str) -> Result<String, MosaiqueError> {
    let request: PackRequest = serde_json::from_str(json)?;
    let response = pack_request(&request);
    Ok(serde_json::to_string(&response)?)
}
