//! # Card Model
//!
//! The input representation for the packing engine, designed to be easily
//! produced by JSON construction or direct API calls. A request is a flat
//! list of cards plus a pass configuration; there is no tree, no styling,
//! and no per-card state beyond the footprint and an optional identifier.
//!
//! Every numeric input here is treated as untrusted: footprints and line
//! capacities are clamped into range downstream rather than validated, so a
//! malformed request degrades to a sensible layout instead of failing.

use serde::{Deserialize, Serialize};

use crate::geometry::{self, MosaicFrame};
use crate::layout::Placement;

/// One card in the list, in display-priority order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Requested footprint in slots along the line. Raw caller input: zero,
    /// negative and over-capacity values are clamped during shape
    /// derivation, never rejected.
    pub size: i64,

    /// Optional caller-side identifier, carried through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl Card {
    pub fn new(size: i64) -> Self {
        Card { size, id: None }
    }
}

/// Configuration for one allocator pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackConfig {
    /// Columns per row. The pass treats anything below one column as one.
    pub slots_per_line: usize,

    /// Upper bound on `y + height` for any placement. `None` means the grid
    /// may grow downward forever and every card eventually finds a slot.
    #[serde(default)]
    pub max_rows: Option<usize>,
}

impl PackConfig {
    /// Unbounded pass over `slots_per_line` columns (clamped to at least 1).
    pub fn new(slots_per_line: usize) -> Self {
        PackConfig {
            slots_per_line: slots_per_line.max(1),
            max_rows: None,
        }
    }

    /// Pass bounded to `max_rows` rows of slots.
    pub fn bounded(slots_per_line: usize, max_rows: usize) -> Self {
        PackConfig {
            slots_per_line: slots_per_line.max(1),
            max_rows: Some(max_rows),
        }
    }
}

/// Pixel-space presentation parameters, mirrored from the hosting container.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationConfig {
    /// Desired width of a single-slot card, in pixels.
    pub card_width: f64,

    /// Height of a single-slot card relative to its width.
    pub card_ratio: f64,

    /// Current inner width of the container, in pixels.
    pub container_width: f64,
}

/// A complete pack request, ready for the JSON boundary.
///
/// The line capacity comes from one of two places: an explicit
/// `slotsPerLine`, or a `presentation` block whose pixel widths it is
/// derived from. When both are present the presentation block wins, because
/// it reflects what the container can actually show.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackRequest {
    pub cards: Vec<Card>,

    /// Explicit line capacity in slots.
    #[serde(default)]
    pub slots_per_line: Option<usize>,

    /// Maximum rows of slots; absent means unbounded.
    #[serde(default)]
    pub max_rows: Option<usize>,

    /// When present, the response also carries percent geometry and the
    /// line capacity is derived from these pixel widths.
    #[serde(default)]
    pub presentation: Option<PresentationConfig>,
}

impl PackRequest {
    /// Resolve the pass configuration this request asks for.
    pub fn pass_config(&self) -> PackConfig {
        let slots_per_line = match &self.presentation {
            Some(p) => geometry::cards_per_line(p.container_width, p.card_width),
            None => self.slots_per_line.unwrap_or(1),
        };
        PackConfig {
            slots_per_line: slots_per_line.max(1),
            max_rows: self.max_rows,
        }
    }
}

/// The response to a [`PackRequest`]: placements aligned 1:1 with the
/// request's cards (`null` for a card that did not fit), the total rows
/// spanned, and percent geometry when presentation parameters were given.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackResponse {
    pub placements: Vec<Option<Placement>>,
    pub lines_amount: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame: Option<MosaicFrame>,
}
