//! # Slot Geometry
//!
//! Pure conversions from slot space to presentation space. The allocator
//! only ever thinks in integer slots; everything a container needs to
//! actually show the layout lives here: the line capacity derived from
//! pixel widths, percent rectangles for absolute positioning, the container
//! pixel height, and the size tag presentation hooks onto tall cards.
//!
//! All functions are stateless and total. Degenerate inputs (zero widths,
//! negative ratios) clamp to the smallest sensible value instead of failing.

use serde::{Deserialize, Serialize};

use crate::layout::{Packing, Placement};

/// Number of cards that fit on one line of a container, derived from pixel
/// widths: `round(container_width / card_width)`, never below one.
pub fn cards_per_line(container_width: f64, card_width: f64) -> usize {
    let per_line = (container_width / card_width.max(1.0)).round();
    per_line.max(1.0) as usize
}

/// A rectangle in percent units of the container, for absolute positioning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PercentRect {
    pub const ZERO: PercentRect = PercentRect {
        left: 0.0,
        top: 0.0,
        width: 0.0,
        height: 0.0,
    };
}

/// Map a placement to percent space. Horizontal percentages are relative to
/// the line capacity, vertical ones to the total lines the pass produced.
pub fn percent_rect(
    placement: &Placement,
    slots_per_line: usize,
    lines_amount: usize,
) -> PercentRect {
    let columns = slots_per_line.max(1) as f64;
    let lines = lines_amount.max(1) as f64;
    PercentRect {
        left: placement.x as f64 / columns * 100.0,
        top: placement.y as f64 / lines * 100.0,
        width: placement.width as f64 / columns * 100.0,
        height: placement.height as f64 / lines * 100.0,
    }
}

/// Container height in whole pixels. Heights are pixel-valued rather than
/// percent-valued because the container's own height is what the percent
/// values are relative to.
pub fn container_height(
    lines_amount: usize,
    cards_per_line: usize,
    card_ratio: f64,
    container_width: f64,
) -> f64 {
    let per_line = cards_per_line.max(1) as f64;
    (lines_amount as f64 / per_line * card_ratio.max(0.0) * container_width).round()
}

/// Size tag for presentation. Only cards spanning more than one line carry
/// one; single-line cards are the unmarked default.
pub fn size_tag(height: usize) -> Option<usize> {
    (height > 1).then_some(height)
}

/// Presentation-ready view of one card.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    /// False for a card the pass could not place; such a card gets a zeroed
    /// rectangle and should be hidden by the container.
    pub placed: bool,
    pub rect: PercentRect,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_tag: Option<usize>,
}

/// Everything a container needs to show one fully laid-out pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MosaicFrame {
    /// One view per input card, in input order.
    pub cards: Vec<CardView>,
    pub cards_per_line: usize,
    pub lines_amount: usize,
    /// Whole pixels.
    pub container_height: f64,
}

impl MosaicFrame {
    /// Build the presentation frame for a finished pass.
    pub fn build(
        packing: &Packing,
        cards_per_line: usize,
        card_ratio: f64,
        container_width: f64,
    ) -> MosaicFrame {
        let lines_amount = packing.lines_amount();
        let cards = packing
            .placements
            .iter()
            .map(|slot| match slot {
                Some(placement) => CardView {
                    placed: true,
                    rect: percent_rect(placement, cards_per_line, lines_amount),
                    size_tag: size_tag(placement.height),
                },
                None => CardView {
                    placed: false,
                    rect: PercentRect::ZERO,
                    size_tag: None,
                },
            })
            .collect();

        MosaicFrame {
            cards,
            cards_per_line,
            lines_amount,
            container_height: container_height(
                lines_amount,
                cards_per_line,
                card_ratio,
                container_width,
            ),
        }
    }
}
