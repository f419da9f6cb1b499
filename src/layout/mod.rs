//! # First-Fit Slot Allocator
//!
//! The heart of mosaique.
//!
//! Cards arrive in display-priority order, each wanting some number of slots
//! along the line. The allocator walks them once, front to back, and gives
//! every card the topmost-then-leftmost free rectangle that fits its derived
//! shape. There is no backtracking and no repacking: card *i* can influence
//! where card *i + 1* lands, never the reverse. A card that cannot fit under
//! the configured row bound is reported as unplaced, which is a normal
//! outcome for the caller to handle, not an error.
//!
//! Two details keep the pass cheap:
//!
//! 1. The occupancy grid grows on demand and never shrinks, so a pass over
//!    `n` cards touches only the rows the cards actually reach.
//! 2. A free-line cursor tracks the lowest row that still has a free column.
//!    Every search starts there instead of at row zero, so fully packed rows
//!    are never rescanned. The cursor only moves forward, and only when the
//!    row it points at fills up completely.

pub mod grid;
pub mod shape;

use serde::{Deserialize, Serialize};

use crate::model::{Card, PackConfig};
use self::grid::SlotGrid;
use self::shape::{derive_shape, Shape};

/// A slot-space rectangle assigned to one card. `x`/`y` address the top-left
/// slot; `x + width` never exceeds the line capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Placement {
    /// True iff the two rectangles share at least one slot.
    pub fn intersects(&self, other: &Placement) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}

/// The outcome of one allocator pass: one entry per input card, in input
/// order. `None` marks a card that could not be placed under the row bound.
#[derive(Debug, Clone)]
pub struct Packing {
    pub placements: Vec<Option<Placement>>,
}

impl Packing {
    /// Total rows spanned by the union of all successful placements, i.e.
    /// the container height in slot units. Computed by scanning the results;
    /// the pass itself keeps no running total.
    pub fn lines_amount(&self) -> usize {
        self.placements
            .iter()
            .flatten()
            .map(|p| p.y + p.height)
            .max()
            .unwrap_or(0)
    }
}

/// Pack every card, in input order, into the topmost-then-leftmost free
/// region of a fresh slot grid.
///
/// The grid and the free-line cursor live exactly as long as this call;
/// nothing is shared between passes.
pub fn pack(cards: &[Card], config: &PackConfig) -> Packing {
    let slots_per_line = config.slots_per_line.max(1);
    let mut grid = SlotGrid::new();
    let mut min_free_line = 0;

    let placements = cards
        .iter()
        .map(|card| {
            let shape = derive_shape(card.size, slots_per_line);
            find_slot(
                &mut grid,
                shape,
                slots_per_line,
                config.max_rows,
                &mut min_free_line,
            )
        })
        .collect();

    Packing { placements }
}

/// Row-major first-fit search: candidate rows from the cursor upward,
/// candidate columns left to right. The first free rectangle wins, gets
/// occupied, and advances the cursor when it sat on the cursor's row.
///
/// With `max_rows` unset the loop always terminates by finding a slot,
/// because rows past the allocated grid are entirely free.
fn find_slot(
    grid: &mut SlotGrid,
    shape: Shape,
    slots_per_line: usize,
    max_rows: Option<usize>,
    min_free_line: &mut usize,
) -> Option<Placement> {
    let mut y = *min_free_line;
    loop {
        if let Some(max_rows) = max_rows {
            if y + shape.height > max_rows {
                return None;
            }
        }

        for x in 0..=slots_per_line - shape.width {
            if grid.is_region_free(x, y, shape.width, shape.height) {
                grid.occupy_region(x, y, shape.width, shape.height);
                if y == *min_free_line {
                    *min_free_line = grid.first_free_line(slots_per_line, *min_free_line);
                }
                return Some(Placement {
                    x,
                    y,
                    width: shape.width,
                    height: shape.height,
                });
            }
        }

        y += 1;
    }
}
