//! # Mosaic Presenter
//!
//! A stateful façade over the allocator for containers that resize. The
//! expensive thing here is the allocator pass plus rebuilding every card's
//! geometry, and neither depends on the container width directly; they only
//! depend on the *line capacity* the width maps to. So the presenter keeps
//! the last seen width, the last derived capacity, and the last built frame,
//! and on each `update` does the least work the change requires:
//!
//! - same width as last time: nothing;
//! - new width, same capacity: the percent geometry still holds, only the
//!   pixel height of the container is refreshed;
//! - new capacity: full allocator pass, new frame.
//!
//! The caller owns event wiring (resize observers, load hooks) and DOM
//! mutation; the presenter is synchronous and touches nothing but its own
//! cache.

use crate::geometry::{self, MosaicFrame};
use crate::layout;
use crate::model::{Card, PackConfig};

/// Pixel-space configuration for a mosaic, fixed per presenter instance
/// until explicitly mutated.
#[derive(Debug, Clone)]
pub struct MosaicConfig {
    /// Desired width of a single-slot card, in pixels. Clamped to ≥ 1.
    pub card_width: f64,
    /// Height of a single-slot card relative to its width. Clamped to ≥ 0.
    pub card_ratio: f64,
    /// Maximum rows of slots; `None` means unbounded.
    pub max_rows: Option<usize>,
}

impl MosaicConfig {
    pub fn new(card_width: f64, card_ratio: f64) -> Self {
        MosaicConfig {
            card_width: card_width.max(1.0),
            card_ratio: card_ratio.max(0.0),
            max_rows: None,
        }
    }

    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = Some(max_rows);
        self
    }
}

impl Default for MosaicConfig {
    fn default() -> Self {
        MosaicConfig::new(240.0, 0.75)
    }
}

/// What one `update` call actually did.
#[derive(Debug)]
pub enum MosaicUpdate<'a> {
    /// Container width unchanged since the last update; nothing recomputed.
    Unchanged,
    /// Width changed but the line capacity did not: the cached frame's
    /// percent geometry still holds and only its pixel height moved.
    HeightOnly { container_height: f64 },
    /// Line capacity changed: a full allocator pass ran and the frame was
    /// rebuilt.
    Relaid(&'a MosaicFrame),
}

/// Stateful mosaic layout with change detection across container resizes.
#[derive(Debug, Default)]
pub struct Mosaic {
    config: MosaicConfig,
    cards: Vec<Card>,
    last_checked_width: Option<f64>,
    last_cards_per_line: Option<usize>,
    frame: Option<MosaicFrame>,
}

impl Mosaic {
    pub fn new(config: MosaicConfig) -> Self {
        Mosaic {
            config,
            cards: Vec::new(),
            last_checked_width: None,
            last_cards_per_line: None,
            frame: None,
        }
    }

    /// Replace the card list (e.g. after items were added, removed or
    /// hidden). Forces a full pass on the next update.
    pub fn set_cards(&mut self, cards: Vec<Card>) {
        self.cards = cards;
        self.last_checked_width = None;
        self.last_cards_per_line = None;
    }

    /// Change the desired single-card pixel width. Forces a full pass on the
    /// next update.
    pub fn set_card_width(&mut self, card_width: f64) {
        self.config.card_width = card_width.max(1.0);
        self.last_checked_width = None;
        self.last_cards_per_line = None;
    }

    /// Change the card aspect ratio. The slot layout is unaffected, so only
    /// the container height is recomputed on the next update.
    pub fn set_card_ratio(&mut self, card_ratio: f64) {
        self.config.card_ratio = card_ratio.max(0.0);
        self.last_checked_width = None;
    }

    /// Change the row bound. Forces a full pass on the next update.
    pub fn set_max_rows(&mut self, max_rows: Option<usize>) {
        self.config.max_rows = max_rows;
        self.last_checked_width = None;
        self.last_cards_per_line = None;
    }

    /// The last fully built frame, if any pass has run yet. May be stale
    /// after a mutator until the next `update`.
    pub fn frame(&self) -> Option<&MosaicFrame> {
        self.frame.as_ref()
    }

    /// React to the container currently being `container_width` pixels wide.
    pub fn update(&mut self, container_width: f64) -> MosaicUpdate<'_> {
        if self.last_checked_width == Some(container_width) {
            return MosaicUpdate::Unchanged;
        }
        self.last_checked_width = Some(container_width);

        let per_line = geometry::cards_per_line(container_width, self.config.card_width);

        if self.last_cards_per_line == Some(per_line) {
            if let Some(frame) = self.frame.as_mut() {
                let height = geometry::container_height(
                    frame.lines_amount,
                    per_line,
                    self.config.card_ratio,
                    container_width,
                );
                frame.container_height = height;
                return MosaicUpdate::HeightOnly {
                    container_height: height,
                };
            }
        }

        let config = PackConfig {
            slots_per_line: per_line,
            max_rows: self.config.max_rows,
        };
        let packing = layout::pack(&self.cards, &config);
        let frame = MosaicFrame::build(
            &packing,
            per_line,
            self.config.card_ratio,
            container_width,
        );

        self.last_cards_per_line = Some(per_line);
        MosaicUpdate::Relaid(self.frame.insert(frame))
    }
}
