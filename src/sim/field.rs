//! The brick field
//!
//! The field owns every live brick. It is laid out once per session from the
//! configured grid and only ever shrinks afterward; when it empties, the
//! player has won.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::{Color, GameConfig};

use super::shape::Rect;

/// A single destructible brick
///
/// Bricks have no behavior of their own beyond containment; they are created
/// in one batch at layout time and removed the instant a collision with them
/// is detected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    pub color: Color,
}

/// The insertion-ordered collection of live bricks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrickField {
    bricks: Vec<Brick>,
}

impl BrickField {
    /// Lay out the full grid, left-to-right then top-to-bottom
    ///
    /// Row `r` takes `row_colors[r]`, cycling when the palette is shorter
    /// than the row count. The top row sits `brick_y_offset` below the
    /// ceiling; each row's anchor drops by one brick height plus the
    /// vertical gap.
    pub fn new(config: &GameConfig) -> Self {
        let mut bricks = Vec::with_capacity(config.brick_rows * config.bricks_in_row);

        for row in 0..config.brick_rows {
            let color = config.row_colors[row % config.row_colors.len()];
            let y = config.arena_height
                - config.brick_y_offset
                - row as f32 * (config.brick_height + config.brick_sep_v);

            for col in 0..config.bricks_in_row {
                let x = config.brick_sep_h / 2.0
                    + col as f32 * (config.brick_sep_h + config.brick_width);

                bricks.push(Brick {
                    rect: Rect::new(
                        Vec2::new(x, y),
                        Vec2::new(config.brick_width, config.brick_height),
                    ),
                    color,
                });
            }
        }

        Self { bricks }
    }

    /// Live bricks in layout order (draw order)
    pub fn bricks(&self) -> &[Brick] {
        &self.bricks
    }

    /// Remove the brick at `index`
    ///
    /// The index must come from a containment scan over [`Self::bricks`]
    /// this same tick; a stale or out-of-range index is a coordination bug
    /// and panics.
    pub fn remove(&mut self, index: usize) -> Brick {
        self.bricks.remove(index)
    }

    /// True exactly when no bricks remain -- the win-condition signal
    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }
}
