//! Block grid generation
//!
//! The layout is fixed by [`BlockGrid`]; only the colors vary between resets.

use glam::Vec2;
use rand::Rng;

use super::entity::GameObject;
use super::state::FIRST_BLOCK_SLOT;
use crate::Color;
use crate::config::BlockGrid;

/// Per-reset color bias for the red and green channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSeed {
    pub x: u8,
    pub y: u8,
}

impl ColorSeed {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            x: rng.random(),
            y: rng.random(),
        }
    }

    /// Color of the block whose top-left corner is at `(x, y)`.
    /// Channels wrap modulo 256.
    pub fn block_color(&self, x: f32, y: f32) -> Color {
        let (x, y) = (x as u32, y as u32);
        Color::rgb(
            (x + self.x as u32) as u8,
            (y + self.y as u32) as u8,
            y as u8,
        )
    }
}

/// Rewrite every block slot with a fresh, fully intact grid
///
/// Slots before [`FIRST_BLOCK_SLOT`] (paddle, ball) are left untouched.
/// Returns the number of blocks written.
pub fn populate_blocks<R: Rng>(
    entities: &mut Vec<GameObject>,
    grid: &BlockGrid,
    rng: &mut R,
) -> usize {
    let seed = ColorSeed::random(rng);
    populate_blocks_with(entities, grid, seed)
}

/// As [`populate_blocks`], with explicit color offsets
pub fn populate_blocks_with(
    entities: &mut Vec<GameObject>,
    grid: &BlockGrid,
    seed: ColorSeed,
) -> usize {
    entities.truncate(FIRST_BLOCK_SLOT);

    let size = Vec2::new(grid.block_width, grid.block_height);
    for x in grid.column_xs() {
        for y in grid.row_ys() {
            entities.push(GameObject::new(Vec2::new(x, y), size, seed.block_color(x, y)));
        }
    }

    let count = entities.len() - FIRST_BLOCK_SLOT;
    log::debug!(
        "Level reset: {} blocks, color seed ({}, {})",
        count,
        seed.x,
        seed.y
    );
    count
}
