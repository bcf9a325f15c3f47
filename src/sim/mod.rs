//! Simulation module
//!
//! All gameplay logic lives here. This module has no rendering or platform
//! dependencies:
//! - One tick per frame, velocities in pixels per tick
//! - Seeded RNG only (block colors)
//! - Stable iteration order (by entity slot)

pub mod collision;
pub mod entity;
pub mod level;
pub mod state;
pub mod tick;

pub use collision::{Aabb, intersects};
pub use entity::{EntityState, GameObject, Shape};
pub use level::{ColorSeed, populate_blocks};
pub use state::{BALL_SLOT, BallMode, FIRST_BLOCK_SLOT, GameState, PADDLE_SLOT};
pub use tick::{TickInput, TickReport, tick};
