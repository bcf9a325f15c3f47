//! Immutable game configuration
//!
//! Built once at startup from [`crate::consts`] and handed to every system
//! that needs playfield dimensions or tuning values.

use std::time::Duration;

use crate::consts::*;
use crate::{Color, colors};

/// Layout of the block grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockGrid {
    /// X of the first column
    pub origin_x: f32,
    /// Columns are laid out while `x < end_x`
    pub end_x: f32,
    pub step_x: f32,
    /// Y of the first row
    pub origin_y: f32,
    /// Rows are laid out while `y < end_y`
    pub end_y: f32,
    pub step_y: f32,
    pub block_width: f32,
    pub block_height: f32,
}

impl BlockGrid {
    /// Grid for a playfield of the given width
    pub fn for_width(width: usize) -> Self {
        Self {
            origin_x: GRID_ORIGIN_X,
            end_x: width as f32 - GRID_MARGIN_X,
            step_x: BLOCK_WIDTH,
            origin_y: GRID_ORIGIN_Y,
            end_y: GRID_END_Y,
            step_y: BLOCK_HEIGHT,
            block_width: BLOCK_WIDTH,
            block_height: BLOCK_HEIGHT,
        }
    }

    /// Number of columns the grid produces
    pub fn columns(&self) -> usize {
        steps_below(self.origin_x, self.end_x, self.step_x)
    }

    /// Number of rows the grid produces
    pub fn rows(&self) -> usize {
        steps_below(self.origin_y, self.end_y, self.step_y)
    }

    pub fn block_count(&self) -> usize {
        self.columns() * self.rows()
    }

    /// Column x coordinates, left to right
    pub fn column_xs(&self) -> impl Iterator<Item = f32> + '_ {
        (0..self.columns()).map(move |i| self.origin_x + i as f32 * self.step_x)
    }

    /// Row y coordinates, top to bottom
    pub fn row_ys(&self) -> impl Iterator<Item = f32> + '_ {
        (0..self.rows()).map(move |j| self.origin_y + j as f32 * self.step_y)
    }
}

/// Count of `start, start + step, ...` values strictly below `end`
fn steps_below(start: f32, end: f32, step: f32) -> usize {
    if step <= 0.0 || start >= end {
        return 0;
    }
    ((end - start) / step).ceil() as usize
}

/// Game configuration
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Framebuffer / window size in pixels
    pub width: usize,
    pub height: usize,
    pub target_fps: u32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_friction: f32,

    // === Ball ===
    pub ball_diameter: f32,
    pub ball_speed: f32,
    pub paddle_english: f32,

    // === Layout / colors ===
    pub grid: BlockGrid,
    pub background: Color,
    pub paddle_color: Color,
    pub ball_color: Color,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            target_fps: TARGET_FPS,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_friction: PADDLE_FRICTION,

            ball_diameter: BALL_DIAMETER,
            ball_speed: BALL_SPEED,
            paddle_english: PADDLE_ENGLISH,

            grid: BlockGrid::for_width(WINDOW_WIDTH),
            background: colors::BACKGROUND,
            paddle_color: colors::PADDLE,
            ball_color: colors::BALL,
        }
    }
}

impl GameConfig {
    /// Duration of one frame at the target rate
    pub fn frame_time(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.target_fps.max(1) as f64)
    }

    /// Vertical speed the ball leaves the paddle with
    pub fn launch_speed(&self) -> f32 {
        self.ball_speed.sqrt()
    }

    /// Rightmost legal paddle x
    pub fn paddle_max_x(&self) -> f32 {
        (self.width as f32 - self.paddle_width).max(0.0)
    }

    /// Total entity slots: paddle, ball, and every grid block
    pub fn entity_capacity(&self) -> usize {
        crate::sim::FIRST_BLOCK_SLOT + self.grid.block_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid_is_nine_by_ten() {
        let config = GameConfig::default();
        assert_eq!(config.grid.columns(), 9);
        assert_eq!(config.grid.rows(), 10);
        assert_eq!(config.grid.block_count(), 90);
        assert_eq!(config.entity_capacity(), 92);
    }

    #[test]
    fn test_grid_coordinates() {
        let grid = BlockGrid::for_width(400);
        let xs: Vec<f32> = grid.column_xs().collect();
        assert_eq!(xs.first(), Some(&20.0));
        assert_eq!(xs.last(), Some(&340.0));
        let ys: Vec<f32> = grid.row_ys().collect();
        assert_eq!(ys.first(), Some(&15.0));
        assert_eq!(ys.last(), Some(&195.0));
    }

    #[test]
    fn test_frame_time_and_launch_speed() {
        let config = GameConfig::default();
        let ms = config.frame_time().as_secs_f64() * 1000.0;
        assert!((ms - 16.6667).abs() < 0.001);
        assert_eq!(config.launch_speed(), 2.0);
        assert_eq!(config.paddle_max_x(), 340.0);
    }

    #[test]
    fn test_narrow_playfield_has_no_columns() {
        let grid = BlockGrid::for_width(30);
        assert_eq!(grid.columns(), 0);
        assert_eq!(grid.block_count(), 0);
    }
}
