//! Breakout - a software-rendered brick breaker
//!
//! Core modules:
//! - `sim`: Simulation (entities, collisions, level layout, per-tick update)
//! - `renderer`: CPU rasterizer writing into a raw BGRA framebuffer
//! - `platform`: Window/input abstraction and the minifb backend
//! - `timing`: Drift-correcting frame pacing
//! - `app`: The game loop tying everything together

pub mod app;
pub mod config;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod timing;

pub use app::App;
pub use config::GameConfig;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (pixels)
    pub const WINDOW_WIDTH: usize = 400;
    pub const WINDOW_HEIGHT: usize = 300;

    /// Target frame rate of the fixed-timestep loop
    pub const TARGET_FPS: u32 = 60;

    /// Paddle acceleration per tick while a direction key is held
    pub const PADDLE_SPEED: f32 = 0.4;
    /// Velocity multiplier applied to the paddle every tick
    pub const PADDLE_FRICTION: f32 = 0.9;
    pub const PADDLE_WIDTH: f32 = 60.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;

    /// Launch speed parameter; the ball leaves with `sqrt(BALL_SPEED)` px/tick
    pub const BALL_SPEED: f32 = 4.0;
    /// Ball bounding-square side (the drawn circle is inscribed in it)
    pub const BALL_DIAMETER: f32 = 9.0;
    /// Share of paddle velocity transferred to the ball on contact ("english")
    pub const PADDLE_ENGLISH: f32 = 0.2;

    /// Block grid layout
    pub const BLOCK_WIDTH: f32 = 40.0;
    pub const BLOCK_HEIGHT: f32 = 20.0;
    pub const GRID_ORIGIN_X: f32 = 20.0;
    pub const GRID_MARGIN_X: f32 = 20.0;
    pub const GRID_ORIGIN_Y: f32 = 15.0;
    pub const GRID_END_Y: f32 = 215.0;
}

/// An 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    /// Opaque color from three channels
    #[inline]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: 255,
        }
    }

    #[inline]
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = Color::rgb(200, 200, 200);
    pub const PADDLE: Color = Color::rgb(22, 22, 22);
    pub const BALL: Color = Color::rgb(50, 50, 50);
}
