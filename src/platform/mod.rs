//! Platform abstraction layer
//!
//! Handles the window side of the game:
//! - Input events (non-blocking drain once per frame)
//! - Presenting a finished framebuffer
//!
//! The game loop only talks to the [`Display`] trait; [`native`] implements it
//! on top of minifb.

pub mod input;
pub mod native;

pub use input::InputState;
pub use native::MinifbDisplay;

use crate::renderer::FrameBuffer;

/// Logical keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Space,
}

/// Window events delivered to the game loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window contents need repainting
    Expose,
    KeyPress(Key),
    KeyRelease(Key),
    /// User asked to close the window
    CloseRequested,
}

/// A window that accepts finished frames and reports input
pub trait Display {
    /// Return every event queued since the last call without blocking
    fn poll_events(&mut self) -> Vec<InputEvent>;

    /// Blit a frame to the screen
    fn present(&mut self, frame: &FrameBuffer) -> anyhow::Result<()>;
}
