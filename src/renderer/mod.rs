//! Software rendering module
//!
//! Entities are rasterized on the CPU into a BGRA framebuffer that the
//! platform layer blits to the window.

pub mod framebuffer;
pub mod pixel;

pub use framebuffer::FrameBuffer;
pub use pixel::Bgra;

use crate::Color;
use crate::sim::GameObject;

/// Clear to `background`, then draw every live entity in collection order
pub fn draw_scene(frame: &mut FrameBuffer, background: Color, entities: &[GameObject]) {
    frame.clear(background);
    for entity in entities {
        frame.draw_object(entity);
    }
}
