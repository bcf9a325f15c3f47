//! minifb-backed window
//!
//! minifb has no event queue of its own; key transitions and window state are
//! sampled on every poll and turned into [`InputEvent`]s.

use anyhow::Context;
use minifb::{KeyRepeat, Window, WindowOptions};

use super::{Display, InputEvent, Key};
use crate::renderer::FrameBuffer;

pub struct MinifbDisplay {
    window: Window,
    /// Packed `0xAARRGGBB` copy of the last frame, reused between presents
    scratch: Vec<u32>,
    /// Window size at the last poll; `None` until the first poll
    last_size: Option<(usize, usize)>,
}

impl MinifbDisplay {
    /// Open a fixed-size window
    pub fn open(title: &str, width: usize, height: usize) -> anyhow::Result<Self> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .with_context(|| format!("cannot open {width}x{height} window"))?;
        // Frame pacing is done by the game loop
        window.set_target_fps(0);

        log::info!("Opened {}x{} window \"{}\"", width, height, title);
        Ok(Self {
            window,
            scratch: Vec::with_capacity(width * height),
            last_size: None,
        })
    }
}

/// Translate a minifb key to a game key
fn translate_key(key: minifb::Key) -> Option<Key> {
    match key {
        minifb::Key::Left => Some(Key::Left),
        minifb::Key::Right => Some(Key::Right),
        minifb::Key::Space => Some(Key::Space),
        _ => None,
    }
}

impl Display for MinifbDisplay {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();

        if !self.window.is_open() {
            events.push(InputEvent::CloseRequested);
            return events;
        }

        let size = self.window.get_size();
        if self.last_size != Some(size) {
            self.last_size = Some(size);
            events.push(InputEvent::Expose);
        }

        events.extend(
            self.window
                .get_keys_pressed(KeyRepeat::No)
                .into_iter()
                .filter_map(translate_key)
                .map(InputEvent::KeyPress),
        );
        events.extend(
            self.window
                .get_keys_released()
                .into_iter()
                .filter_map(translate_key)
                .map(InputEvent::KeyRelease),
        );

        events
    }

    fn present(&mut self, frame: &FrameBuffer) -> anyhow::Result<()> {
        frame.write_argb(&mut self.scratch);
        self.window
            .update_with_buffer(&self.scratch, frame.width(), frame.height())
            .context("failed to blit frame to window")
    }
}
