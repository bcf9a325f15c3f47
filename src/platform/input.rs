//! Keyboard state between frames

use super::{InputEvent, Key};
use crate::sim::TickInput;

/// InputState folds window events into the per-tick input the simulation reads
///
/// Arrow keys are sticky: held from press until release. Space is an edge
/// trigger: a press queues one launch, and further presses are ignored until
/// the key has been released.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub left_held: bool,
    pub right_held: bool,
    space_held: bool,
    launch_requested: bool,
    close_requested: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyPress(Key::Left) => self.left_held = true,
            InputEvent::KeyPress(Key::Right) => self.right_held = true,
            InputEvent::KeyPress(Key::Space) => {
                if !self.space_held {
                    self.launch_requested = true;
                }
                self.space_held = true;
            }
            InputEvent::KeyRelease(Key::Left) => self.left_held = false,
            InputEvent::KeyRelease(Key::Right) => self.right_held = false,
            InputEvent::KeyRelease(Key::Space) => self.space_held = false,
            InputEvent::CloseRequested => self.close_requested = true,
            InputEvent::Expose => log::trace!("Expose"),
        }
    }

    pub fn handle_events(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        for event in events {
            self.handle_event(event);
        }
    }

    pub fn close_requested(&self) -> bool {
        self.close_requested
    }

    /// Snapshot for the next tick; consumes a pending launch
    pub fn take_tick_input(&mut self) -> TickInput {
        TickInput {
            left: self.left_held,
            right: self.right_held,
            launch: std::mem::take(&mut self.launch_requested),
        }
    }
}
