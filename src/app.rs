//! The game loop
//!
//! One thread, one tick per frame: drain input, advance the simulation, redraw
//! the framebuffer, present it, then sleep to the next frame boundary.

use std::time::Instant;

use crate::config::GameConfig;
use crate::platform::{Display, InputState};
use crate::renderer::{self, FrameBuffer};
use crate::sim::{GameState, TickReport, tick};
use crate::timing::FramePacer;

/// Result of a single loop iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Frame simulated and presented
    Continue(TickReport),
    /// Window was closed; nothing was simulated
    Exit,
}

pub struct App<D: Display> {
    display: D,
    state: GameState,
    frame: FrameBuffer,
    input: InputState,
    pacer: FramePacer,
}

impl<D: Display> App<D> {
    pub fn new(config: GameConfig, seed: u64, display: D) -> Self {
        let frame = FrameBuffer::new(config.width, config.height);
        let pacer = FramePacer::new(config.frame_time());
        let state = GameState::new(config, seed);
        log::info!(
            "Game initialized with seed {} ({} blocks)",
            seed,
            state.block_count
        );

        Self {
            display,
            state,
            frame,
            input: InputState::new(),
            pacer,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Frames presented so far
    pub fn frame_count(&self) -> u64 {
        self.pacer.frame_count
    }

    /// Run one iteration without sleeping
    pub fn step(&mut self) -> anyhow::Result<Step> {
        self.input.handle_events(self.display.poll_events());
        if self.input.close_requested() {
            return Ok(Step::Exit);
        }

        let input = self.input.take_tick_input();
        let report = tick(&mut self.state, &input);

        renderer::draw_scene(
            &mut self.frame,
            self.state.config.background,
            &self.state.entities,
        );
        self.display.present(&self.frame)?;

        Ok(Step::Continue(report))
    }

    /// Run until the window is closed
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            if self.step()? == Step::Exit {
                log::info!("Window closed after {} frames", self.pacer.frame_count);
                return Ok(());
            }
            let sleep = self.pacer.end_frame(Instant::now());
            if !sleep.is_zero() {
                std::thread::sleep(sleep);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{InputEvent, Key};
    use crate::renderer::Bgra;
    use crate::sim::BallMode;
    use std::collections::VecDeque;

    /// Display that replays scripted events, one batch per poll
    #[derive(Default)]
    struct ScriptedDisplay {
        batches: VecDeque<Vec<InputEvent>>,
        presented: usize,
        last_frame: Option<Vec<u8>>,
        fail_present: bool,
    }

    impl ScriptedDisplay {
        fn new(batches: Vec<Vec<InputEvent>>) -> Self {
            Self {
                batches: batches.into(),
                ..Default::default()
            }
        }
    }

    impl Display for ScriptedDisplay {
        fn poll_events(&mut self) -> Vec<InputEvent> {
            self.batches.pop_front().unwrap_or_default()
        }

        fn present(&mut self, frame: &FrameBuffer) -> anyhow::Result<()> {
            if self.fail_present {
                anyhow::bail!("surface lost");
            }
            self.presented += 1;
            self.last_frame = Some(frame.as_bytes().to_vec());
            Ok(())
        }
    }

    #[test]
    fn test_run_until_close() {
        let display = ScriptedDisplay::new(vec![
            vec![InputEvent::Expose],
            vec![],
            vec![InputEvent::KeyPress(Key::Left)],
            vec![InputEvent::CloseRequested],
        ]);
        let mut app = App::new(GameConfig::default(), 1, display);
        app.run().unwrap();
        assert_eq!(app.display().presented, 3);
        assert_eq!(app.frame_count(), 3);
        assert!(app.state().paddle().position.x < 170.0);
    }

    #[test]
    fn test_step_draws_scene() {
        let mut app = App::new(GameConfig::default(), 1, ScriptedDisplay::default());
        assert!(matches!(app.step().unwrap(), Step::Continue(_)));

        let config = GameConfig::default();
        let frame = app.frame();
        assert_eq!(frame.pixel(0, 0), Some(Bgra::from(config.background)));
        // Paddle at the bottom center
        assert_eq!(frame.pixel(200, 295), Some(Bgra::from(config.paddle_color)));
        // Ball center resting above the paddle
        assert_eq!(frame.pixel(200, 285), Some(Bgra::from(config.ball_color)));
        // First block
        let block = app.state().blocks()[0].color;
        assert_eq!(frame.pixel(21, 16), Some(Bgra::from(block)));

        let bytes = app.display().last_frame.as_ref().unwrap();
        assert_eq!(bytes.len(), 400 * 300 * 4);
    }

    #[test]
    fn test_launch_through_loop() {
        let display = ScriptedDisplay::new(vec![
            vec![InputEvent::KeyPress(Key::Space)],
            vec![InputEvent::KeyPress(Key::Space)],
        ]);
        let mut app = App::new(GameConfig::default(), 1, display);

        match app.step().unwrap() {
            Step::Continue(report) => assert!(report.launched),
            Step::Exit => panic!("unexpected exit"),
        }
        assert_eq!(app.state().ball_mode, BallMode::Launched);

        match app.step().unwrap() {
            Step::Continue(report) => assert!(!report.launched),
            Step::Exit => panic!("unexpected exit"),
        }
    }

    #[test]
    fn test_present_failure_propagates() {
        let display = ScriptedDisplay {
            fail_present: true,
            ..Default::default()
        };
        let mut app = App::new(GameConfig::default(), 1, display);
        let err = app.run().unwrap_err();
        assert!(err.to_string().contains("surface lost"));
    }

    #[test]
    fn test_close_before_first_frame() {
        let display = ScriptedDisplay::new(vec![vec![InputEvent::CloseRequested]]);
        let mut app = App::new(GameConfig::default(), 1, display);
        assert_eq!(app.step().unwrap(), Step::Exit);
        assert_eq!(app.display().presented, 0);
        assert_eq!(app.state().time_ticks, 0);
    }
}
