//! Fixed timestep simulation tick
//!
//! Advances the game by exactly one frame. Velocities are in pixels per tick,
//! so there is no `dt`: the frame pacer keeps ticks evenly spaced instead.

use glam::Vec2;

use super::state::{BallMode, GameState};

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Left arrow held
    pub left: bool,
    /// Right arrow held
    pub right: bool,
    /// Launch requested this tick (edge triggered)
    pub launch: bool,
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub launched: bool,
    pub paddle_hit: bool,
    pub blocks_destroyed: usize,
    /// Ball fell through the floor and the level was reset
    pub respawned: bool,
}

/// Advance the game state by one tick
///
/// The caller draws the scene once this returns, so a block struck during the
/// tick is already gone from that frame.
pub fn tick(state: &mut GameState, input: &TickInput) -> TickReport {
    let mut report = TickReport::default();
    state.time_ticks += 1;

    // Launch
    if input.launch && state.ball_mode == BallMode::OnPaddle {
        let speed = state.config.launch_speed();
        state.ball_mode = BallMode::Launched;
        state.ball_mut().velocity = Vec2::new(0.0, speed);
        report.launched = true;
        log::trace!("Ball launched at tick {}", state.time_ticks);
    }

    update_paddle(state, input);

    if state.ball_mode == BallMode::OnPaddle {
        state.rest_ball_on_paddle();
    }

    // Ball-paddle collision, only while the ball is falling
    if state.ball().velocity.y > 0.0 && state.ball().overlaps(state.paddle()) {
        let english = state.paddle().velocity.x * state.config.paddle_english;
        let ball = state.ball_mut();
        ball.velocity.y = -ball.velocity.y;
        ball.velocity.x += english;
        report.paddle_hit = true;
    }

    // Integrate in collection order: paddle, ball, blocks
    for entity in &mut state.entities {
        entity.integrate();
    }
    state.confine_paddle();

    bounce_off_walls(state);

    // Floor: back onto the paddle with a fresh level
    let floor = state.config.height as f32 - state.ball().height;
    if state.ball().position.y > floor && state.ball().velocity.y > 0.0 {
        state.ball_mode = BallMode::OnPaddle;
        state.ball_mut().velocity = Vec2::ZERO;
        state.rest_ball_on_paddle();
        state.reset_level();
        report.respawned = true;
        log::debug!("Ball lost at tick {}, level reset", state.time_ticks);
    }

    report.blocks_destroyed = break_blocks(state);

    report
}

/// Accelerate from held keys, keep inside the playfield, apply friction
fn update_paddle(state: &mut GameState, input: &TickInput) {
    let speed = state.config.paddle_speed;
    let friction = state.config.paddle_friction;

    let paddle = state.paddle_mut();
    if input.left {
        paddle.velocity.x -= speed;
    }
    if input.right {
        paddle.velocity.x += speed;
    }
    state.confine_paddle();
    state.paddle_mut().velocity.x *= friction;
}

fn bounce_off_walls(state: &mut GameState) {
    let width = state.config.width as f32;
    let ball = state.ball_mut();
    let b = ball.bounds();

    let off_left = b.x < 0.0 && ball.velocity.x < 0.0;
    let off_right = b.right() > width && ball.velocity.x > 0.0;
    if off_left || off_right {
        ball.velocity.x = -ball.velocity.x;
    }
    if b.y < 0.0 && ball.velocity.y < 0.0 {
        ball.velocity.y = -ball.velocity.y;
    }
}

/// Destroy every block the ball overlaps; bounce once if any were hit
fn break_blocks(state: &mut GameState) -> usize {
    let ball = *state.ball();
    let mut destroyed = 0;
    for block in state.blocks_mut() {
        if ball.overlaps(block) {
            block.destroy();
            destroyed += 1;
        }
    }

    if destroyed > 0 {
        let ball = state.ball_mut();
        ball.velocity.y = -ball.velocity.y;
        log::trace!("Ball broke {} block(s)", destroyed);
    }
    destroyed
}
