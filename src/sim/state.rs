//! Game state and core simulation types
//!
//! All entities live in one ordered collection addressed by stable slot:
//! paddle, then ball, then the block grid.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::entity::GameObject;
use super::level::populate_blocks;
use crate::config::GameConfig;

pub const PADDLE_SLOT: usize = 0;
pub const BALL_SLOT: usize = 1;
pub const FIRST_BLOCK_SLOT: usize = 2;

/// Ball mode - resting on the paddle or in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BallMode {
    /// Ball follows the paddle, waiting for launch input
    #[default]
    OnPaddle,
    Launched,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    /// Seed the block color RNG was created from
    pub seed: u64,
    pub rng: Pcg32,
    /// Paddle, ball, blocks - in that order
    pub entities: Vec<GameObject>,
    /// Number of block slots written by the last level reset
    pub block_count: usize,
    pub ball_mode: BallMode,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new game with the ball resting on a centered paddle
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut entities = Vec::with_capacity(config.entity_capacity());

        let paddle_pos = Vec2::new(
            config.width as f32 / 2.0 - config.paddle_width / 2.0,
            config.height as f32 - config.paddle_height,
        );
        entities.push(GameObject::new(
            paddle_pos,
            Vec2::new(config.paddle_width, config.paddle_height),
            config.paddle_color,
        ));
        entities.push(GameObject::circle(
            Vec2::new(config.width as f32 / 2.0, config.height as f32 / 2.0),
            config.ball_diameter,
            config.ball_color,
        ));

        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            entities,
            block_count: 0,
            ball_mode: BallMode::OnPaddle,
            time_ticks: 0,
            config,
        };
        state.reset_level();
        state.rest_ball_on_paddle();
        state
    }

    pub fn paddle(&self) -> &GameObject {
        &self.entities[PADDLE_SLOT]
    }

    pub fn paddle_mut(&mut self) -> &mut GameObject {
        &mut self.entities[PADDLE_SLOT]
    }

    pub fn ball(&self) -> &GameObject {
        &self.entities[BALL_SLOT]
    }

    pub fn ball_mut(&mut self) -> &mut GameObject {
        &mut self.entities[BALL_SLOT]
    }

    /// Block slots written by the last level reset
    pub fn blocks(&self) -> &[GameObject] {
        &self.entities[FIRST_BLOCK_SLOT..FIRST_BLOCK_SLOT + self.block_count]
    }

    pub fn blocks_mut(&mut self) -> &mut [GameObject] {
        let end = FIRST_BLOCK_SLOT + self.block_count;
        &mut self.entities[FIRST_BLOCK_SLOT..end]
    }

    /// Number of blocks not yet destroyed
    pub fn live_blocks(&self) -> usize {
        self.blocks().iter().filter(|b| !b.is_destroyed()).count()
    }

    /// Regenerate the whole block grid with fresh colors
    pub fn reset_level(&mut self) {
        self.block_count = populate_blocks(&mut self.entities, &self.config.grid, &mut self.rng);
    }

    /// Place the ball centered on the paddle with its bottom on the paddle's top edge
    pub fn rest_ball_on_paddle(&mut self) {
        let (paddle_pos, paddle_width) = {
            let paddle = self.paddle();
            (paddle.position, paddle.width)
        };
        let ball = self.ball_mut();
        ball.position = Vec2::new(
            paddle_pos.x + paddle_width / 2.0 - ball.width / 2.0,
            paddle_pos.y - ball.height,
        );
    }

    /// Clamp the paddle's x into the playfield
    ///
    /// Only the position is touched. Velocity keeps decaying through friction,
    /// so a paddle pushed against a wall still carries its speed into the next
    /// ball hit.
    pub fn confine_paddle(&mut self) {
        let max_x = self.config.paddle_max_x();
        let paddle = self.paddle_mut();
        paddle.position.x = paddle.position.x.clamp(0.0, max_x);
    }
}
