//! Breakout entry point
//!
//! Acquires the random seed and the window, then hands both to the game loop.
//! Exits with status 1 if either cannot be acquired.

use std::process::ExitCode;

use anyhow::Context;
use rand::TryRngCore;
use rand::rngs::OsRng;

use breakout::platform::MinifbDisplay;
use breakout::{App, GameConfig};

const WINDOW_TITLE: &str = "Breakout";

fn run() -> anyhow::Result<()> {
    let config = GameConfig::default();

    let seed = OsRng
        .try_next_u64()
        .context("cannot read from the OS random source")?;
    let display = MinifbDisplay::open(WINDOW_TITLE, config.width, config.height)
        .context("cannot connect to the display")?;

    let mut app = App::new(config, seed, display);
    app.run()
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Breakout starting...");

    match run() {
        Ok(()) => {
            log::info!("Program ended");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
