//! Paddle Ball entry point
//!
//! Opens the window and runs the paddle game until quit or escape.

use std::process::ExitCode;

use paddle_ball::Settings;
use paddle_ball::game::{PaddleGame, exit_code, run_windowed};

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Paddle Ball starting...");

    let settings = Settings::load();
    let game = PaddleGame::new(&settings);

    exit_code(run_windowed(&settings, game))
}
