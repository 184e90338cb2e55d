//! Moving square entry point
//!
//! A single square drifting across the window; quit or escape to exit.

use std::process::ExitCode;

use paddle_ball::Settings;
use paddle_ball::game::{MovingSquare, exit_code, run_windowed};

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Moving Square starting...");

    let settings = Settings::load().with_title("Moving Square");

    exit_code(run_windowed(&settings, MovingSquare::new()))
}
