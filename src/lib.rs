//! Paddle Ball - a fixed-timestep paddle and ball game
//!
//! Core modules:
//! - `sim`: Simulation state, collision response and the per-frame tick
//! - `game`: The input → update → render loop and the scenes it drives
//! - `platform`: Clock, input events and the native window
//! - `renderer`: wgpu rectangle renderer behind the `RenderSurface` trait
//! - `settings`: Window and frame-rate configuration

pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{GameError, GameResult};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Window dimensions in pixels
    pub const WINDOW_WIDTH: u32 = 800;
    pub const WINDOW_HEIGHT: u32 = 600;

    /// Target frame rate
    pub const FPS: u32 = 60;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 15.0;
    pub const BALL_START_VEL_X: f32 = 300.0;
    pub const BALL_START_VEL_Y: f32 = 200.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    /// Distance from the top of the paddle to the bottom of the window
    pub const PADDLE_FLOOR_OFFSET: f32 = 40.0;
    /// Velocity added per movement key press (pixels/s)
    pub const PADDLE_NUDGE: f32 = 200.0;
    /// Speed the paddle is pushed back with after touching a wall
    pub const PADDLE_WALL_REBOUND: f32 = 500.0;

    /// Speed multiplier applied to the ball on every paddle hit
    pub const PADDLE_BOOST: f32 = 1.02;

    /// Moving square demo: start position and per-frame drift
    pub const SQUARE_START: f32 = 20.0;
    pub const SQUARE_DRIFT_PER_FRAME: f32 = 2.0;
}
