//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform dependencies:
//! - Time only enters as the `dt` argument of a tick
//! - Positions are window pixels, y grows downwards

pub mod body;
pub mod collision;
pub mod drift;
pub mod state;
pub mod tick;

pub use body::Body;
pub use collision::{WallContacts, ball_hits_paddle, clamp_paddle, resolve_ball_walls};
pub use drift::DriftState;
pub use state::{GameEvent, GamePhase, SimulationState, Wall};
pub use tick::tick;
