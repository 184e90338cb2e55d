//! Platform abstraction layer
//!
//! Handles the outside world for the game loop:
//! - Time/ticks and frame pacing (`time`)
//! - Input events (`input`)
//! - The native window and its event loop (`window`)
//! - Scripted stand-ins for all of the above (`headless`, tests and the
//!   `testing` feature only)

#[cfg(any(test, feature = "testing"))]
pub mod headless;
pub mod input;
pub mod time;
pub mod window;

pub use input::{EventSource, InputEvent, Key};
pub use time::{Clock, FramePacer, SystemClock};
pub use window::Platform;
