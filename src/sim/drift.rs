//! Moving square demo: a lone body drifting a fixed amount every frame

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use crate::consts::{BALL_SIZE, SQUARE_DRIFT_PER_FRAME, SQUARE_START};

/// State of the moving square demo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriftState {
    pub square: Body,
    /// Frames advanced so far
    pub frames: u64,
}

impl Default for DriftState {
    fn default() -> Self {
        Self {
            square: Body::new(SQUARE_START, SQUARE_START, BALL_SIZE, BALL_SIZE),
            frames: 0,
        }
    }
}

impl DriftState {
    /// Advance one frame. Movement is per frame, not per second, and the
    /// square is allowed to leave the window.
    pub fn step(&mut self) {
        self.square.pos += Vec2::splat(SQUARE_DRIFT_PER_FRAME);
        self.frames += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_twenty() {
        let state = DriftState::default();
        assert_eq!(state.square.pos, Vec2::new(20.0, 20.0));
        assert_eq!(state.square.size, Vec2::new(15.0, 15.0));
    }

    #[test]
    fn test_drifts_two_pixels_per_frame() {
        let mut state = DriftState::default();
        for _ in 0..10 {
            state.step();
        }
        assert_eq!(state.square.pos, Vec2::new(40.0, 40.0));
        assert_eq!(state.frames, 10);
    }
}
