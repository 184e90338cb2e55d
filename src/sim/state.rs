//! Game state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball in play
    Playing,
    /// Ball reached the floor (terminal)
    GameOver,
}

/// One of the four window edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wall {
    Left,
    Right,
    Top,
    Floor,
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball reflected off a wall
    WallBounce(Wall),
    /// Ball bounced off the paddle
    PaddleHit,
    /// Paddle hit a wall and was pushed back
    PaddleBlocked(Wall),
    /// Ball reached the floor
    GameOver,
}

/// Complete simulation state of the paddle game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    pub ball: Body,
    pub paddle: Body,
    pub phase: GamePhase,
    /// Width and height of the play field (the window)
    pub arena: Vec2,
}

impl SimulationState {
    /// Starting state: ball in the top-left corner heading down-right,
    /// paddle centered near the bottom
    pub fn new(arena: Vec2) -> Self {
        let ball = Body::new(0.0, 0.0, BALL_SIZE, BALL_SIZE)
            .with_vel(BALL_START_VEL_X, BALL_START_VEL_Y);
        let paddle = Body::new(
            arena.x / 2.0 - PADDLE_WIDTH / 2.0,
            arena.y - PADDLE_FLOOR_OFFSET,
            PADDLE_WIDTH,
            PADDLE_HEIGHT,
        );

        Self {
            ball,
            paddle,
            phase: GamePhase::Playing,
            arena,
        }
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Add to the paddle's horizontal velocity (key press)
    pub fn nudge_paddle(&mut self, delta: f32) {
        self.paddle.vel.x += delta;
    }

    /// Stop horizontal paddle motion (key release)
    pub fn stop_paddle(&mut self) {
        self.paddle.vel.x = 0.0;
    }
}
