//! Simulation tick
//!
//! Advances the paddle game by one frame of `dt` seconds.

use super::collision::{ball_hits_paddle, bounce_off_paddle, clamp_paddle, resolve_ball_walls};
use super::state::{GameEvent, GamePhase, SimulationState, Wall};
use crate::consts::{PADDLE_BOOST, PADDLE_WALL_REBOUND};

/// Advance the game state by `dt` seconds and report what happened
///
/// Once the game is over the state is frozen and no events are produced.
pub fn tick(state: &mut SimulationState, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.phase == GamePhase::GameOver {
        return events;
    }

    // Integrate
    state.ball.integrate(dt);
    state.paddle.integrate(dt);

    // Ball against the window edges
    let contacts = resolve_ball_walls(&mut state.ball, state.arena);
    events.extend(
        contacts
            .walls()
            .filter(|wall| *wall != Wall::Floor)
            .map(GameEvent::WallBounce),
    );

    // Ball against the paddle
    if ball_hits_paddle(&state.ball, &state.paddle) {
        bounce_off_paddle(&mut state.ball, PADDLE_BOOST);
        events.push(GameEvent::PaddleHit);
    }

    // Paddle against the side walls
    if let Some(wall) = clamp_paddle(&mut state.paddle, state.arena, PADDLE_WALL_REBOUND) {
        events.push(GameEvent::PaddleBlocked(wall));
    }

    if contacts.floor {
        state.phase = GamePhase::GameOver;
        events.push(GameEvent::GameOver);
    }

    events
}
