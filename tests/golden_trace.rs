//! Replays fixed 1/60 s steps without real-time pacing and compares
//! against a direct, scalar accumulation of the movement and collision rules.

use glam::Vec2;
use paddle_ball::sim::{GameEvent, GamePhase, SimulationState, tick};

const ARENA: Vec2 = Vec2::new(800.0, 600.0);
const DT: f32 = 1.0 / 60.0;

/// Plain-float rendition of one frame of the rules
#[derive(Debug, Clone, Copy)]
struct Reference {
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    vx: f32,
    vy: f32,
    px: f32,
    py: f32,
    pw: f32,
    pvx: f32,
    over: bool,
}

impl Reference {
    fn from_state(state: &SimulationState) -> Self {
        Self {
            x: state.ball.pos.x,
            y: state.ball.pos.y,
            w: state.ball.size.x,
            h: state.ball.size.y,
            vx: state.ball.vel.x,
            vy: state.ball.vel.y,
            px: state.paddle.pos.x,
            py: state.paddle.pos.y,
            pw: state.paddle.size.x,
            pvx: state.paddle.vel.x,
            over: false,
        }
    }

    fn step(&mut self, dt: f32) {
        if self.over {
            return;
        }
        let (width, height) = (ARENA.x, ARENA.y);

        self.x += self.vx * dt;
        self.y += self.vy * dt;
        self.px += self.pvx * dt;

        if self.x <= 0.0 {
            self.x = 0.0;
            self.vx *= -1.0;
        }
        if self.x + self.w >= width {
            self.x = width - self.w;
            self.vx *= -1.0;
        }
        if self.y <= 0.0 {
            self.y = 0.0;
            self.vy *= -1.0;
        }
        let floor = self.y + self.h >= height;
        if floor {
            self.y = height - self.h;
            self.vx = 0.0;
            self.vy = 0.0;
        }

        if self.y + self.h >= self.py && self.x + self.w >= self.px && self.x <= self.px + self.pw
        {
            self.vy *= -1.02;
            self.vx *= 1.02;
        }

        if self.px <= 0.0 {
            self.px = 0.0;
            self.pvx = 500.0;
        }
        if self.px + self.pw >= width {
            self.px = width - self.pw;
            self.pvx = -500.0;
        }

        if floor {
            self.over = true;
        }
    }

    fn assert_matches(&self, state: &SimulationState, step: usize) {
        let ball = &state.ball;
        assert_eq!(ball.pos, Vec2::new(self.x, self.y), "ball pos at step {}", step);
        assert_eq!(ball.vel, Vec2::new(self.vx, self.vy), "ball vel at step {}", step);
        assert_eq!(state.paddle.pos.x, self.px, "paddle x at step {}", step);
        assert_eq!(state.paddle.pos.y, self.py, "paddle y at step {}", step);
        assert_eq!(state.paddle.vel.x, self.pvx, "paddle vel at step {}", step);
        assert_eq!(state.is_game_over(), self.over, "phase at step {}", step);
    }
}

#[test]
fn test_initial_state_trace() {
    let mut state = SimulationState::new(ARENA);
    let mut reference = Reference::from_state(&state);
    let mut game_over_step = None;
    let mut paddle_hits = 0;

    for step in 1..=240 {
        let events = tick(&mut state, DT);
        reference.step(DT);
        reference.assert_matches(&state, step);

        paddle_hits += events.iter().filter(|e| **e == GameEvent::PaddleHit).count();
        if events.contains(&GameEvent::GameOver) {
            assert!(game_over_step.is_none(), "game over reported twice");
            game_over_step = Some(step);
        }

        if step == 60 {
            // One second at the starting velocity
            assert!((state.ball.pos.x - 300.0).abs() < 0.01);
            assert!((state.ball.pos.y - 200.0).abs() < 0.01);
        }
    }

    // Right wall around step 157, floor at step 176, paddle never reached
    assert_eq!(game_over_step, Some(176));
    assert_eq!(paddle_hits, 0);
    assert_eq!(state.phase, GamePhase::GameOver);
    assert_eq!(state.ball.pos.y, 585.0);
    assert!((state.ball.pos.x - 692.5).abs() <= 3.0);
    assert_eq!(state.ball.vel, Vec2::ZERO);
}

#[test]
fn test_paddle_catch_trace() {
    let mut state = SimulationState::new(ARENA);
    // Where the ball comes down after its first right-wall bounce
    state.paddle.pos.x = 690.0;
    let mut reference = Reference::from_state(&state);
    let mut paddle_hits = 0;

    for step in 1..=600 {
        let events = tick(&mut state, DT);
        reference.step(DT);
        reference.assert_matches(&state, step);
        paddle_hits += events.iter().filter(|e| **e == GameEvent::PaddleHit).count();
    }

    assert!(paddle_hits >= 1);
}

#[test]
fn test_moving_paddle_trace() {
    let mut state = SimulationState::new(ARENA);
    state.paddle.vel.x = 200.0;
    let mut reference = Reference::from_state(&state);
    let mut blocked = 0;

    for step in 1..=600 {
        let events = tick(&mut state, DT);
        reference.step(DT);
        reference.assert_matches(&state, step);
        blocked += events
            .iter()
            .filter(|e| matches!(e, GameEvent::PaddleBlocked(_)))
            .count();
    }

    // Paddle reaches the right wall within two seconds and gets pushed back
    assert!(blocked >= 1);
}
