//! Collision detection and response for axis-aligned rectangles
//!
//! All tests compare edges directly. There is no continuous collision:
//! a body that moves far enough in one step is simply clamped back.

use glam::Vec2;

use super::body::Body;
use super::state::Wall;

/// Which window edges the ball touched this step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContacts {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub floor: bool,
}

impl WallContacts {
    /// Touched walls in check order
    pub fn walls(&self) -> impl Iterator<Item = Wall> {
        [
            (self.left, Wall::Left),
            (self.right, Wall::Right),
            (self.top, Wall::Top),
            (self.floor, Wall::Floor),
        ]
        .into_iter()
        .filter_map(|(hit, wall)| hit.then_some(wall))
    }
}

/// Keep the ball inside the arena
///
/// Side and top walls clamp and reflect the matching velocity component.
/// The floor clamps and stops the ball entirely.
pub fn resolve_ball_walls(ball: &mut Body, arena: Vec2) -> WallContacts {
    let mut contacts = WallContacts::default();

    if ball.left() <= 0.0 {
        ball.pos.x = 0.0;
        ball.vel.x *= -1.0;
        contacts.left = true;
    }
    if ball.right() >= arena.x {
        ball.pos.x = arena.x - ball.size.x;
        ball.vel.x *= -1.0;
        contacts.right = true;
    }

    if ball.top() <= 0.0 {
        ball.pos.y = 0.0;
        ball.vel.y *= -1.0;
        contacts.top = true;
    }
    if ball.bottom() >= arena.y {
        ball.pos.y = arena.y - ball.size.y;
        ball.vel = Vec2::ZERO;
        contacts.floor = true;
    }

    contacts
}

/// Ball's bottom edge at or below the paddle's top edge while the two
/// overlap horizontally
pub fn ball_hits_paddle(ball: &Body, paddle: &Body) -> bool {
    ball.bottom() >= paddle.top() && ball.right() >= paddle.left() && ball.left() <= paddle.right()
}

/// Bounce the ball upwards, speeding it up by `boost`
pub fn bounce_off_paddle(ball: &mut Body, boost: f32) {
    ball.vel.y *= -boost;
    ball.vel.x *= boost;
}

/// Keep the paddle inside the arena, pushing it back from the wall it hit
pub fn clamp_paddle(paddle: &mut Body, arena: Vec2, rebound: f32) -> Option<Wall> {
    let mut blocked = None;

    if paddle.left() <= 0.0 {
        paddle.pos.x = 0.0;
        paddle.vel.x = rebound;
        blocked = Some(Wall::Left);
    }
    if paddle.right() >= arena.x {
        paddle.pos.x = arena.x - paddle.size.x;
        paddle.vel.x = -rebound;
        blocked = Some(Wall::Right);
    }

    blocked
}
