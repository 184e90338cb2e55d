//! Axis-aligned moving rectangles

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle with a velocity
///
/// Position is the top-left corner in window pixels, y grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub size: Vec2,
    /// Pixels per second
    pub vel: Vec2,
}

impl Body {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
            vel: Vec2::ZERO,
        }
    }

    pub const fn with_vel(mut self, vel_x: f32, vel_y: f32) -> Self {
        self.vel = Vec2::new(vel_x, vel_y);
        self
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Advance position by velocity over `dt` seconds
    #[inline]
    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let body = Body::new(10.0, 20.0, 15.0, 5.0);
        assert_eq!(body.left(), 10.0);
        assert_eq!(body.right(), 25.0);
        assert_eq!(body.top(), 20.0);
        assert_eq!(body.bottom(), 25.0);
    }

    #[test]
    fn test_integrate() {
        let mut body = Body::new(0.0, 0.0, 1.0, 1.0).with_vel(300.0, -120.0);
        body.integrate(0.5);
        assert!((body.pos.x - 150.0).abs() < 0.001);
        assert!((body.pos.y + 60.0).abs() < 0.001);
        // Size never changes
        assert_eq!(body.size, Vec2::new(1.0, 1.0));
    }
}
