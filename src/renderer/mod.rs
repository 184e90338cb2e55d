//! Rendering module
//!
//! The game only ever clears the frame, fills rectangles and presents.
//! `RenderSurface` is that contract; `RenderState` implements it with wgpu.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;

use crate::sim::Body;

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Normalized components for vertex data
    pub fn to_array(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }

    pub fn to_wgpu(self) -> wgpu::Color {
        let [r, g, b, a] = self.to_array();
        wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: a as f64,
        }
    }
}

/// Integer pixel rectangle, top-left origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }
}

impl From<&Body> for Rect {
    /// Truncates toward zero, like the casts to integer pixels it replaces
    fn from(body: &Body) -> Self {
        Rect::new(
            body.pos.x as i32,
            body.pos.y as i32,
            body.size.x as i32,
            body.size.y as i32,
        )
    }
}

/// One recorded call against a `RenderSurface`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCommand {
    Clear(Color),
    FillRect(Rect, Color),
    Present,
}

/// A frame buffer that can be cleared, drawn into and shown
pub trait RenderSurface {
    /// Fill the whole frame with `color`, discarding anything drawn so far
    fn clear(&mut self, color: Color);
    /// Draw a solid rectangle on top of the frame
    fn fill_rect(&mut self, rect: Rect, color: Color);
    /// Show the frame
    fn present(&mut self);
}
