//! Shape generation for 2D primitives

use super::vertex::Vertex;
use super::{Color, Rect};

/// Two triangles covering `rect`, in pixel coordinates
pub fn rect(rect: Rect, color: Color) -> [Vertex; 6] {
    let color = color.to_array();
    let x0 = rect.x as f32;
    let y0 = rect.y as f32;
    let x1 = x0 + rect.w as f32;
    let y1 = y0 + rect.h as f32;

    [
        Vertex::new(x0, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Map a pixel position (y down) to normalized device coordinates (y up)
pub fn pixel_to_ndc(x: f32, y: f32, width: f32, height: f32) -> (f32, f32) {
    (x / width * 2.0 - 1.0, 1.0 - y / height * 2.0)
}
