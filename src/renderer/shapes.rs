//! Rectangle helpers for 2D primitives

use glam::Vec2;

use crate::sim::Body;

/// Axis-aligned rectangle given by its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of `size` centered on `center`
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        let top_left = center - size / 2.0;
        Self::new(top_left.x, top_left.y, size.x, size.y)
    }

    pub fn from_body(body: &Body) -> Self {
        Self::centered(body.center, body.size)
    }
}
