//! HTML canvas 2D backend

use web_sys::CanvasRenderingContext2d;

use super::surface::Surface;

impl Surface for CanvasRenderingContext2d {
    fn set_fill_color(&mut self, color: &str) {
        self.set_fill_style_str(color);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        CanvasRenderingContext2d::fill_rect(self, x as f64, y as f64, width as f64, height as f64);
    }
}
