//! Drawing surface abstraction
//!
//! The game only ever needs two operations: pick a fill color and fill a
//! rectangle. The browser canvas implements this directly; `CommandBuffer`
//! records the calls for headless runs and tests.

use super::shapes::Rect;

pub trait Surface {
    /// Called once before each frame is painted
    fn begin_frame(&mut self) {}

    /// Set the color used by subsequent fills (CSS color string)
    fn set_fill_color(&mut self, color: &str);

    /// Fill a rectangle; (x, y) is the top-left corner
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    SetFill(String),
    FillRect(Rect),
}

/// Surface that records draw calls instead of painting pixels
#[derive(Debug, Clone, Default)]
pub struct CommandBuffer {
    pub commands: Vec<DrawCommand>,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Filled rectangles paired with the color active when each was drawn
    pub fn fills(&self) -> Vec<(&str, Rect)> {
        let mut color = "";
        let mut fills = Vec::new();
        for command in &self.commands {
            match command {
                DrawCommand::SetFill(c) => color = c.as_str(),
                DrawCommand::FillRect(rect) => fills.push((color, *rect)),
            }
        }
        fills
    }
}

impl Surface for CommandBuffer {
    /// Keep only the latest frame
    fn begin_frame(&mut self) {
        self.clear();
    }

    fn set_fill_color(&mut self, color: &str) {
        self.commands.push(DrawCommand::SetFill(color.to_string()));
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.commands
            .push(DrawCommand::FillRect(Rect::new(x, y, width, height)));
    }
}
