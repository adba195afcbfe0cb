//! Rendering boundary
//!
//! The engine only issues 2D draw primitives; how a surface presents them is
//! up to the host.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A generic 2D drawing target
pub trait Surface {
    fn clear(&mut self, size: Vec2, color: &str);
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str);
    /// Text centred horizontally on `anchor`
    fn fill_text(&mut self, text: &str, anchor: Vec2, font: &str, color: &str);
}

/// One recorded draw primitive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Clear {
        size: Vec2,
        color: String,
    },
    Rect {
        pos: Vec2,
        size: Vec2,
        color: String,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: String,
    },
    Text {
        text: String,
        anchor: Vec2,
        font: String,
        color: String,
    },
}

/// Surface that records draw commands, one frame at a time
#[derive(Debug, Clone, Default)]
pub struct FrameRecorder {
    commands: Vec<DrawCommand>,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Take the recorded commands, leaving the recorder empty
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Text of every `Text` command, in draw order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for FrameRecorder {
    fn clear(&mut self, size: Vec2, color: &str) {
        // A clear starts a new frame
        self.commands.clear();
        self.commands.push(DrawCommand::Clear {
            size,
            color: color.to_string(),
        });
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str) {
        self.commands.push(DrawCommand::Rect {
            pos,
            size,
            color: color.to_string(),
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color: color.to_string(),
        });
    }

    fn fill_text(&mut self, text: &str, anchor: Vec2, font: &str, color: &str) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            anchor,
            font: font.to_string(),
            color: color.to_string(),
        });
    }
}

/// Surface that draws nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn clear(&mut self, _size: Vec2, _color: &str) {}
    fn fill_rect(&mut self, _pos: Vec2, _size: Vec2, _color: &str) {}
    fn fill_circle(&mut self, _center: Vec2, _radius: f32, _color: &str) {}
    fn fill_text(&mut self, _text: &str, _anchor: Vec2, _font: &str, _color: &str) {}
}
