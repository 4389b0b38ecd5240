//! Headless surface that remembers what it was asked to draw

use glam::DVec2;

use super::Surface;
use crate::color::Color;

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect {
        origin: DVec2,
        size: DVec2,
        color: Color,
    },
    FilledCircle {
        center: DVec2,
        radius: f64,
        color: Color,
    },
    StrokedCircle {
        center: DVec2,
        radius: f64,
        color: Color,
        line_width: f64,
    },
}

/// Surface that records commands instead of painting pixels
#[derive(Debug, Default)]
pub struct Recorder {
    pub commands: Vec<DrawCommand>,
    /// Keep only the most recent frame's worth of commands
    retain_last_frame: bool,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A recorder that drops history whenever a full-canvas fill starts a new frame
    pub fn last_frame_only() -> Self {
        Self {
            commands: Vec::new(),
            retain_last_frame: true,
        }
    }

    /// Number of filled circles (balls) drawn
    pub fn filled_circles(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FilledCircle { .. }))
            .count()
    }

    /// Number of stroked circles (evil circle) drawn
    pub fn stroked_circles(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::StrokedCircle { .. }))
            .count()
    }
}

impl Surface for Recorder {
    fn fill_rect(&mut self, origin: DVec2, size: DVec2, color: Color) {
        if self.retain_last_frame {
            self.commands.clear();
        }
        self.commands.push(DrawCommand::Rect {
            origin,
            size,
            color,
        });
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color) {
        self.commands.push(DrawCommand::FilledCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, center: DVec2, radius: f64, color: Color, line_width: f64) {
        self.commands.push(DrawCommand::StrokedCircle {
            center,
            radius,
            color,
            line_width,
        });
    }
}
