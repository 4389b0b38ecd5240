//! Canvas 2D surface (browser only)

use std::f64::consts::TAU;

use glam::DVec2;
use web_sys::CanvasRenderingContext2d;

use super::Surface;
use crate::color::Color;

/// Paints onto a `<canvas>` through its 2D context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn circle_path(&self, center: DVec2, radius: f64) -> bool {
        self.ctx.begin_path();
        match self.ctx.arc(center.x, center.y, radius, 0.0, TAU) {
            Ok(()) => true,
            Err(e) => {
                // Negative radius is the only way arc() throws
                log::warn!("arc({}, {}, {}) rejected: {:?}", center.x, center.y, radius, e);
                false
            }
        }
    }
}

impl Surface for CanvasSurface {
    fn fill_rect(&mut self, origin: DVec2, size: DVec2, color: Color) {
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx.fill_rect(origin.x, origin.y, size.x, size.y);
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color) {
        self.ctx.set_fill_style_str(&color.to_string());
        if self.circle_path(center, radius) {
            self.ctx.fill();
        }
    }

    fn stroke_circle(&mut self, center: DVec2, radius: f64, color: Color, line_width: f64) {
        self.ctx.set_stroke_style_str(&color.to_string());
        self.ctx.set_line_width(line_width);
        if self.circle_path(center, radius) {
            self.ctx.stroke();
        }
    }
}
