//! Shared positional state for every entity

use glam::DVec2;

/// Canvas extent in pixels; the origin is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        self.size() / 2.0
    }
}

/// Position and per-frame velocity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    pub pos: DVec2,
    pub vel: DVec2,
}

impl Shape {
    pub fn new(pos: DVec2, vel: DVec2) -> Self {
        Self { pos, vel }
    }
}
