//! Drawing surfaces
//!
//! The simulation only issues three primitives; anything that can paint a
//! rectangle and filled/stroked circles can host it.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recorder;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recorder::{DrawCommand, Recorder};

use glam::DVec2;

use crate::color::Color;

/// A 2D target the simulation paints onto each frame
pub trait Surface {
    /// Fill an axis-aligned rectangle
    fn fill_rect(&mut self, origin: DVec2, size: DVec2, color: Color);

    /// Fill a circle
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color);

    /// Outline a circle
    fn stroke_circle(&mut self, center: DVec2, radius: f64, color: Color, line_width: f64);
}
