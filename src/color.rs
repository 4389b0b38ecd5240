//! CSS color values
//!
//! Colors are handed to the drawing surface as CSS strings, so `Display`
//! produces exactly what a canvas `fillStyle`/`strokeStyle` accepts.

use std::fmt;

/// A color understood by the drawing surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    /// Opaque RGB, rendered as `rgb(r,g,b)`
    Rgb { r: u8, g: u8, b: u8 },
    /// RGB with alpha (0-1), rendered as `rgba(r, g, b, a)`
    Rgba { r: u8, g: u8, b: u8, a: f32 },
    /// The CSS keyword `white`
    White,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    /// Translucent black used for the trail fade
    pub const fn fade(alpha: f32) -> Self {
        Color::Rgba {
            r: 0,
            g: 0,
            b: 0,
            a: alpha,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgb { r, g, b } => write!(f, "rgb({},{},{})", r, g, b),
            Color::Rgba { r, g, b, a } => write!(f, "rgba({}, {}, {}, {})", r, g, b, a),
            Color::White => f.write_str("white"),
        }
    }
}
