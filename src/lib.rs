//! Bouncing Balls - colliding circles and an evil circle that eats them
//!
//! Core modules:
//! - `sim`: Simulation (entities, collisions, per-frame tick, run loop)
//! - `renderer`: Drawing surfaces (Canvas 2D, headless recorder)
//! - `platform`: Browser/native collaborators (keyboard, text display, frame pacing)
//! - `config`: Scene tuning values
//! - `rng`: Integer and color sampling

pub mod color;
pub mod config;
pub mod platform;
pub mod renderer;
pub mod rng;
pub mod sim;

pub use color::Color;
pub use config::{ConfigError, SceneConfig};

/// Scene defaults
pub mod consts {
    /// Number of balls created at bootstrap
    pub const BALL_COUNT: usize = 25;
    /// Ball radius range (inclusive)
    pub const MIN_BALL_SIZE: i32 = 10;
    pub const MAX_BALL_SIZE: i32 = 20;
    /// Per-axis ball velocity range is [-MAX_SPEED, MAX_SPEED]
    pub const MAX_SPEED: i32 = 7;

    /// Evil circle defaults
    pub const EVIL_SIZE: f64 = 10.0;
    pub const EVIL_STEP: f64 = 5.0;
    pub const EVIL_LINE_WIDTH: f64 = 3.0;

    /// Alpha of the black fill painted over the canvas each frame
    pub const TRAIL_ALPHA: f32 = 0.25;
}

/// Text shown by the counter display
#[inline]
pub fn ball_count_text(count: usize) -> String {
    format!("Ball count: {}", count)
}
