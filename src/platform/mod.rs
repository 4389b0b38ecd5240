//! Platform abstraction layer
//!
//! The simulation talks to its host through three small traits:
//! - `TextDisplay`: somewhere to show the live ball count
//! - `KeyboardInput`: a source of key-down/key-up events
//! - `FrameScheduler`: pacing between frames
//!
//! Browser implementations live in `web`; headless ones are here.

pub mod autopilot;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use autopilot::Autopilot;

use crate::sim::{KeyState, Scene, StopFlag};

/// Something that can show a line of text
pub trait TextDisplay {
    fn set_text(&mut self, text: &str);
}

/// Tests and headless runs capture the last line shown
impl TextDisplay for String {
    fn set_text(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}

/// Writes each update to the log
#[derive(Debug, Default)]
pub struct LogDisplay;

impl TextDisplay for LogDisplay {
    fn set_text(&mut self, text: &str) {
        log::info!("{}", text);
    }
}

/// A source of keyboard events
///
/// `subscribe` is called once per scene. The implementation keeps `keys`
/// and reports every key-down/key-up into it for the rest of the process.
pub trait KeyboardInput {
    fn subscribe(&mut self, keys: KeyState);
}

/// No keyboard attached; the evil circle never moves
#[derive(Debug, Default)]
pub struct NoKeyboard;

impl KeyboardInput for NoKeyboard {
    fn subscribe(&mut self, _keys: KeyState) {}
}

/// Paces the run loop between frames
pub trait FrameScheduler {
    /// Called after every frame; returns when the next one should start
    fn next_frame(&mut self, scene: &Scene);
}

/// Stops the loop after a fixed number of frames
#[derive(Debug)]
pub struct FrameBudget {
    remaining: u64,
    stop: StopFlag,
}

impl FrameBudget {
    pub fn new(frames: u64, stop: StopFlag) -> Self {
        if frames == 0 {
            stop.stop();
        }
        Self {
            remaining: frames,
            stop,
        }
    }
}

impl FrameScheduler for FrameBudget {
    fn next_frame(&mut self, _scene: &Scene) {
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.stop.stop();
        }
    }
}

/// Sleeps so frames start at a fixed rate (native only)
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
pub struct FixedRate {
    interval: std::time::Duration,
    last: std::time::Instant,
}

#[cfg(not(target_arch = "wasm32"))]
impl FixedRate {
    pub fn new(fps: u32) -> Self {
        Self {
            interval: std::time::Duration::from_secs(1) / fps.max(1),
            last: std::time::Instant::now(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl FrameScheduler for FixedRate {
    fn next_frame(&mut self, _scene: &Scene) {
        let elapsed = self.last.elapsed();
        if elapsed < self.interval {
            std::thread::sleep(self.interval - elapsed);
        }
        self.last = std::time::Instant::now();
    }
}
