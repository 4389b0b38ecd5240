//! Demo driver that plays the evil circle
//!
//! Holds the movement keys that point at the nearest live ball, the same
//! way a player would. Used by headless runs.

use crate::sim::input::{KEY_DOWN, KEY_LEFT, KEY_RIGHT, KEY_UP};
use crate::sim::{KeyState, Scene};

use super::KeyboardInput;

/// Keyboard that steers toward the nearest ball
#[derive(Debug, Default)]
pub struct Autopilot {
    keys: Option<KeyState>,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update held keys for the coming frame
    pub fn steer(&self, scene: &Scene) {
        let Some(keys) = &self.keys else {
            return;
        };
        keys.release_all();

        let evil = &scene.evil;
        let Some(target) = scene.nearest_alive(evil.pos()) else {
            return;
        };

        // Dead zone of half a step stops jitter once lined up
        let delta = target.pos() - evil.pos();
        let dead_zone = evil.shape.vel / 2.0;
        if delta.x > dead_zone.x {
            keys.key_down(KEY_RIGHT);
        } else if delta.x < -dead_zone.x {
            keys.key_down(KEY_LEFT);
        }
        if delta.y > dead_zone.y {
            keys.key_down(KEY_DOWN);
        } else if delta.y < -dead_zone.y {
            keys.key_down(KEY_UP);
        }
    }
}

impl KeyboardInput for Autopilot {
    fn subscribe(&mut self, keys: KeyState) {
        self.keys = Some(keys);
    }
}
