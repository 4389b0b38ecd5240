//! Keyboard state for the evil circle
//!
//! Listeners write into it between frames, the movement step reads it once
//! per frame. Handles are cheap clones of the same map.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Movement keys
pub const KEY_LEFT: &str = "a";
pub const KEY_RIGHT: &str = "d";
pub const KEY_UP: &str = "w";
pub const KEY_DOWN: &str = "s";

/// Latest pressed/released state per lowercase key identifier
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    pressed: Rc<RefCell<HashMap<String, bool>>>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&self, key: &str) {
        self.set(key, true);
    }

    pub fn key_up(&self, key: &str) {
        self.set(key, false);
    }

    fn set(&self, key: &str, pressed: bool) {
        self.pressed.borrow_mut().insert(key.to_lowercase(), pressed);
    }

    /// Whether `key` (already lowercase) is currently held
    pub fn is_pressed(&self, key: &str) -> bool {
        self.pressed.borrow().get(key).copied().unwrap_or(false)
    }

    /// Mark every known key released
    pub fn release_all(&self) {
        for pressed in self.pressed.borrow_mut().values_mut() {
            *pressed = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_lowercased() {
        let keys = KeyState::new();
        keys.key_down("W");
        assert!(keys.is_pressed("w"));
        keys.key_up("w");
        assert!(!keys.is_pressed("w"));
    }

    #[test]
    fn test_clones_share_state() {
        let keys = KeyState::new();
        let listener = keys.clone();
        listener.key_down("a");
        assert!(keys.is_pressed(KEY_LEFT));
        keys.release_all();
        assert!(!listener.is_pressed(KEY_LEFT));
    }

    #[test]
    fn test_unknown_key_is_released() {
        assert!(!KeyState::new().is_pressed("q"));
    }
}
