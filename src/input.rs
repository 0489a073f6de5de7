//! Keyboard input state
//!
//! Host key events set and clear entries here; the tick reads them. No
//! debouncing, no repeat suppression, last writer wins.

use std::collections::HashSet;

/// Key identifier delivered by the host. Printable characters and named
/// directional/function keys arrive through separate host channels, hence
/// the separate variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Printable ASCII key
    Char(char),
    Up,
    Down,
    Left,
    Right,
    Escape,
}

/// The set of currently-pressed keys
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pressed: HashSet<Key>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press or release event
    pub fn set(&mut self, key: Key, pressed: bool) {
        if pressed {
            self.pressed.insert(key);
        } else {
            self.pressed.remove(&key);
        }
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }
}
