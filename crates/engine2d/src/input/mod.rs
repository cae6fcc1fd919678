//! Input management system
//!
//! The core only ever asks "is this key down this frame?" through
//! [`InputSource`]. Hosts poll their platform once per frame before the
//! update pass and expose the result through an implementation of that
//! trait; [`KeyboardState`] is a ready-made one with edge detection.

use serde::{Serialize, Deserialize};
use std::collections::HashSet;

/// Per-frame keyboard query used by the update pass
pub trait InputSource {
    /// Check whether the key is held down this frame
    fn is_down(&self, key: KeyCode) -> bool;

    /// Check whether any of the given keys is held down
    fn any_down(&self, keys: &[KeyCode]) -> bool {
        keys.iter().any(|&key| self.is_down(key))
    }

    /// Check whether the key went down this frame
    ///
    /// Sources without history report no edges.
    fn is_pressed(&self, _key: KeyCode) -> bool {
        false
    }
}

/// Polled keyboard state with previous-frame history
///
/// `is_pressed` and `is_released` report edges between the last two polls.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    current: HashSet<KeyCode>,
    previous: HashSet<KeyCode>,
}

impl KeyboardState {
    /// Create an empty keyboard state
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current state with a fresh poll, keeping the old one as history
    pub fn poll<I: IntoIterator<Item = KeyCode>>(&mut self, down: I) {
        self.previous = std::mem::take(&mut self.current);
        self.current.extend(down);
    }

    /// Start a new frame without changing which keys are held
    pub fn next_frame(&mut self) {
        self.previous.clone_from(&self.current);
    }

    /// Mark a key as held (event-driven hosts)
    pub fn press(&mut self, key: KeyCode) {
        self.current.insert(key);
    }

    /// Mark a key as released (event-driven hosts)
    pub fn release(&mut self, key: KeyCode) {
        self.current.remove(&key);
    }

    /// Check whether the key went up this frame
    pub fn is_released(&self, key: KeyCode) -> bool {
        !self.current.contains(&key) && self.previous.contains(&key)
    }
}

impl InputSource for KeyboardState {
    fn is_down(&self, key: KeyCode) -> bool {
        self.current.contains(&key)
    }

    fn is_pressed(&self, key: KeyCode) -> bool {
        self.current.contains(&key) && !self.previous.contains(&key)
    }
}

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    /// A key
    A,
    /// D key
    D,
    /// Q key
    Q,
    /// S key
    S,
    /// W key
    W,
    /// Space key
    Space,
    /// Enter key
    Enter,
    /// Escape key
    Escape,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
}
