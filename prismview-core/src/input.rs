//! Keyboard input abstraction
//!
//! The scene never talks to a windowing library directly. Instead it asks an
//! [`InputSource`] two kinds of question each frame: which keys are currently
//! held, and which keys went down since the last frame.

use std::collections::HashSet;

/// Keys the scene reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Q,
    E,
    A,
    D,
    W,
    S,
    M,
    B,
    J,
    N,
    H,
    K,
    Digit1,
    Digit2,
    R,
    T,
    Escape,
}

/// A single press transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPressed(pub Key);

/// Source of per-frame keyboard state
pub trait InputSource {
    /// Whether `key` is down right now
    fn is_held(&self, key: Key) -> bool;

    /// Drain the press transitions recorded since the last call
    fn consume_edge_events(&mut self) -> Vec<KeyPressed>;
}

/// Tracks held keys and queues press edges from raw key events
#[derive(Debug, Default)]
pub struct KeyboardState {
    held: HashSet<Key>,
    pending: Vec<KeyPressed>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a raw key event. Auto-repeat presses keep the key held but do
    /// not queue another edge.
    pub fn handle(&mut self, key: Key, pressed: bool, repeat: bool) {
        if pressed {
            let newly_down = self.held.insert(key);
            if newly_down && !repeat {
                self.pending.push(KeyPressed(key));
            }
        } else {
            self.held.remove(&key);
        }
    }

    pub fn press(&mut self, key: Key) {
        self.handle(key, true, false);
    }

    pub fn release(&mut self, key: Key) {
        self.handle(key, false, false);
    }

    /// Forget everything, e.g. when the window loses focus
    pub fn clear(&mut self) {
        self.held.clear();
        self.pending.clear();
    }
}

impl InputSource for KeyboardState {
    fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    fn consume_edge_events(&mut self) -> Vec<KeyPressed> {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_is_held_until_release() {
        let mut keyboard = KeyboardState::new();
        keyboard.press(Key::W);
        assert!(keyboard.is_held(Key::W));
        assert!(!keyboard.is_held(Key::S));

        keyboard.release(Key::W);
        assert!(!keyboard.is_held(Key::W));
    }

    #[test]
    fn test_edges_fire_once_per_press() {
        let mut keyboard = KeyboardState::new();
        keyboard.press(Key::R);
        keyboard.handle(Key::R, true, true);
        keyboard.handle(Key::R, true, false);

        assert_eq!(keyboard.consume_edge_events(), vec![KeyPressed(Key::R)]);
        assert!(keyboard.consume_edge_events().is_empty());

        keyboard.release(Key::R);
        keyboard.press(Key::R);
        keyboard.press(Key::T);
        assert_eq!(
            keyboard.consume_edge_events(),
            vec![KeyPressed(Key::R), KeyPressed(Key::T)]
        );
    }

    #[test]
    fn test_clear_drops_held_and_pending() {
        let mut keyboard = KeyboardState::new();
        keyboard.press(Key::A);
        keyboard.clear();
        assert!(!keyboard.is_held(Key::A));
        assert!(keyboard.consume_edge_events().is_empty());
    }
}
