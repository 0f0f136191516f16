//! # Input Protocol
//!
//! The input state the host passes to the Canvas every frame. The sketch only
//! reacts to a single key, so this stays small.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Keys the Canvas cares about. The host decides which physical key maps here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Freeze or unfreeze the frame loop (numpad 1 in the playground).
    TogglePause,
}

/// The input state for a single frame.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InputState {
    /// Keys pressed *this frame*.
    pub pressed_keys: Vec<Key>,
    /// Size of the canvas viewport in Screen Space (pixels).
    pub screen_size: Vec2,
    /// Seconds since the previous frame. Zero when unknown.
    pub frame_time: f32,
}

impl InputState {
    pub fn with_key(mut self, key: Key) -> Self {
        self.pressed_keys.push(key);
        self
    }

    /// Frames per second derived from `frame_time`.
    pub fn fps(&self) -> f32 {
        if self.frame_time > 0.0 {
            1.0 / self.frame_time
        } else {
            0.0
        }
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            pressed_keys: Vec::new(),
            screen_size: Vec2::new(600.0, 500.0),
            frame_time: 0.0,
        }
    }
}
