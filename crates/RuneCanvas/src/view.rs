//! # Viewport
//!
//! Layout positions are computed in grid space, relative to the top-left of the
//! rune grid. The view translates them into screen pixels and remembers how big
//! the drawing surface is.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Offset applied to everything drawn in grid space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Screen position of the grid origin.
    pub translate: Vec2,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translate: Vec2::ZERO,
        }
    }
}

/// The transform plus the size of the drawing surface.
#[derive(Clone, Copy, Debug)]
pub struct View {
    pub transform: Transform,
    /// The size of the visible area in pixels.
    pub viewport_size: Vec2,
}

impl View {
    pub fn new(transform: Transform, viewport_size: Vec2) -> Self {
        Self {
            transform,
            viewport_size,
        }
    }

    /// Converts a grid-space point into screen pixels.
    pub fn grid_to_screen(&self, grid_pos: Vec2) -> Vec2 {
        grid_pos + self.transform.translate
    }
}
