//! # Rendering System
//!
//! The painter and overlay never draw anything themselves. They output a display
//! list of `DrawCommand`s and the host (macroquad, a test, a recorder) turns
//! each one into pixels.

use glam::{Vec2, Vec4};
use serde::{Deserialize, Serialize};

use crate::model::ImageKey;

/// A single drawing primitive.
///
/// Coordinates are in **Screen Space** (Pixels).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Fill the whole viewport.
    Clear {
        /// Background color (RGBA, 0.0 - 1.0).
        color: Vec4,
    },
    /// A filled axis-aligned rectangle.
    Rect {
        /// Top-left position in screen pixels.
        pos: Vec2,
        /// Size in screen pixels.
        size: Vec2,
        /// Fill color (RGBA, 0.0 - 1.0).
        color: Vec4,
    },
    /// A loaded image, stretched to `size`.
    Image {
        /// Which entry of the scene's image table to draw.
        image: ImageKey,
        /// Top-left position in screen pixels.
        pos: Vec2,
        /// Size in screen pixels.
        size: Vec2,
    },
    /// Text to be rendered.
    Text {
        /// Baseline origin of the first glyph, in screen pixels.
        pos: Vec2,
        /// Font selection and shaping are left to the host.
        text: String,
        /// Text color.
        color: Vec4,
        /// Font size in pixels.
        size: f32,
    },
}

/// A list of draw commands representing the current frame.
pub type RenderList = Vec<DrawCommand>;
