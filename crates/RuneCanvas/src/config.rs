//! # Configuration
//!
//! This module defines the configuration struct for the Canvas. Every section
//! falls back to its defaults, so a config file only needs the fields it changes.

use bitflags::bitflags;
use glam::{Vec2, Vec4};
use serde::{Deserialize, Serialize};

use crate::error::CanvasError;
use crate::math::hsba;

bitflags! {
    /// Which parts of the rune scene the painter emits.
    ///
    /// Stored in config files as the raw bit value (`7` = the icon grid).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct RenderLayers: u8 {
        /// The 64x64 icon at the head of each row.
        const PATH_ICONS = 1 << 0;
        /// The path name next to its icon.
        const PATH_NAMES = 1 << 1;
        /// The small icon grid, one row per slot.
        const RUNE_ICONS = 1 << 2;
        /// Plain text listing of each path's keystones.
        const TEXT_LISTING = 1 << 3;
    }
}

impl Serialize for RenderLayers {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.bits())
    }
}

impl<'de> Deserialize<'de> for RenderLayers {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(Self::from_bits_truncate(bits))
    }
}

impl Default for RenderLayers {
    fn default() -> Self {
        Self::PATH_ICONS | Self::PATH_NAMES | Self::RUNE_ICONS
    }
}

/// Configuration parameters for the Canvas.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Positions and sizes of the rune grid.
    pub layout: LayoutConfig,
    /// Visual styling configuration.
    pub style: CanvasStyle,
    /// Debug overlay settings.
    pub overlay: OverlayConfig,
    /// Layers drawn once the scene is ready.
    pub layers: RenderLayers,
    /// Draw the text listing while images are still loading.
    pub text_fallback: bool,
    /// Stop the frame loop after this many frames. `None` runs forever.
    pub frame_limit: Option<u64>,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            style: CanvasStyle::default(),
            overlay: OverlayConfig::default(),
            layers: RenderLayers::default(),
            text_fallback: true,
            frame_limit: Some(3000),
        }
    }
}

impl CanvasConfig {
    /// Parses a (possibly partial) JSON config.
    pub fn from_json(json: &str) -> Result<Self, CanvasError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Grid geometry. Offsets are relative to the top of the current row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Screen position of the grid's top-left corner.
    pub grid_origin: Vec2,
    /// Vertical distance between path rows.
    pub row_height: f32,
    pub path_icon_offset: Vec2,
    pub path_icon_size: Vec2,
    /// Baseline of the path name.
    pub path_name_offset: Vec2,
    /// Top-left of the first rune cell (slot 0, option 0).
    pub rune_grid_offset: Vec2,
    /// Step between neighbouring rune cells (x per option, y per slot).
    pub rune_pitch: Vec2,
    pub rune_icon_size: Vec2,
    /// Origin of the text listing, in screen space.
    pub listing_origin: Vec2,
    /// Vertical distance between listing lines.
    pub listing_line_height: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            grid_origin: Vec2::new(50.0, 50.0),
            row_height: 80.0,
            path_icon_offset: Vec2::new(90.0, 0.0),
            path_icon_size: Vec2::new(64.0, 64.0),
            path_name_offset: Vec2::new(160.0, 60.0),
            rune_grid_offset: Vec2::new(10.0, 0.0),
            rune_pitch: Vec2::new(16.0, 16.0),
            rune_icon_size: Vec2::new(15.0, 15.0),
            listing_origin: Vec2::new(10.0, 0.0),
            listing_line_height: 20.0,
        }
    }
}

/// Visual styling of the rune scene.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasStyle {
    pub background_color: Vec4,
    pub text_color: Vec4,
    pub text_size: f32,
}

impl Default for CanvasStyle {
    fn default() -> Self {
        Self {
            background_color: hsba(234.0, 34.0, 24.0, 100.0),
            text_color: hsba(0.0, 0.0, 100.0, 100.0),
            text_size: 14.0,
        }
    }
}

/// Debug overlay geometry and colors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Number of lines.
    pub capacity: usize,
    pub left_margin: f32,
    /// Distance from the bottom edge to the baseline of line 0.
    pub bottom_offset: f32,
    /// Added to ascent + descent to get the line height.
    pub line_spacing: f32,
    /// Extra backing above the topmost line.
    pub top_padding: f32,
    pub background_color: Vec4,
    pub text_color: Vec4,
    pub text_size: f32,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            capacity: 5,
            left_margin: 10.0,
            bottom_offset: 10.0,
            line_spacing: 2.0,
            top_padding: 3.0,
            background_color: hsba(0.0, 0.0, 0.0, 10.0),
            text_color: hsba(0.0, 0.0, 100.0, 100.0),
            text_size: 14.0,
        }
    }
}
