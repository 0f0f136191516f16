//! # Debug Overlay
//!
//! A fixed number of text lines pinned to the bottom-left corner of the viewport,
//! drawn over a translucent backing. Line 0 sits at the bottom and higher
//! indices stack upwards.
//!
//! Render it after everything else so nothing covers it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::OverlayConfig;
use crate::math::Rect;
use crate::render::{DrawCommand, RenderList};

/// Vertical extent of the active font, as measured by the host.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FontMetrics {
    /// Distance from the baseline to the top of the tallest glyph.
    pub ascent: f32,
    /// Distance from the baseline to the bottom of the lowest glyph.
    pub descent: f32,
}

impl FontMetrics {
    /// Line height for the overlay: ascent + descent + `spacing`.
    pub fn line_height(&self, spacing: f32) -> f32 {
        self.ascent + self.descent + spacing
    }
}

impl Default for FontMetrics {
    fn default() -> Self {
        // Close to a 14px monospace face.
        Self {
            ascent: 11.0,
            descent: 3.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DebugOverlay {
    lines: Vec<String>,
}

impl DebugOverlay {
    /// Creates an overlay with `capacity` empty lines (at least one).
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: vec![String::new(); capacity.max(1)],
        }
    }

    pub fn from_config(config: &OverlayConfig) -> Self {
        Self::new(config.capacity)
    }

    pub fn capacity(&self) -> usize {
        self.lines.len()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Replaces line `index`.
    ///
    /// An index past the end does not fail: line 0 is overwritten with a
    /// message naming the bad index and the capacity, so the mistake shows up
    /// on screen.
    pub fn set_text(&mut self, content: impl Into<String>, index: usize) {
        let capacity = self.capacity();
        match self.lines.get_mut(index) {
            Some(line) => *line = content.into(),
            None => {
                tracing::warn!(index, capacity, "Debug overlay index out of range");
                self.lines[0] = format!("{index} ← index>={capacity} not supported");
            }
        }
    }

    /// Emits one backing `Rect` followed by one `Text` per line, empty lines
    /// included.
    pub fn render(&self, viewport: Vec2, metrics: &FontMetrics, config: &OverlayConfig) -> RenderList {
        let mut draw_list = Vec::with_capacity(self.lines.len() + 1);

        let floor = viewport.y - config.bottom_offset;
        let line_height = metrics.line_height(config.line_spacing);
        let top = floor - line_height * self.lines.len() as f32 - config.top_padding;

        let backing = Rect::from_corners(Vec2::new(0.0, viewport.y), Vec2::new(viewport.x, top));
        draw_list.push(DrawCommand::Rect {
            pos: backing.min,
            size: backing.size(),
            color: config.background_color,
        });

        for (index, line) in self.lines.iter().enumerate() {
            draw_list.push(DrawCommand::Text {
                pos: Vec2::new(config.left_margin, floor - line_height * index as f32),
                text: line.clone(),
                color: config.text_color,
                size: config.text_size,
            });
        }

        draw_list
    }
}
