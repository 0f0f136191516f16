//! # RuneCanvas
//!
//! `rune_canvas` is a headless layout engine for League of Legends rune paths.
//! It turns the `runesReforged` data into rows of icons and labels, while
//! delegating the actual drawing to the host application.
//!
//! ## Core Architecture
//! - **Model (`src/model.rs`)**: The rune tree plus the image table, built once by the load phase.
//! - **Painter (`src/painter.rs`)**: Lays the scene out as a list of `DrawCommand`s.
//! - **Overlay (`src/overlay.rs`)**: Bottom-left debug lines, composited last.
//! - **Render (`src/render.rs`)**: The command set the host must understand.

pub mod config;
pub mod error;
pub mod input;
pub mod interaction;
pub mod math;
pub mod model;
pub mod overlay;
pub mod painter;
pub mod render;
pub mod view;

use glam::Vec2;
use input::InputState;
use model::SceneData;
use overlay::{DebugOverlay, FontMetrics};
use painter::Painter;
use render::{DrawCommand, RenderList};
use view::{Transform, View};

// Re-exports for convenience
pub use config::{CanvasConfig, RenderLayers};
pub use error::CanvasError;
pub use interaction::{LogicEvent, Playback, PlaybackMode};

/// Overlay line showing the measured frame rate.
pub const FPS_LINE: usize = 1;
/// Overlay line showing the frame counter.
pub const FRAME_COUNT_LINE: usize = 2;

/// The main entry point for the library.
///
/// Holds the configuration, the viewport and the frame-loop state. Create it once
/// and call `update` every frame.
pub struct RuneCanvas {
    /// Configuration settings.
    pub config: CanvasConfig,
    /// Grid translation and viewport size.
    pub view: View,
    /// Running / paused / finished.
    pub playback: Playback,
}

impl RuneCanvas {
    /// Creates a new Canvas instance with the given configuration.
    pub fn new(config: CanvasConfig) -> Self {
        let transform = Transform {
            translate: config.layout.grid_origin,
        };
        let playback = Playback::new(config.frame_limit);
        Self {
            config,
            view: View::new(transform, InputState::default().screen_size),
            playback,
        }
    }

    /// Updates the viewport size.
    pub fn update_viewport_size(&mut self, size: Vec2) {
        self.view.viewport_size = size;
    }

    /// The core update loop.
    ///
    /// Applies input, then, if the loop is running, returns the full frame:
    /// a `Clear`, the rune scene, and the debug overlay on top. While paused
    /// or finished the list is empty and the host should keep showing the
    /// previous frame.
    pub fn update<H>(
        &mut self,
        input: &InputState,
        scene: &SceneData<H>,
        overlay: &mut DebugOverlay,
        metrics: &FontMetrics,
    ) -> (RenderList, Vec<LogicEvent>) {
        let mut logic_events = Vec::new();

        // 1. Handle input (pause toggle)
        interaction::handle_interactions(&mut self.playback, input, &mut logic_events);
        if !self.playback.is_running() {
            return (Vec::new(), logic_events);
        }

        self.view.viewport_size = input.screen_size;
        self.view.transform.translate = self.config.layout.grid_origin;
        self.playback.advance(&mut logic_events);

        // 2. Scene
        let mut draw_list = vec![DrawCommand::Clear {
            color: self.config.style.background_color,
        }];

        if scene.is_ready() {
            draw_list.extend(Painter::draw_runes(&self.view, &self.config, scene));
        } else if self.config.text_fallback {
            Painter::draw_text_listing(&self.config, &scene.runes, &mut draw_list);
        }

        // 3. Overlay last, so it stays on top. Stats lines need room for them.
        if FRAME_COUNT_LINE < overlay.capacity() {
            overlay.set_text(format!("frameCount: {}", self.playback.frame_count), FRAME_COUNT_LINE);
        }
        if FPS_LINE < overlay.capacity() {
            overlay.set_text(format!("fps: {:.0}", input.fps()), FPS_LINE);
        }
        draw_list.extend(overlay.render(self.view.viewport_size, metrics, &self.config.overlay));

        (draw_list, logic_events)
    }
}
