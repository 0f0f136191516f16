use glam::Vec2;

use crate::config::{CanvasConfig, RenderLayers};
use crate::model::{ImageKey, RuneTree, SceneData};
use crate::render::{DrawCommand, RenderList};
use crate::view::View;

/// High-level renderer for the rune scene.
///
/// The `Painter` converts the rune tree into concrete drawing commands
/// (`RenderList`) that the host application can render. Output order is fixed:
/// paths in collection order, and within a path its icon, its name, then the
/// rune grid slot by slot, option by option.
///
/// Rows are laid out in grid space (`row * row_height`) and translated to the
/// screen by the `View`.
pub struct Painter;

impl Painter {
    /// Generates the draw commands for every path in the scene.
    ///
    /// Returns an empty list while the scene's image table is not marked ready.
    /// That is not an error: call it again next frame.
    ///
    /// # Arguments
    /// * `view` - Grid translation and viewport size.
    /// * `config` - Layout geometry, style and enabled layers.
    /// * `scene` - The loaded rune tree and image table. Never mutated.
    pub fn draw_runes<H>(view: &View, config: &CanvasConfig, scene: &SceneData<H>) -> RenderList {
        let mut draw_list = Vec::new();

        if !scene.is_ready() {
            tracing::trace!("Image table not ready, skipping rune grid");
            return draw_list;
        }

        let layers = config.layers;
        if layers.contains(RenderLayers::TEXT_LISTING) {
            Self::draw_text_listing(config, &scene.runes, &mut draw_list);
        }

        let layout = &config.layout;
        let style = &config.style;

        for (p, path) in scene.runes.paths().iter().enumerate() {
            let row = Vec2::new(0.0, p as f32 * layout.row_height);

            if layers.contains(RenderLayers::PATH_ICONS) {
                draw_list.push(DrawCommand::Image {
                    image: ImageKey::path(p),
                    pos: view.grid_to_screen(row + layout.path_icon_offset),
                    size: layout.path_icon_size,
                });
            }

            if layers.contains(RenderLayers::PATH_NAMES) {
                draw_list.push(DrawCommand::Text {
                    pos: view.grid_to_screen(row + layout.path_name_offset),
                    text: path.name.clone(),
                    color: style.text_color,
                    size: style.text_size,
                });
            }

            if layers.contains(RenderLayers::RUNE_ICONS) {
                for (s, slot) in path.slots.iter().enumerate() {
                    for (o, _) in slot.runes.iter().enumerate() {
                        let cell = Vec2::new(o as f32, s as f32) * layout.rune_pitch;
                        draw_list.push(DrawCommand::Image {
                            image: ImageKey::rune(p, s, o),
                            pos: view.grid_to_screen(row + layout.rune_grid_offset + cell),
                            size: layout.rune_icon_size,
                        });
                    }
                }
            }
        }

        draw_list
    }

    /// One text line per path: its key followed by its keystone names.
    ///
    /// Needs no images, so it also serves as the stand-in while the scene is
    /// loading. Lines are placed in screen space, not translated by the view.
    pub fn draw_text_listing(config: &CanvasConfig, runes: &RuneTree, draw_list: &mut RenderList) {
        let layout = &config.layout;
        let style = &config.style;

        for (p, path) in runes.paths().iter().enumerate() {
            let keystones = runes.keystone_label(p).unwrap_or_default();
            let line = (p + 1) as f32;
            draw_list.push(DrawCommand::Text {
                pos: layout.listing_origin + Vec2::new(0.0, line * layout.listing_line_height),
                text: format!("{}:{}", path.key, keystones),
                color: style.text_color,
                size: style.text_size,
            });
        }
    }
}
