mod loader;
mod settings;

use macroquad::prelude as mq;
use rune_canvas::input::{InputState, Key};
use rune_canvas::model::SceneData;
use rune_canvas::overlay::{DebugOverlay, FontMetrics};
use rune_canvas::render::{DrawCommand, RenderList};
use rune_canvas::{LogicEvent, RuneCanvas};
use settings::Settings;

const RUNNING_HINT: &str = "numpad 1 → freeze sketch";
const STOPPED_HINT: &str = "sketch stopped";

fn window_conf() -> mq::Conf {
    mq::Conf {
        window_title: "Rune Paths".to_owned(),
        window_width: 640,
        window_height: 520,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt::init();

    // 1. Settings and config
    let settings = match Settings::from_env() {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = ?e, "Invalid settings");
            return;
        }
    };
    let config = match settings.canvas_config() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = ?e, "Invalid canvas config");
            return;
        }
    };

    let font = match mq::load_ttf_font(&settings.font_path).await {
        Ok(font) => Some(font),
        Err(e) => {
            tracing::warn!(path = %settings.font_path, error = ?e, "Font not found, using default");
            None
        }
    };
    let metrics = measure_font(font.as_ref(), config.overlay.text_size);

    // 2. Load phase (blocking, once)
    tracing::info!("Loading rune data...");
    let scene = match loader::load_scene(&settings) {
        Ok(scene) => scene,
        Err(e) => {
            tracing::error!(error = ?e, "Failed to load rune scene");
            return;
        }
    };

    // 3. Initialize Canvas
    let mut overlay = DebugOverlay::from_config(&config.overlay);
    let mut canvas = RuneCanvas::new(config);
    let mut last_frame = RenderList::new();
    let mut hint = RUNNING_HINT;

    loop {
        let screen_size = glam::Vec2::new(mq::screen_width(), mq::screen_height());
        canvas.update_viewport_size(screen_size);

        // 4. Input
        let mut pressed_keys = Vec::new();
        if mq::is_key_pressed(mq::KeyCode::Kp1) {
            pressed_keys.push(Key::TogglePause);
        }
        let input = InputState {
            pressed_keys,
            screen_size,
            frame_time: mq::get_frame_time(),
        };

        // 5. Update
        let (draw_list, events) = canvas.update(&input, &scene, &mut overlay, &metrics);
        for event in events {
            tracing::info!(?event, "Logic event");
            hint = match event {
                LogicEvent::Paused | LogicEvent::FrameLimitReached { .. } => STOPPED_HINT,
                LogicEvent::Resumed => RUNNING_HINT,
            };
        }
        // Paused frames come back empty; keep showing the last one
        if !draw_list.is_empty() {
            last_frame = draw_list;
        }

        // 6. Render
        mq::clear_background(mq::BLACK);
        render(&last_frame, &scene, font.as_ref());
        mq::draw_text_ex(
            hint,
            screen_size.x - 220.0,
            20.0,
            mq::TextParams {
                font: font.as_ref(),
                font_size: 14,
                color: mq::LIGHTGRAY,
                ..Default::default()
            },
        );

        mq::next_frame().await
    }
}

fn render(draw_list: &[DrawCommand], scene: &SceneData<mq::Texture2D>, font: Option<&mq::Font>) {
    for cmd in draw_list {
        match cmd {
            DrawCommand::Clear { color } => mq::clear_background(to_color(*color)),
            DrawCommand::Rect { pos, size, color } => {
                mq::draw_rectangle(pos.x, pos.y, size.x, size.y, to_color(*color));
            }
            DrawCommand::Image { image, pos, size } => {
                let Some(texture) = scene.images.get(*image) else {
                    let icon = scene.runes.icon(*image).unwrap_or("<unknown>");
                    tracing::warn!(key = %image, icon, "No texture for image command");
                    continue;
                };
                mq::draw_texture_ex(
                    texture,
                    pos.x,
                    pos.y,
                    mq::WHITE,
                    mq::DrawTextureParams {
                        dest_size: Some(mq::vec2(size.x, size.y)),
                        ..Default::default()
                    },
                );
            }
            DrawCommand::Text {
                pos,
                text,
                color,
                size,
            } => {
                if text.is_empty() {
                    continue;
                }
                mq::draw_text_ex(
                    text,
                    pos.x,
                    pos.y,
                    mq::TextParams {
                        font,
                        font_size: size.round() as u16,
                        color: to_color(*color),
                        ..Default::default()
                    },
                );
            }
        }
    }
}

fn measure_font(font: Option<&mq::Font>, size: f32) -> FontMetrics {
    let dims = mq::measure_text("Agjy|", font, size.round() as u16, 1.0);
    FontMetrics {
        ascent: dims.offset_y,
        descent: (dims.height - dims.offset_y).max(0.0),
    }
}

fn to_color(c: glam::Vec4) -> mq::Color {
    mq::Color::new(c.x, c.y, c.z, c.w)
}
