use glam::Vec2;
use rune_canvas::input::{InputState, Key};
use rune_canvas::model::{RuneTree, SceneData};
use rune_canvas::overlay::{DebugOverlay, FontMetrics};
use rune_canvas::render::DrawCommand;
use rune_canvas::{CanvasConfig, RuneCanvas};

const SAMPLE: &str = include_str!("../tests/fixtures/runes_sample.json");

/// Stand-in for a decoded texture.
#[derive(Clone, Debug)]
struct FakeTexture {
    source: String,
}

fn main() -> Result<(), rune_canvas::CanvasError> {
    tracing_subscriber::fmt::init();
    println!("=== RuneCanvas Headless Demo ===");

    // 1. Load phase: parse the tree, "decode" every icon, then mark ready
    let runes = RuneTree::from_json(SAMPLE)?;
    let mut scene = SceneData::new(runes);
    let refs: Vec<_> = scene
        .runes
        .icon_refs()
        .into_iter()
        .map(|(key, icon)| (key, icon.to_string()))
        .collect();
    for (key, icon) in refs {
        scene.images.insert(key, FakeTexture { source: icon })?;
    }
    scene.images.mark_ready(&scene.runes)?;

    // 2. Initialize Canvas
    let mut canvas = RuneCanvas::new(CanvasConfig::default());
    canvas.update_viewport_size(Vec2::new(640.0, 520.0));
    let mut overlay = DebugOverlay::from_config(&canvas.config.overlay);
    let metrics = FontMetrics::default();

    let input = InputState {
        screen_size: Vec2::new(640.0, 520.0),
        frame_time: 1.0 / 60.0,
        ..Default::default()
    };

    // 3. One frame, printed the way a host would walk it
    let (draw_list, _) = canvas.update(&input, &scene, &mut overlay, &metrics);
    println!("Frame 1: {} commands", draw_list.len());
    for cmd in draw_list.iter().take(8) {
        match cmd {
            DrawCommand::Image { image, pos, size } => {
                let texture = scene.images.get(*image).map(|t| t.source.as_str());
                println!("  image {image} at {pos} size {size} <- {texture:?}");
            }
            DrawCommand::Text { pos, text, .. } => println!("  text {text:?} at {pos}"),
            DrawCommand::Rect { pos, size, .. } => println!("  rect at {pos} size {size}"),
            DrawCommand::Clear { color } => println!("  clear {color}"),
        }
    }

    // 4. Pause: the next update draws nothing
    let (draw_list, events) =
        canvas.update(&input.clone().with_key(Key::TogglePause), &scene, &mut overlay, &metrics);
    println!("After pause: {} commands, events {:?}", draw_list.len(), events);

    println!("Overlay lines: {:?}", overlay.lines());
    Ok(())
}
