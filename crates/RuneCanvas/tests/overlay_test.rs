use glam::Vec2;
use rune_canvas::config::OverlayConfig;
use rune_canvas::overlay::{DebugOverlay, FontMetrics};
use rune_canvas::render::DrawCommand;

fn metrics() -> FontMetrics {
    FontMetrics {
        ascent: 11.0,
        descent: 3.0,
    }
}

#[test]
fn test_set_text_in_range() {
    let mut overlay = DebugOverlay::new(5);

    overlay.set_text("fps: 60", 1);
    overlay.set_text("frameCount: 12", 2);

    assert_eq!(overlay.capacity(), 5);
    assert_eq!(overlay.line(1), Some("fps: 60"));
    assert_eq!(overlay.line(2), Some("frameCount: 12"));
    assert_eq!(overlay.line(0), Some(""));
}

#[test]
fn test_set_text_out_of_range_writes_diagnostic() {
    let mut overlay = DebugOverlay::new(5);
    overlay.set_text("keep me", 4);

    overlay.set_text("lost", 7);

    let diagnostic = overlay.line(0).unwrap();
    assert!(diagnostic.contains('7'), "{diagnostic}");
    assert!(diagnostic.contains('5'), "{diagnostic}");
    assert_eq!(overlay.line(4), Some("keep me"));
    assert!(overlay.lines().iter().all(|line| line != "lost"));

    // Index equal to the capacity is also out of range
    overlay.set_text("also lost", 5);
    assert_eq!(overlay.line(0), Some("5 ← index>=5 not supported"));
}

#[test]
fn test_zero_capacity_is_clamped() {
    let mut overlay = DebugOverlay::new(0);
    assert_eq!(overlay.capacity(), 1);

    overlay.set_text("hello", 0);
    assert_eq!(overlay.line(0), Some("hello"));
}

#[test]
fn test_render_emits_backing_and_every_line() {
    let config = OverlayConfig::default();
    let mut overlay = DebugOverlay::from_config(&config);
    overlay.set_text("only one", 3);

    let list = overlay.render(Vec2::new(600.0, 300.0), &metrics(), &config);

    assert_eq!(list.len(), 1 + 5);
    let rects = list
        .iter()
        .filter(|cmd| matches!(cmd, DrawCommand::Rect { .. }))
        .count();
    assert_eq!(rects, 1);
    assert!(matches!(list[0], DrawCommand::Rect { .. }));
}

#[test]
fn test_render_geometry() {
    let config = OverlayConfig::default();
    let mut overlay = DebugOverlay::new(5);
    overlay.set_text("bottom", 0);
    overlay.set_text("top", 4);

    let list = overlay.render(Vec2::new(600.0, 300.0), &metrics(), &config);

    // line height = 11 + 3 + 2 = 16, floor = 300 - 10 = 290
    // backing top = 290 - 16 * 5 - 3 = 207
    match &list[0] {
        DrawCommand::Rect { pos, size, color } => {
            assert_eq!(*pos, Vec2::new(0.0, 207.0));
            assert_eq!(*size, Vec2::new(600.0, 93.0));
            assert!(color.w < 1.0, "backing should be translucent");
        }
        other => panic!("Expected backing rect, got {:?}", other),
    }

    let lines: Vec<(Vec2, &str)> = list[1..]
        .iter()
        .filter_map(|cmd| match cmd {
            DrawCommand::Text { pos, text, .. } => Some((*pos, text.as_str())),
            _ => None,
        })
        .collect();

    assert_eq!(lines[0], (Vec2::new(10.0, 290.0), "bottom"));
    assert_eq!(lines[1], (Vec2::new(10.0, 274.0), ""));
    assert_eq!(lines[4], (Vec2::new(10.0, 226.0), "top"));
    assert!(lines.windows(2).all(|w| w[0].0.y > w[1].0.y));
}
