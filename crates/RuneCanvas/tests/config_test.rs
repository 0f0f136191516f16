use glam::{Vec2, Vec4};
use rune_canvas::math::{Rect, hsba};
use rune_canvas::{CanvasConfig, CanvasError, RenderLayers};

fn approx(a: Vec4, b: Vec4) -> bool {
    (a - b).abs().max_element() < 1e-3
}

#[test]
fn test_defaults_match_grid_layout() {
    let config = CanvasConfig::default();

    assert_eq!(config.layout.grid_origin, Vec2::new(50.0, 50.0));
    assert_eq!(config.layout.row_height, 80.0);
    assert_eq!(config.layout.rune_icon_size, Vec2::new(15.0, 15.0));
    assert_eq!(config.overlay.capacity, 5);
    assert_eq!(config.frame_limit, Some(3000));
    assert_eq!(
        config.layers,
        RenderLayers::PATH_ICONS | RenderLayers::PATH_NAMES | RenderLayers::RUNE_ICONS
    );
}

#[test]
fn test_partial_json_keeps_defaults() {
    let json = r#"{
        "layout": { "row_height": 96.0, "grid_origin": [20.0, 30.0] },
        "layers": 8,
        "frame_limit": null
    }"#;

    let config = CanvasConfig::from_json(json).unwrap();

    assert_eq!(config.layout.row_height, 96.0);
    assert_eq!(config.layout.grid_origin, Vec2::new(20.0, 30.0));
    assert_eq!(config.layout.path_icon_size, Vec2::new(64.0, 64.0));
    assert_eq!(config.layers, RenderLayers::TEXT_LISTING);
    assert_eq!(config.frame_limit, None);
    assert_eq!(config.overlay.top_padding, 3.0);
}

#[test]
fn test_invalid_json() {
    assert!(matches!(
        CanvasConfig::from_json("{ \"layout\": 3 }"),
        Err(CanvasError::Parse(_))
    ));
}

#[test]
fn test_hsba() {
    assert!(approx(hsba(0.0, 100.0, 100.0, 100.0), Vec4::new(1.0, 0.0, 0.0, 1.0)));
    assert!(approx(hsba(120.0, 100.0, 100.0, 100.0), Vec4::new(0.0, 1.0, 0.0, 1.0)));
    assert!(approx(hsba(240.0, 100.0, 50.0, 100.0), Vec4::new(0.0, 0.0, 0.5, 1.0)));
    assert!(approx(hsba(360.0, 100.0, 100.0, 100.0), Vec4::new(1.0, 0.0, 0.0, 1.0)));
    assert!(approx(hsba(0.0, 0.0, 100.0, 10.0), Vec4::new(1.0, 1.0, 1.0, 0.1)));
    // The sketch background: dark desaturated blue
    let bg = hsba(234.0, 34.0, 24.0, 100.0);
    assert!(bg.z > bg.x && bg.z > bg.y);
    assert!((bg.z - 0.24).abs() < 1e-3);
}

#[test]
fn test_rect_from_corners() {
    let rect = Rect::from_corners(Vec2::new(10.0, 40.0), Vec2::new(0.0, 20.0));

    assert_eq!(rect, Rect::new(Vec2::new(0.0, 20.0), Vec2::new(10.0, 20.0)));
    assert_eq!(rect.size(), Vec2::new(10.0, 20.0));
    assert!(rect.contains(Vec2::new(5.0, 30.0)));
    assert!(!rect.contains(Vec2::new(11.0, 30.0)));
}
