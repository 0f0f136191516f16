use rune_canvas::CanvasError;
use rune_canvas::model::{ImageKey, ImageTable, RuneTree, SceneData};
use url::Url;

const SAMPLE: &str = include_str!("fixtures/runes_sample.json");

#[test]
fn test_parse_sample_array() {
    let runes = RuneTree::from_json(SAMPLE).expect("sample should parse");

    let keys: Vec<&str> = runes.paths().iter().map(|p| p.key.as_str()).collect();
    assert_eq!(
        keys,
        vec!["Domination", "Inspiration", "Precision", "Resolve", "Sorcery"]
    );

    for path in runes.paths() {
        let counts: Vec<usize> = path.slots.iter().map(|s| s.runes.len()).collect();
        assert_eq!(counts, vec![4, 3, 3, 3], "slot pattern of {}", path.key);
    }

    let precision = &runes.paths()[2];
    assert_eq!(precision.id, 8000);
    assert_eq!(precision.keystones().unwrap().runes[3].name, "Conqueror");
    assert_eq!(precision.option_count(), 13);
}

#[test]
fn test_parse_object_keeps_order() {
    // Minimal fields only; values are read in document order, not key order.
    let json = r#"{
        "z": { "key": "Sorcery", "name": "Sorcery", "icon": "s.png",
               "slots": [ { "runes": [ { "name": "Summon Aery", "icon": "a.png" } ] } ] },
        "a": { "key": "Precision", "name": "Precision", "icon": "p.png", "slots": [] }
    }"#;

    let runes = RuneTree::from_json(json).unwrap();

    assert_eq!(runes.len(), 2);
    assert_eq!(runes.paths()[0].key, "Sorcery");
    assert_eq!(runes.paths()[1].key, "Precision");
    assert!(runes.paths()[1].keystones().is_none());
    assert_eq!(runes.paths()[0].slots[0].runes[0].id, 0);
}

#[test]
fn test_parse_rejects_other_shapes() {
    match RuneTree::from_json("42") {
        Err(CanvasError::UnexpectedShape { found }) => assert_eq!(found, "a number"),
        other => panic!("Expected UnexpectedShape, got {:?}", other),
    }

    // A path without its required `icon` field
    let missing_icon = r#"[ { "key": "Resolve", "name": "Resolve" } ]"#;
    assert!(matches!(
        RuneTree::from_json(missing_icon),
        Err(CanvasError::Parse(_))
    ));
}

#[test]
fn test_slot_labels() {
    let runes = RuneTree::from_json(SAMPLE).unwrap();

    assert_eq!(
        runes.keystone_label(2),
        Some(" Press the Attack, Lethal Tempo, Fleet Footwork, Conqueror")
    );
    assert_eq!(
        runes.slot_label(3, 1),
        Some(" Font of Life, Shield Bash, Conditioning")
    );
    assert_eq!(runes.slot_label(3, 4), None);
    assert_eq!(runes.slot_label(9, 0), None);
}

#[test]
fn test_icon_refs_in_render_order() {
    let runes = RuneTree::from_json(SAMPLE).unwrap();
    let refs = runes.icon_refs();

    // 5 path icons + 5 * (4 + 3 + 3 + 3) rune icons
    assert_eq!(refs.len(), 70);
    assert_eq!(refs[0], (ImageKey::path(0), "perk-images/Styles/8100_Domination.png"));
    assert_eq!(refs[1].0, ImageKey::rune(0, 0, 0));
    assert_eq!(refs[14].0, ImageKey::path(1));

    assert_eq!(
        runes.icon(ImageKey::rune(2, 0, 0)),
        Some("perk-images/Styles/Precision/PressTheAttack/PressTheAttack.png")
    );
    assert_eq!(runes.icon(ImageKey::rune(2, 0, 7)), None);
}

#[test]
fn test_icon_urls_resolve_against_base() {
    let runes = RuneTree::from_json(SAMPLE).unwrap();
    let base = Url::parse("https://ddragon.leagueoflegends.com/cdn/img/").unwrap();

    let urls = runes.icon_urls(&base).unwrap();

    assert_eq!(urls.len(), 70);
    assert_eq!(
        urls[0].1.as_str(),
        "https://ddragon.leagueoflegends.com/cdn/img/perk-images/Styles/8100_Domination.png"
    );
}

#[test]
fn test_image_table_readiness() {
    let runes = RuneTree::from_json(SAMPLE).unwrap();
    let mut images: ImageTable<u32> = ImageTable::new();

    // Fill everything except the very last icon
    let refs = runes.icon_refs();
    let (last, rest) = refs.split_last().unwrap();
    for (i, (key, _)) in rest.iter().enumerate() {
        images.insert(*key, i as u32).unwrap();
    }

    match images.mark_ready(&runes) {
        Err(CanvasError::MissingImage { key, .. }) => assert_eq!(key, last.0),
        other => panic!("Expected MissingImage, got {:?}", other),
    }
    assert!(!images.is_ready(), "Partial table must not be ready");
    assert_eq!(images.missing(&runes).len(), 1);

    images.insert(last.0, 99).unwrap();
    images.mark_ready(&runes).unwrap();
    assert!(images.is_ready());
    assert_eq!(images.get(last.0), Some(&99));

    // Sealed after readiness
    assert!(matches!(
        images.insert(ImageKey::path(0), 7),
        Err(CanvasError::TableSealed(_))
    ));
    assert_eq!(images.get(ImageKey::path(0)), Some(&0));
}

#[test]
fn test_scene_starts_unready() {
    let runes = RuneTree::from_json(SAMPLE).unwrap();
    let scene: SceneData<()> = SceneData::new(runes);

    assert!(!scene.is_ready());
    assert!(scene.images.is_empty());
}
