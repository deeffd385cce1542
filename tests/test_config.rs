use std::io::Write;

use invaders::{GameConfig, GameError};

#[test]
fn empty_document_yields_defaults() {
    let c = GameConfig::from_json_str("{}").unwrap();
    assert_eq!(c, GameConfig::default());
}

#[test]
fn overrides_merge_with_defaults() {
    let c = GameConfig::from_json_str(r#"{ "ship_lives": 5, "alien_velocity": 2 }"#).unwrap();
    assert_eq!(c.ship_lives, 5);
    assert_eq!(c.alien_velocity, 2);
    assert_eq!(c.ship_bullet_capacity, 5);
    assert_eq!(c.window_width, 1200);
}

#[test]
fn unknown_fields_are_rejected() {
    let err = GameConfig::from_json_str(r#"{ "shield_count": 4 }"#).unwrap_err();
    assert!(matches!(err, GameError::ConfigParse(_)));
}

#[test]
fn fire_chance_must_be_a_probability() {
    let err = GameConfig::from_json_str(r#"{ "alien_fire_chance": 1.5 }"#).unwrap_err();
    assert!(matches!(err, GameError::InvalidConfig(_)));
}

#[test]
fn zero_capacity_is_rejected() {
    let err = GameConfig::from_json_str(r#"{ "ship_bullet_capacity": 0 }"#).unwrap_err();
    assert!(matches!(err, GameError::InvalidConfig(_)));
}

#[test]
fn grid_reaching_breach_line_is_rejected() {
    // 100 + 70*7 + 64 = 654 > 600
    let err = GameConfig::from_json_str(r#"{ "alien_rows": 8 }"#).unwrap_err();
    assert!(matches!(err, GameError::InvalidConfig(msg) if msg.contains("breach line")));
}

#[test]
fn grid_wider_than_window_is_rejected() {
    let err = GameConfig::from_json_str(r#"{ "alien_cols": 20 }"#).unwrap_err();
    assert!(matches!(err, GameError::InvalidConfig(_)));
}

#[test]
fn load_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "fps": 30, "kill_score": 250 }}"#).unwrap();

    let c = GameConfig::load(Some(file.path())).unwrap();

    assert_eq!(c.fps, 30);
    assert_eq!(c.kill_score, 250);
}

#[test]
fn load_without_path_is_default() {
    assert_eq!(GameConfig::load(None).unwrap(), GameConfig::default());
}

#[test]
fn missing_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.json");

    let err = GameConfig::load(Some(path.as_path())).unwrap_err();

    match err {
        GameError::ConfigRead { path: p, .. } => assert_eq!(p, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn oversized_grid_is_rejected_not_overflowed() {
    let err = GameConfig::from_json_str(r#"{ "alien_rows": 40000000 }"#).unwrap_err();
    assert!(matches!(err, GameError::InvalidConfig(_)));

    let err = GameConfig::from_json_str(r#"{ "alien_cols": 18446744073709551615 }"#).unwrap_err();
    assert!(matches!(err, GameError::InvalidConfig(_)));
}

#[test]
fn breach_margin_must_lie_inside_window() {
    let err = GameConfig::from_json_str(r#"{ "breach_margin": -2147483648 }"#).unwrap_err();
    assert!(matches!(err, GameError::InvalidConfig(msg) if msg.contains("breach_margin")));

    let err = GameConfig::from_json_str(r#"{ "breach_margin": 701 }"#).unwrap_err();
    assert!(matches!(err, GameError::InvalidConfig(_)));
}

#[test]
fn kill_score_is_bounded() {
    let err = GameConfig::from_json_str(r#"{ "kill_score": 4294967295 }"#).unwrap_err();
    assert!(matches!(err, GameError::InvalidConfig(msg) if msg.contains("kill_score")));

    let c = GameConfig::from_json_str(r#"{ "kill_score": 1000000 }"#).unwrap();
    assert_eq!(c.kill_score, 1_000_000);
}

#[test]
fn extreme_layout_values_are_rejected() {
    for json in [
        r#"{ "alien_origin_y": 2147483647 }"#,
        r#"{ "alien_pitch": 2147483647 }"#,
        r#"{ "alien_velocity": 2147483647 }"#,
        r#"{ "font_size": 2147483647 }"#,
        r#"{ "alien_advance_increment": -5 }"#,
    ] {
        let err = GameConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)), "{json}");
    }
}
