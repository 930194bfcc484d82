//! Content domain: tests for RON parsing.

use super::{GameplayDefaults, parse_gameplay_defaults};
use crate::movement::GameLayer;

#[test]
fn test_partial_file_keeps_defaults_for_missing_fields() {
    let parsed = parse_gameplay_defaults(
        "(locomotion: (walk_speed: 6.5), level_timer: (start_seconds: 30.0))",
        "inline",
    )
    .unwrap();

    assert_eq!(parsed.locomotion.walk_speed, 6.5);
    assert_eq!(parsed.locomotion.run_speed, 8.0);
    assert_eq!(parsed.level_timer.start_seconds, 30.0);
    assert_eq!(parsed.brick_shatter, GameplayDefaults::default().brick_shatter);
}

#[test]
fn test_empty_struct_is_all_defaults() {
    let parsed = parse_gameplay_defaults("()", "inline").unwrap();
    assert_eq!(parsed, GameplayDefaults::default());
}

#[test]
fn test_probe_layers_parse_by_name() {
    let parsed = parse_gameplay_defaults(
        "(locomotion: (ceiling_probe: (hit_layers: [Block])))",
        "inline",
    )
    .unwrap();
    assert_eq!(parsed.locomotion.ceiling_probe.hit_layers, vec![GameLayer::Block]);
}

#[test]
fn test_parse_error_names_the_file() {
    let err = parse_gameplay_defaults("(locomotion: (walk_speed: \"fast\"))", "defaults.ron")
        .unwrap_err();
    assert_eq!(err.file, "defaults.ron");
    assert!(err.to_string().starts_with("Failed to load defaults.ron"));
}

#[test]
fn test_shipped_defaults_file_parses() {
    let contents = include_str!("../../assets/data/gameplay_defaults.ron");
    let parsed = parse_gameplay_defaults(contents, "gameplay_defaults.ron").unwrap();
    assert_eq!(parsed.locomotion, GameplayDefaults::default().locomotion);
    assert_eq!(parsed.flipbook.frames, 5);
}
