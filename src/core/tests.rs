//! Core domain: tests for the level timer.

use super::LevelTimer;

#[test]
fn test_level_timer_counts_down_and_fires_once() {
    let mut timer = LevelTimer::new(1.0);
    assert!(!timer.tick(0.4));
    assert_eq!(timer.whole_seconds(), 0);
    assert!(!timer.is_expired());

    assert!(timer.tick(0.7));
    assert!(timer.is_expired());
    assert_eq!(timer.remaining(), 0.0);

    assert!(!timer.tick(0.1));
}

#[test]
fn test_whole_seconds_truncates() {
    let mut timer = LevelTimer::new(100.0);
    timer.tick(0.5);
    assert_eq!(timer.whole_seconds(), 99);
}

#[test]
fn test_zero_length_timer_starts_expired() {
    let mut timer = LevelTimer::new(0.0);
    assert!(timer.is_expired());
    assert!(!timer.tick(0.1));
}
