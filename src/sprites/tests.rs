//! Sprites module: tests for animation classification and flip-books.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use super::flipbook::tick_flipbooks;
use super::{
    AnimationState, Flipbook, FlipbookSettings, LocomotionAnimator, flip_for,
    shimmer_strip_pixels,
};
use crate::movement::{Facing, LocomotionHints};

fn hints(speed: f32, grounded: bool, vertical_velocity: f32) -> LocomotionHints {
    LocomotionHints {
        speed,
        grounded,
        vertical_velocity,
        jumped: false,
    }
}

#[test]
fn test_grounded_states_follow_speed() {
    assert_eq!(AnimationState::from_hints(&hints(0.0, true, -2.0), 5.0), AnimationState::Idle);
    assert_eq!(AnimationState::from_hints(&hints(3.0, true, -2.0), 5.0), AnimationState::Walk);
    assert_eq!(AnimationState::from_hints(&hints(5.0, true, -2.0), 5.0), AnimationState::Walk);
    assert_eq!(AnimationState::from_hints(&hints(7.5, true, -2.0), 5.0), AnimationState::Run);
}

#[test]
fn test_airborne_states_follow_vertical_velocity() {
    assert_eq!(AnimationState::from_hints(&hints(4.0, false, 6.0), 5.0), AnimationState::Jump);
    assert_eq!(AnimationState::from_hints(&hints(4.0, false, -6.0), 5.0), AnimationState::Fall);
}

#[test]
fn test_jump_pulse_wins_on_takeoff_tick() {
    let mut takeoff = hints(0.0, true, 17.0);
    takeoff.jumped = true;
    assert_eq!(AnimationState::from_hints(&takeoff, 5.0), AnimationState::Jump);
}

#[test]
fn test_animator_tracks_transitions() {
    let mut animator = LocomotionAnimator::default();
    assert!(!animator.set_state(AnimationState::Idle));
    animator.state_time = 1.5;

    assert!(animator.set_state(AnimationState::Walk));
    assert_eq!(animator.previous_state, AnimationState::Idle);
    assert_eq!(animator.state_time, 0.0);
}

#[test]
fn test_sprite_flips_only_when_facing_left() {
    assert!(flip_for(Facing::Left));
    assert!(!flip_for(Facing::Right));
}

#[test]
fn test_flipbook_steps_once_per_frame_time_and_wraps() {
    let mut flipbook = Flipbook::new(&FlipbookSettings::default());
    assert_eq!(flipbook.current_frame(), 0);
    assert!((flipbook.uv_offset_y() - 0.8).abs() < 1e-6);

    assert!(!flipbook.tick(0.05));
    assert!(flipbook.tick(0.06));
    assert_eq!(flipbook.current_frame(), 1);
    assert!((flipbook.uv_offset_y() - 0.6).abs() < 1e-6);

    // A long hitch still advances a single frame
    assert!(flipbook.tick(1.0));
    assert_eq!(flipbook.current_frame(), 2);

    flipbook.tick(0.1);
    flipbook.tick(0.1);
    assert_eq!(flipbook.current_frame(), 4);
    assert!(flipbook.uv_offset_y().abs() < 1e-6);
    flipbook.tick(0.1);
    assert_eq!(flipbook.current_frame(), 0);
}

#[test]
fn test_flipbook_with_zero_fps_holds_first_frame() {
    let mut flipbook = Flipbook::new(&FlipbookSettings {
        fps: 0.0,
        ..Default::default()
    });
    assert!(!flipbook.tick(100.0));
    assert_eq!(flipbook.current_frame(), 0);
}

#[test]
fn test_frame_rect_walks_down_the_strip() {
    let mut flipbook = Flipbook::new(&FlipbookSettings::default());
    assert_eq!(flipbook.strip_size(), UVec2::new(16, 80));
    assert_eq!(flipbook.frame_rect(), Rect::new(0.0, 0.0, 16.0, 16.0));

    flipbook.tick(0.1);
    assert_eq!(flipbook.frame_rect(), Rect::new(0.0, 16.0, 16.0, 32.0));

    for _ in 0..3 {
        flipbook.tick(0.1);
    }
    assert_eq!(flipbook.current_frame(), 4);
    assert_eq!(flipbook.frame_rect(), Rect::new(0.0, 64.0, 16.0, 80.0));
}

#[test]
fn test_shimmer_strip_frames_differ() {
    let pixels = shimmer_strip_pixels(5, 4, [200, 160, 40]);
    assert_eq!(pixels.len(), 4 * 4 * 5 * 4);

    // Center pixel (row 1, column 1) of each frame
    let frame_bytes = 4 * 4 * 4;
    let center = |frame: usize| pixels[frame * frame_bytes + (4 + 1) * 4];
    assert_eq!(center(0), 200);
    assert!(center(1) < center(0));
    assert!(center(2) < center(1));
    // Border is darker than the face
    assert!(pixels[0] < center(0));
    assert!(pixels.chunks(4).all(|p| p[3] == u8::MAX));
}

#[test]
fn test_flipbook_sprite_rect_advances_in_app() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(150)))
        .add_systems(Update, tick_flipbooks);

    let flipbook = Flipbook::new(&FlipbookSettings::default());
    let block = app
        .world_mut()
        .spawn((
            Sprite {
                rect: Some(flipbook.frame_rect()),
                ..default()
            },
            flipbook,
        ))
        .id();

    let mut seen = vec![app.world().get::<Sprite>(block).and_then(|s| s.rect)];
    for _ in 0..6 {
        app.update();
        let rect = app.world().get::<Sprite>(block).and_then(|s| s.rect);
        if !seen.contains(&rect) {
            seen.push(rect);
        }
    }

    assert!(seen.len() >= 4, "sprite rect only took {} values", seen.len());
    assert!(seen.iter().all(Option::is_some));
}
