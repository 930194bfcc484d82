//! Core domain: level flow systems and setup.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::content::GameplayDefaults;
use crate::core::camera::CameraFollow;
use crate::core::events::TimeUpEvent;
use crate::core::resources::LevelTimer;

pub(crate) fn setup_camera(mut commands: Commands, defaults: Res<GameplayDefaults>) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: defaults.camera.projection_scale,
            ..OrthographicProjection::default_2d()
        }),
        CameraFollow::new(&defaults.camera),
        Transform::from_translation(defaults.camera.offset_vec().extend(0.0)),
    ));
}

pub(crate) fn start_level_timer(mut commands: Commands, defaults: Res<GameplayDefaults>) {
    commands.insert_resource(LevelTimer::new(defaults.level_timer.start_seconds));
}

pub(crate) fn tick_level_timer(
    time: Res<Time>,
    mut timer: ResMut<LevelTimer>,
    mut time_up: MessageWriter<TimeUpEvent>,
) {
    if timer.tick(time.delta_secs()) {
        time_up.write(TimeUpEvent);
    }
}

pub(crate) fn announce_time_up(mut events: MessageReader<TimeUpEvent>) {
    for _ in events.read() {
        info!("Player has run out of time!");
    }
}
