//! Core domain: level flow, countdown timer and camera.

mod camera;
mod events;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use camera::{CameraFollow, CameraSettings, smooth_damp};
pub use events::TimeUpEvent;
pub use resources::{LevelTimer, LevelTimerSettings, RunConfig};

use bevy::prelude::*;

use crate::core::camera::follow_player;
use crate::core::systems::{announce_time_up, setup_camera, start_level_timer, tick_level_timer};
use crate::movement::LocomotionSet;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RunConfig>()
            .init_resource::<LevelTimer>()
            .add_message::<TimeUpEvent>()
            .add_systems(Startup, (setup_camera, start_level_timer))
            .add_systems(Update, (tick_level_timer, announce_time_up).chain())
            .add_systems(Update, follow_player.after(LocomotionSet));
    }
}
