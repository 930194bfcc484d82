//! Movement domain: locomotion controller, input sampling and the swept
//! move resolver.

mod bootstrap;
mod components;
pub mod controller;
mod resources;
mod systems;


pub use bootstrap::PLAYER_SPAWN;
pub use components::{
    ControllerShape, Facing, GameLayer, LocomotionHints, LocomotionState, Player,
};
pub use controller::{
    CeilingStruck, CollisionFlags, JumpKinematics, LocomotionController, LocomotionHost,
    MoveResult, ProbeHit, ProbeQuery, TickOutcome, move_towards,
};
pub use resources::{CeilingProbeTuning, LocomotionTuning, MovementInput};

use bevy::prelude::*;

use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{drive_locomotion, read_input};

/// Ordering label for the locomotion tick so collaborators can run after it.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocomotionSet;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementInput>()
            .add_systems(Startup, spawn_player)
            .add_systems(
                Update,
                (read_input, drive_locomotion)
                    .chain()
                    .in_set(LocomotionSet),
            );
    }
}
