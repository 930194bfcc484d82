//! Movement domain: player bootstrap from loaded tuning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::GameplayDefaults;
use crate::movement::{
    ControllerShape, GameLayer, LocomotionController, LocomotionHints, Player,
};
use crate::sprites::LocomotionAnimator;

pub const PLAYER_SPAWN: Vec3 = Vec3::new(-6.0, 1.0, 1.0);

pub(crate) fn spawn_player(
    mut commands: Commands,
    defaults: Res<GameplayDefaults>,
    existing_player: Query<Entity, With<Player>>,
) {
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let shape = ControllerShape::default();
    let controller = LocomotionController::new(defaults.locomotion.clone(), shape);
    let kinematics = controller.kinematics();

    info!(
        "Spawning player: walk={}, run={}, max_speed={}, jump_velocity={:.2}, gravity={:.2}",
        controller.tuning().walk_speed,
        controller.tuning().run_speed,
        controller.tuning().max_speed(),
        kinematics.jump_velocity,
        kinematics.gravity
    );

    commands.spawn((
        // Identity & Movement
        (
            Player,
            controller,
            LocomotionHints::default(),
            LocomotionAnimator::default(),
        ),
        // Rendering
        Sprite {
            color: Color::srgb(0.85, 0.2, 0.2),
            custom_size: Some(Vec2::new(shape.radius * 2.0, shape.height)),
            ..default()
        },
        Transform::from_translation(PLAYER_SPAWN),
        // Physics
        (
            RigidBody::Kinematic,
            shape.collider(),
            CollisionLayers::new(
                GameLayer::Player,
                [
                    GameLayer::Ground,
                    GameLayer::Wall,
                    GameLayer::Block,
                    GameLayer::Sensor,
                ],
            ),
        ),
    ));
}
