//! Movement domain: drives each controller once per frame.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::blocks::{BlockStruck, Interactable, StrikeCause};
use crate::movement::systems::collisions::SweptMover;
use crate::movement::{LocomotionController, LocomotionHints, MovementInput, Player};

pub(crate) fn drive_locomotion(
    time: Res<Time>,
    input: Res<MovementInput>,
    spatial_query: SpatialQuery,
    interactables: Query<&Interactable>,
    sensors: Query<(), With<Sensor>>,
    mut query: Query<
        (
            Entity,
            &mut LocomotionController,
            &Collider,
            &mut Transform,
            &mut LocomotionHints,
        ),
        With<Player>,
    >,
    mut strikes: MessageWriter<BlockStruck>,
) {
    let dt = time.delta_secs();
    let classify =
        |entity: Entity| interactables.get(entity).copied().unwrap_or(Interactable::Plain);
    let is_trigger = |entity: Entity| sensors.contains(entity);

    for (entity, mut controller, collider, mut transform, mut hints) in &mut query {
        let mut mover = SweptMover::new(
            &spatial_query,
            &classify,
            &is_trigger,
            entity,
            collider,
            transform.translation.truncate(),
        );

        let grounded = controller.state().grounded;
        let outcome = controller.advance(&input, grounded, dt, &mut mover);

        transform.translation = mover.position().extend(transform.translation.z);
        *hints = outcome.hints;

        if let Some(struck) = outcome.ceiling_struck {
            debug!("Head hit {:?} ({:?})", struck.hit.entity, struck.hit.kind);
            strikes.write(BlockStruck {
                block: struck.hit.entity,
                kind: struck.hit.kind,
                cause: StrikeCause::Ceiling { striker: entity },
            });
        }
    }
}
