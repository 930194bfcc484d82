//! Blocks domain: debug mouse picking that strikes blocks directly.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::blocks::{BlockStruck, Interactable, StrikeCause};
use crate::movement::GameLayer;

pub(crate) fn click_to_strike(
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    spatial_query: SpatialQuery,
    interactables: Query<&Interactable>,
    mut strikes: MessageWriter<BlockStruck>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };
    let Ok(point) = camera.viewport_to_world_2d(camera_transform, cursor) else {
        return;
    };

    let filter = SpatialQueryFilter::from_mask(GameLayer::Block);
    let Some(block) = spatial_query.point_intersections(point, &filter).first().copied() else {
        return;
    };

    let kind = interactables.get(block).copied().unwrap_or_default();
    info!("[DEBUG] Clicked block {:?} ({:?})", block, kind);
    strikes.write(BlockStruck {
        block,
        kind,
        cause: StrikeCause::Click,
    });
}
