//! Movement domain: swept moves and head probes against the avian2d world.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::blocks::Interactable;
use crate::movement::{
    GameLayer, LocomotionHost, MoveResult, ProbeHit, ProbeQuery, controller::CollisionFlags,
};

/// Gap kept between the body and whatever it is pushed against.
const SKIN: f32 = 0.01;

/// Most hits a head probe collects before picking the nearest solid one.
const PROBE_MAX_HITS: u32 = 8;

/// Layers that block character movement.
pub(crate) fn solid_mask() -> LayerMask {
    LayerMask::from([GameLayer::Ground, GameLayer::Wall, GameLayer::Block])
}

/// Axis-separated move-and-slide: horizontal leg first, then vertical.
/// Each leg is a shape cast of the character's own collider.
pub(crate) struct SweptMover<'a, 'w, 's> {
    spatial_query: &'a SpatialQuery<'w, 's>,
    classify: &'a dyn Fn(Entity) -> Interactable,
    /// True for trigger-only colliders, which the head probe skips.
    is_trigger: &'a dyn Fn(Entity) -> bool,
    entity: Entity,
    collider: &'a Collider,
    position: Vec2,
}

impl<'a, 'w, 's> SweptMover<'a, 'w, 's> {
    pub(crate) fn new(
        spatial_query: &'a SpatialQuery<'w, 's>,
        classify: &'a dyn Fn(Entity) -> Interactable,
        is_trigger: &'a dyn Fn(Entity) -> bool,
        entity: Entity,
        collider: &'a Collider,
        position: Vec2,
    ) -> Self {
        Self {
            spatial_query,
            classify,
            is_trigger,
            entity,
            collider,
            position,
        }
    }

    pub(crate) fn position(&self) -> Vec2 {
        self.position
    }

    /// Returns the distance actually travelled and whether something was hit.
    fn cast_leg(&self, delta: Vec2) -> (Vec2, bool) {
        let distance = delta.length();
        let Ok(direction) = Dir2::new(delta) else {
            return (Vec2::ZERO, false);
        };

        let mut config = ShapeCastConfig::from_max_distance(distance + SKIN);
        config.ignore_origin_penetration = true;
        let filter = SpatialQueryFilter::from_mask(solid_mask()).with_excluded_entities([self.entity]);

        match self.spatial_query.cast_shape(
            self.collider,
            self.position,
            0.0,
            direction,
            &config,
            &filter,
        ) {
            Some(hit) => {
                let travel = (hit.distance - SKIN).clamp(0.0, distance);
                (*direction * travel, true)
            }
            None => (delta, false),
        }
    }
}

impl LocomotionHost for SweptMover<'_, '_, '_> {
    fn sweep(&mut self, displacement: Vec2) -> MoveResult {
        let mut flags = CollisionFlags::default();

        if displacement.x != 0.0 {
            let (moved, blocked) = self.cast_leg(Vec2::new(displacement.x, 0.0));
            self.position += moved;
            flags.sides = blocked;
        }

        if displacement.y != 0.0 {
            let (moved, blocked) = self.cast_leg(Vec2::new(0.0, displacement.y));
            self.position += moved;
            if blocked {
                if displacement.y > 0.0 {
                    flags.above = true;
                } else {
                    flags.below = true;
                }
            }
        }

        MoveResult {
            flags,
            grounded: flags.below,
        }
    }

    fn probe_ceiling(&mut self, query: &ProbeQuery) -> Option<ProbeHit> {
        let probe = Collider::circle(query.radius);
        let config = ShapeCastConfig::from_max_distance(query.distance);
        let filter = SpatialQueryFilter::from_mask(query.mask).with_excluded_entities([self.entity]);

        let hits = self.spatial_query.shape_hits(
            &probe,
            self.position + query.origin_offset,
            0.0,
            Dir2::Y,
            PROBE_MAX_HITS,
            &config,
            &filter,
        );
        let entity = nearest_solid_hit(
            hits.iter().map(|hit| (hit.entity, hit.distance)),
            self.is_trigger,
        )?;

        Some(ProbeHit {
            entity,
            kind: (self.classify)(entity),
        })
    }
}

/// Closest hit that is not a trigger volume, whatever layer it sits on.
pub(crate) fn nearest_solid_hit(
    hits: impl IntoIterator<Item = (Entity, f32)>,
    is_trigger: &dyn Fn(Entity) -> bool,
) -> Option<Entity> {
    hits.into_iter()
        .filter(|(entity, _)| !is_trigger(*entity))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(entity, _)| entity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_cast_skips_triggers_and_picks_nearest() {
        let mut world = World::new();
        let trigger = world.spawn_empty().id();
        let far_block = world.spawn_empty().id();
        let near_block = world.spawn_empty().id();
        let is_trigger = |entity: Entity| entity == trigger;

        let hits = [(trigger, 0.01), (far_block, 0.2), (near_block, 0.1)];
        assert_eq!(nearest_solid_hit(hits, &is_trigger), Some(near_block));
        assert_eq!(nearest_solid_hit([(trigger, 0.01)], &is_trigger), None);
        assert_eq!(nearest_solid_hit([], &is_trigger), None);
    }
}
