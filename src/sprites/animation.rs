//! Locomotion-driven animation state.
//!
//! Reads the hints the controller publishes each tick and picks a state
//! for the presentation layer. Nothing here feeds back into movement.

use bevy::prelude::*;

use crate::movement::{Facing, LocomotionController, LocomotionHints};

/// Below this speed a grounded character counts as standing still.
const IDLE_SPEED: f32 = 0.1;

/// Animation states for the player character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Walk,
    Run,
    Jump,
    Fall,
}

impl AnimationState {
    /// Classify one tick of hints. `walk_speed` separates walking from running.
    pub fn from_hints(hints: &LocomotionHints, walk_speed: f32) -> Self {
        if hints.jumped || (!hints.grounded && hints.vertical_velocity > 0.0) {
            return AnimationState::Jump;
        }
        if !hints.grounded {
            return AnimationState::Fall;
        }
        if hints.speed < IDLE_SPEED {
            AnimationState::Idle
        } else if hints.speed > walk_speed + IDLE_SPEED {
            AnimationState::Run
        } else {
            AnimationState::Walk
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AnimationState::Idle => "idle",
            AnimationState::Walk => "walk",
            AnimationState::Run => "run",
            AnimationState::Jump => "jump",
            AnimationState::Fall => "fall",
        }
    }
}

/// Animation bookkeeping for a character driven by a `LocomotionController`.
#[derive(Component, Debug, Default)]
pub struct LocomotionAnimator {
    pub state: AnimationState,
    pub previous_state: AnimationState,
    /// Seconds spent in the current state.
    pub state_time: f32,
}

impl LocomotionAnimator {
    /// Returns true when the state changed.
    pub fn set_state(&mut self, state: AnimationState) -> bool {
        if self.state == state {
            return false;
        }
        self.previous_state = self.state;
        self.state = state;
        self.state_time = 0.0;
        true
    }
}

/// Sprites face right by default.
pub fn flip_for(facing: Facing) -> bool {
    facing.sign() < 0.0
}

pub(crate) fn animate_locomotion(
    time: Res<Time>,
    mut query: Query<(
        Entity,
        &LocomotionHints,
        &LocomotionController,
        &mut LocomotionAnimator,
        Option<&mut Sprite>,
    )>,
) {
    let dt = time.delta_secs();

    for (entity, hints, controller, mut animator, sprite) in &mut query {
        let next = AnimationState::from_hints(hints, controller.tuning().walk_speed);
        if animator.set_state(next) {
            debug!(
                "{:?} animation {} -> {}",
                entity,
                animator.previous_state.name(),
                next.name()
            );
        } else {
            animator.state_time += dt;
        }

        if let Some(mut sprite) = sprite {
            let flip = flip_for(controller.state().facing);
            if sprite.flip_x != flip {
                sprite.flip_x = flip;
            }
        }
    }
}
