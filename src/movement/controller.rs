//! Movement domain: the per-tick locomotion simulation.
//!
//! `LocomotionController::advance` never touches the world directly. The
//! swept move and the head probe go through a [`LocomotionHost`], which the
//! game backs with avian2d shape casts (see `systems::collisions`) and tests
//! back with scripted fakes. Given the same inputs and `dt` sequence the
//! controller produces the same trajectory.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::blocks::Interactable;
use crate::movement::{
    ControllerShape, Facing, LocomotionHints, LocomotionState, LocomotionTuning, MovementInput,
};

/// Lower bound applied to a non-positive apex time.
pub const MIN_APEX_TIME: f32 = 0.01;
/// How far below the top cap the head probe starts.
const PROBE_START_INSET: f32 = 0.02;
/// Added to the configured head cast distance.
const PROBE_CAST_EPSILON: f32 = 0.05;

/// Gravity and takeoff speed derived from apex height and time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpKinematics {
    /// Always negative for a positive apex height.
    pub gravity: f32,
    pub jump_velocity: f32,
}

impl JumpKinematics {
    /// For a body reaching height `h` at time `t` under constant gravity:
    /// v = 2h/t, g = -2h/t^2.
    pub fn from_apex(apex_height: f32, apex_time: f32) -> Self {
        let apex_time = apex_time.max(MIN_APEX_TIME);
        Self {
            gravity: -2.0 * apex_height / (apex_time * apex_time),
            jump_velocity: 2.0 * apex_height / apex_time,
        }
    }
}

/// Contact flags reported by a swept move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionFlags {
    pub above: bool,
    pub below: bool,
    pub sides: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveResult {
    pub flags: CollisionFlags,
    pub grounded: bool,
}

/// Head probe request. `origin_offset` is relative to the body center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeQuery {
    pub origin_offset: Vec2,
    pub radius: f32,
    pub distance: f32,
    pub mask: LayerMask,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeHit {
    pub entity: Entity,
    pub kind: Interactable,
}

/// Raised when an upward move hits a ceiling and the head probe finds what
/// was struck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CeilingStruck {
    pub hit: ProbeHit,
}

/// World access the controller needs during a tick.
pub trait LocomotionHost {
    /// Apply `displacement` as a collision-aware move and report contacts.
    fn sweep(&mut self, displacement: Vec2) -> MoveResult;

    /// Short-range upward cast used to identify a struck block.
    fn probe_ceiling(&mut self, query: &ProbeQuery) -> Option<ProbeHit>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutcome {
    pub displacement: Vec2,
    pub contacts: CollisionFlags,
    pub jumped: bool,
    pub ceiling_struck: Option<CeilingStruck>,
    pub hints: LocomotionHints,
}

#[derive(Component, Debug, Clone)]
pub struct LocomotionController {
    tuning: LocomotionTuning,
    kinematics: JumpKinematics,
    shape: ControllerShape,
    state: LocomotionState,
}

impl LocomotionController {
    pub fn new(mut tuning: LocomotionTuning, shape: ControllerShape) -> Self {
        if tuning.apex_time <= 0.0 {
            warn!(
                "apex_time {} is not positive, clamping to {}",
                tuning.apex_time, MIN_APEX_TIME
            );
            tuning.apex_time = MIN_APEX_TIME;
        }
        let kinematics = JumpKinematics::from_apex(tuning.apex_height, tuning.apex_time);
        Self {
            tuning,
            kinematics,
            shape,
            state: LocomotionState::default(),
        }
    }

    pub fn tuning(&self) -> &LocomotionTuning {
        &self.tuning
    }

    pub fn kinematics(&self) -> JumpKinematics {
        self.kinematics
    }

    pub fn shape(&self) -> ControllerShape {
        self.shape
    }

    pub fn state(&self) -> &LocomotionState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut LocomotionState {
        &mut self.state
    }

    /// Run one simulation tick. `grounded_now` is the grounded result of
    /// the previous tick's move.
    pub fn advance(
        &mut self,
        input: &MovementInput,
        grounded_now: bool,
        dt: f32,
        host: &mut impl LocomotionHost,
    ) -> TickOutcome {
        let tuning = &self.tuning;
        let state = &mut self.state;
        let direction = input.direction.clamp(-1.0, 1.0);
        let mut grounded = grounded_now;

        if direction > 0.0 {
            state.facing = Facing::Right;
        } else if direction < 0.0 {
            state.facing = Facing::Left;
        }

        state.jump_buffer_timer = if input.jump_just_pressed {
            tuning.jump_buffer_time
        } else {
            (state.jump_buffer_timer - dt).max(0.0)
        };
        state.coyote_timer = if grounded {
            tuning.coyote_time
        } else {
            (state.coyote_timer - dt).max(0.0)
        };

        // Horizontal
        let max_speed = if input.run_held {
            tuning.run_speed
        } else {
            tuning.walk_speed
        };
        let target = direction * max_speed;
        let near_apex =
            !grounded && state.vertical_velocity.abs() <= tuning.apex_velocity_threshold;
        let accelerating = target.abs() > state.horizontal_velocity.abs();
        let rate = horizontal_rate(tuning, grounded, accelerating, near_apex);
        state.horizontal_velocity = move_towards(state.horizontal_velocity, target, rate * dt);

        // Jump: buffer and coyote must both be live
        let jumped = state.jump_buffer_timer > 0.0 && state.coyote_timer > 0.0;
        if jumped {
            state.vertical_velocity = self.kinematics.jump_velocity;
            state.jump_buffer_timer = 0.0;
            state.coyote_timer = 0.0;
            grounded = false;
            debug!(
                "Jump: vy={}, vx={}",
                state.vertical_velocity, state.horizontal_velocity
            );
        }

        if grounded && state.vertical_velocity < 0.0 {
            state.vertical_velocity = tuning.grounded_stick_velocity;
        }

        let gravity = effective_gravity(
            tuning,
            self.kinematics.gravity,
            state.vertical_velocity,
            grounded,
            input.jump_held,
        );
        state.vertical_velocity += gravity * dt;

        let displacement =
            Vec2::new(state.horizontal_velocity, state.vertical_velocity) * dt;
        let result = host.sweep(displacement);

        let mut ceiling_struck = None;
        if result.flags.above && state.vertical_velocity > 0.0 {
            state.vertical_velocity = 0.0;
            let query = ceiling_probe(tuning, &self.shape);
            ceiling_struck = host.probe_ceiling(&query).map(|hit| CeilingStruck { hit });
        }
        if result.flags.sides {
            state.horizontal_velocity = 0.0;
        }

        if result.grounded != state.grounded {
            debug!("Grounded {} -> {}", state.grounded, result.grounded);
        }
        state.grounded = result.grounded;

        TickOutcome {
            displacement,
            contacts: result.flags,
            jumped,
            ceiling_struck,
            hints: LocomotionHints {
                speed: state.horizontal_velocity.abs(),
                grounded: result.grounded,
                vertical_velocity: state.vertical_velocity,
                jumped,
            },
        }
    }
}

/// Acceleration rate keyed by {ground, air} x {accelerating, decelerating}.
pub(crate) fn horizontal_rate(
    tuning: &LocomotionTuning,
    grounded: bool,
    accelerating: bool,
    near_apex: bool,
) -> f32 {
    match (grounded, accelerating) {
        (true, true) => tuning.ground_acceleration,
        (true, false) => tuning.ground_deceleration,
        (false, true) if near_apex => {
            tuning.air_acceleration * tuning.apex_air_accel_multiplier
        }
        (false, true) => tuning.air_acceleration,
        (false, false) => tuning.air_deceleration,
    }
}

/// Base gravity with the short-hop and apex-hang multipliers compounded.
pub(crate) fn effective_gravity(
    tuning: &LocomotionTuning,
    base: f32,
    vertical_velocity: f32,
    grounded: bool,
    jump_held: bool,
) -> f32 {
    let mut gravity = base;
    if vertical_velocity > 0.0 && !jump_held {
        gravity *= tuning.fall_gravity_multiplier;
    }
    if !grounded && vertical_velocity.abs() <= tuning.apex_velocity_threshold {
        gravity *= tuning.apex_gravity_multiplier;
    }
    gravity
}

/// Head probe: a circle starting just under the top cap, cast upward.
pub(crate) fn ceiling_probe(tuning: &LocomotionTuning, shape: &ControllerShape) -> ProbeQuery {
    let top_cap_center = Vec2::Y * (shape.height * 0.5 - shape.radius);
    ProbeQuery {
        origin_offset: top_cap_center - Vec2::Y * PROBE_START_INSET,
        radius: shape.radius * tuning.ceiling_probe.head_radius_scale,
        distance: tuning.ceiling_probe.head_cast_extra + PROBE_CAST_EPSILON,
        mask: tuning.ceiling_probe.mask(),
    }
}

/// Step `current` toward `target` by at most `max_delta`, never past it.
pub fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    let delta = target - current;
    if delta.abs() <= max_delta {
        target
    } else {
        current + delta.signum() * max_delta
    }
}
