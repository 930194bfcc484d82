//! Movement domain: tuning and input resources.

use avian2d::prelude::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::GameLayer;

/// Designer-facing locomotion parameters. Speeds in units/s, accelerations
/// in units/s^2, times in seconds.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LocomotionTuning {
    pub walk_speed: f32,
    pub run_speed: f32,
    pub ground_acceleration: f32,
    pub ground_deceleration: f32,
    pub air_acceleration: f32,
    pub air_deceleration: f32,
    /// Height above takeoff reached by a full jump.
    pub apex_height: f32,
    /// Time to reach the apex.
    pub apex_time: f32,
    /// Gravity multiplier while rising with jump released (short hop).
    pub fall_gravity_multiplier: f32,
    pub jump_buffer_time: f32,
    pub coyote_time: f32,
    /// Near the apex gravity is multiplied by this (< 1 = hang time).
    pub apex_gravity_multiplier: f32,
    /// "Near apex" means |vertical velocity| <= this.
    pub apex_velocity_threshold: f32,
    pub apex_air_accel_multiplier: f32,
    /// Small negative velocity held while grounded so the body stays seated.
    pub grounded_stick_velocity: f32,
    pub ceiling_probe: CeilingProbeTuning,
}

impl Default for LocomotionTuning {
    fn default() -> Self {
        Self {
            walk_speed: 5.0,
            run_speed: 8.0,
            ground_acceleration: 30.0,
            ground_deceleration: 40.0,
            air_acceleration: 15.0,
            air_deceleration: 5.0,
            apex_height: 3.0,
            apex_time: 0.35,
            fall_gravity_multiplier: 2.0,
            jump_buffer_time: 0.12,
            coyote_time: 0.10,
            apex_gravity_multiplier: 0.6,
            apex_velocity_threshold: 1.0,
            apex_air_accel_multiplier: 1.15,
            grounded_stick_velocity: -2.0,
            ceiling_probe: CeilingProbeTuning::default(),
        }
    }
}

impl LocomotionTuning {
    pub fn max_speed(&self) -> f32 {
        self.walk_speed.max(self.run_speed)
    }
}

/// Geometry and filtering of the short head probe issued on a ceiling bonk.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CeilingProbeTuning {
    pub head_radius_scale: f32,
    pub head_cast_extra: f32,
    /// Layers the probe can hit. Sensors are never worth listing here.
    pub hit_layers: Vec<GameLayer>,
}

impl Default for CeilingProbeTuning {
    fn default() -> Self {
        Self {
            head_radius_scale: 0.9,
            head_cast_extra: 0.2,
            hit_layers: vec![GameLayer::Ground, GameLayer::Wall, GameLayer::Block],
        }
    }
}

impl CeilingProbeTuning {
    pub fn mask(&self) -> LayerMask {
        LayerMask(
            self.hit_layers
                .iter()
                .filter(|layer| **layer != GameLayer::Sensor)
                .fold(0, |bits, layer| bits | layer.to_bits()),
        )
    }
}

/// Input sampled once per tick. Edge detection is the sampler's job.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct MovementInput {
    /// Horizontal direction, clamped to [-1, 1] by the controller.
    pub direction: f32,
    pub jump_just_pressed: bool,
    pub jump_held: bool,
    pub run_held: bool,
}
