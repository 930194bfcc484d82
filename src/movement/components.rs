//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Bricks, reward blocks and other bumpable blocks
    Block,
    /// Player character
    Player,
    /// Trigger volumes - never block movement or head probes
    Sensor,
}

#[derive(Component, Debug)]
pub struct Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}

/// Per-entity locomotion state. Only `LocomotionController::advance` mutates it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocomotionState {
    pub horizontal_velocity: f32,
    /// Positive = rising.
    pub vertical_velocity: f32,
    pub facing: Facing,
    pub jump_buffer_timer: f32,
    pub coyote_timer: f32,
    /// Result of the last move resolution.
    pub grounded: bool,
}

/// Capsule dimensions of the character's collision volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerShape {
    pub radius: f32,
    /// Full height, including both caps.
    pub height: f32,
}

impl Default for ControllerShape {
    fn default() -> Self {
        Self {
            radius: 0.5,
            height: 2.0,
        }
    }
}

impl ControllerShape {
    pub fn collider(&self) -> Collider {
        Collider::capsule(self.radius, (self.height - 2.0 * self.radius).max(0.0))
    }
}

/// Presentation hints published every tick for the animation layer.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct LocomotionHints {
    pub speed: f32,
    pub grounded: bool,
    pub vertical_velocity: f32,
    /// True only on the tick a jump fired.
    pub jumped: bool,
}
