//! Core domain: follow camera.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::Player;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Approximate time to reach the target.
    pub smooth_time: f32,
    /// Camera position relative to the player, (x, y).
    pub offset: (f32, f32),
    /// Orthographic projection scale (world units per pixel).
    pub projection_scale: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            smooth_time: 0.2,
            offset: (0.0, 2.0),
            projection_scale: 1.0 / 48.0,
        }
    }
}

impl CameraSettings {
    pub fn offset_vec(&self) -> Vec2 {
        Vec2::new(self.offset.0, self.offset.1)
    }
}

#[derive(Component, Debug, Clone, Default)]
pub struct CameraFollow {
    pub offset: Vec2,
    pub smooth_time: f32,
    velocity: Vec2,
}

impl CameraFollow {
    pub fn new(settings: &CameraSettings) -> Self {
        Self {
            offset: settings.offset_vec(),
            smooth_time: settings.smooth_time,
            velocity: Vec2::ZERO,
        }
    }

    /// Next camera position on the way to `target + offset`.
    pub fn step(&mut self, current: Vec2, target: Vec2, dt: f32) -> Vec2 {
        let goal = target + self.offset;
        Vec2::new(
            smooth_damp(current.x, goal.x, &mut self.velocity.x, self.smooth_time, dt),
            smooth_damp(current.y, goal.y, &mut self.velocity.y, self.smooth_time, dt),
        )
    }
}

/// Critically damped spring toward `target` (Game Programming Gems 4,
/// 1.10). Never overshoots the target.
pub fn smooth_damp(current: f32, target: f32, velocity: &mut f32, smooth_time: f32, dt: f32) -> f32 {
    if dt <= 0.0 {
        return current;
    }
    let smooth_time = smooth_time.max(0.0001);
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * decay;
    let mut output = target + (change + temp) * decay;

    if (target - current > 0.0) == (output > target) {
        output = target;
        *velocity = 0.0;
    }
    output
}

pub(crate) fn follow_player(
    time: Res<Time>,
    players: Query<&Transform, (With<Player>, Without<CameraFollow>)>,
    mut cameras: Query<(&mut Transform, &mut CameraFollow)>,
) {
    let Some(target) = players.iter().next() else {
        return;
    };
    let dt = time.delta_secs();

    for (mut transform, mut follow) in &mut cameras {
        let next = follow.step(transform.translation.truncate(), target.translation.truncate(), dt);
        transform.translation = next.extend(transform.translation.z);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smooth_damp_converges_without_overshoot() {
        let mut velocity = 0.0;
        let mut position = 0.0;
        for _ in 0..600 {
            position = smooth_damp(position, 10.0, &mut velocity, 0.2, 1.0 / 60.0);
            assert!(position <= 10.0);
        }
        assert!((position - 10.0).abs() < 1e-3);
    }

    #[test]
    fn test_smooth_damp_zero_dt_holds_position() {
        let mut velocity = 3.0;
        assert_eq!(smooth_damp(1.0, 5.0, &mut velocity, 0.2, 0.0), 1.0);
    }

    #[test]
    fn test_follow_applies_offset() {
        let mut follow = CameraFollow::new(&CameraSettings::default());
        let mut position = Vec2::ZERO;
        for _ in 0..600 {
            position = follow.step(position, Vec2::new(4.0, 1.0), 1.0 / 60.0);
        }
        assert!((position - Vec2::new(4.0, 3.0)).length() < 1e-3);
    }
}
