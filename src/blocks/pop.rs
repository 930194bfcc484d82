//! Blocks domain: coin pop effect for reward blocks.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::blocks::tween::{TweenClock, TweenState};

/// Height above the block where the coin appears.
const POP_SPAWN_OFFSET: f32 = 0.6;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CoinPopSettings {
    pub pop_height: f32,
    pub pop_duration: f32,
    /// Degrees per second.
    pub rotate_speed: f32,
}

impl Default for CoinPopSettings {
    fn default() -> Self {
        Self {
            pop_height: 1.0,
            pop_duration: 0.25,
            rotate_speed: 360.0,
        }
    }
}

/// A coin rising out of a reward block. Lives on the coin entity.
#[derive(Component, Debug, Clone)]
pub struct CoinPop {
    start: Vec3,
    end: Vec3,
    rotate_speed: f32,
    clock: TweenClock,
}

impl CoinPop {
    pub fn from_block(block_position: Vec3, settings: &CoinPopSettings) -> Self {
        let start = block_position + Vec3::Y * POP_SPAWN_OFFSET;
        Self {
            start,
            end: start + Vec3::Y * settings.pop_height,
            rotate_speed: settings.rotate_speed,
            clock: TweenClock::new(settings.pop_duration),
        }
    }

    pub fn start(&self) -> Vec3 {
        self.start
    }

    pub fn advance(&mut self, dt: f32) -> TweenState {
        self.clock.tick(dt)
    }

    /// Ease-out cubic from start to end.
    pub fn position(&self) -> Vec3 {
        let u = self.clock.progress();
        let eased = 1.0 - (1.0 - u).powi(3);
        self.start.lerp(self.end, eased)
    }

    /// Rotation to apply this tick, in radians.
    pub fn spin_step(&self, dt: f32) -> f32 {
        (self.rotate_speed * dt).to_radians()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_eases_out_to_full_height() {
        let mut pop = CoinPop::from_block(Vec3::new(1.0, 2.0, 0.0), &CoinPopSettings::default());
        assert!((pop.start() - Vec3::new(1.0, 2.6, 0.0)).length() < 1e-5);
        assert_eq!(pop.position(), pop.start());

        pop.advance(0.125);
        // Ease-out: past the linear midpoint at half time
        let half = pop.position().y - pop.start().y;
        assert!((half - 0.875).abs() < 1e-5);

        pop.advance(0.125);
        assert!((pop.position().y - 3.6).abs() < 1e-5);
        assert_eq!(pop.advance(0.016), TweenState::Complete);
    }
}
