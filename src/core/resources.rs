//! Core domain: shared resources for the level run.

use bevy::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug)]
pub struct RunConfig {
    /// Seeds cosmetic randomness (brick chunk spin).
    pub seed: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: rand::rng().random(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LevelTimerSettings {
    pub start_seconds: f32,
}

impl Default for LevelTimerSettings {
    fn default() -> Self {
        Self {
            start_seconds: 100.0,
        }
    }
}

/// Countdown for the current level. Reaching zero is announced once;
/// nothing else in the game stops.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct LevelTimer {
    remaining: f32,
    expired: bool,
}

impl Default for LevelTimer {
    fn default() -> Self {
        Self::new(LevelTimerSettings::default().start_seconds)
    }
}

impl LevelTimer {
    pub fn new(seconds: f32) -> Self {
        Self {
            remaining: seconds.max(0.0),
            expired: seconds <= 0.0,
        }
    }

    /// Returns true only on the tick the timer runs out.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.expired {
            return false;
        }
        self.remaining = (self.remaining - dt).max(0.0);
        self.expired = self.remaining <= 0.0;
        self.expired
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }

    /// Whole seconds left, truncated.
    pub fn whole_seconds(&self) -> i32 {
        self.remaining as i32
    }
}
