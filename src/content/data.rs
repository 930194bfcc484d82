//! Content domain: designer data deserialized from RON.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::blocks::{CoinPopSettings, ShatterSettings};
use crate::core::{CameraSettings, LevelTimerSettings};
use crate::movement::LocomotionTuning;
use crate::sprites::FlipbookSettings;

/// Every tunable the game reads at startup. Missing sections fall back to
/// their defaults, so a partial file is valid.
#[derive(Resource, Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GameplayDefaults {
    pub schema_version: u32,
    pub locomotion: LocomotionTuning,
    pub brick_shatter: ShatterSettings,
    pub coin_pop: CoinPopSettings,
    pub level_timer: LevelTimerSettings,
    pub flipbook: FlipbookSettings,
    pub camera: CameraSettings,
}
