//! Level domain: the fixed test level.

mod spawn;

pub use spawn::{BLOCK_ROW_BOTTOM, BLOCK_SIZE, BlockPlacement, LevelPiece, test_level_blocks};

use bevy::prelude::*;

use crate::level::spawn::spawn_test_level;

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_test_level);
    }
}
