//! Blocks domain: bumpable blocks and the effects they play when struck.

#[cfg(feature = "dev-tools")]
mod click;
mod components;
mod events;
mod pop;
mod shatter;
mod systems;
mod tween;

#[cfg(test)]
mod tests;

pub use components::{CoinPopper, Interactable, ShatterChunk, Shatterable};
pub use events::{BlockStruck, StrikeCause};
pub use pop::{CoinPop, CoinPopSettings};
pub use shatter::{BrickShatter, ChunkTrack, ShatterSettings};
pub use systems::BlockRng;
pub use tween::{TweenClock, TweenState};

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::blocks::systems::{handle_block_strikes, tick_brick_shatters, tick_coin_pops};
use crate::core::RunConfig;
use crate::movement::LocomotionSet;

pub struct BlocksPlugin;

impl Plugin for BlocksPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<BlockStruck>()
            .add_systems(Startup, seed_block_rng)
            .add_systems(
                Update,
                (handle_block_strikes, tick_brick_shatters, tick_coin_pops)
                    .chain()
                    .after(LocomotionSet),
            );

        #[cfg(feature = "dev-tools")]
        app.add_systems(
            Update,
            click::click_to_strike.before(handle_block_strikes),
        );
    }
}

fn seed_block_rng(mut commands: Commands, run_config: Res<RunConfig>) {
    commands.insert_resource(BlockRng(ChaCha8Rng::seed_from_u64(run_config.seed)));
}
