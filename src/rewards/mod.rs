//! Rewards domain: the coin counter that reward blocks feed.

pub(crate) mod economy;

pub use economy::{CoinGainedEvent, CoinSource, CoinWallet};

use bevy::prelude::*;

use crate::rewards::economy::process_coin_events;

pub struct RewardsPlugin;

impl Plugin for RewardsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CoinWallet>()
            .add_message::<CoinGainedEvent>()
            .add_systems(Update, process_coin_events);
    }
}
