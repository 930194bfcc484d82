//! Rewards domain: coin tracking and coin events.

use bevy::ecs::message::{Message, MessageReader};
use bevy::prelude::*;

/// Coins collected in the current level.
#[derive(Resource, Debug, Default)]
pub struct CoinWallet {
    pub coins: u32,
}

impl CoinWallet {
    pub fn add(&mut self, amount: u32) {
        self.coins = self.coins.saturating_add(amount);
    }
}

/// Source of coin gain for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoinSource {
    RewardBlock,
}

/// Event fired when the player gains coins
#[derive(Debug)]
pub struct CoinGainedEvent {
    pub amount: u32,
    pub source: CoinSource,
}

impl Message for CoinGainedEvent {}

/// Process coin gained events and update the wallet
pub(crate) fn process_coin_events(
    mut coin_events: MessageReader<CoinGainedEvent>,
    mut wallet: ResMut<CoinWallet>,
) {
    for event in coin_events.read() {
        wallet.add(event.amount);
        info!(
            "Gained {} coins from {:?}. Total: {}",
            event.amount, event.source, wallet.coins
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_add_saturates() {
        let mut wallet = CoinWallet { coins: u32::MAX - 1 };
        wallet.add(5);
        assert_eq!(wallet.coins, u32::MAX);
    }
}
