//! Blocks domain: components for things the player can bump.

use bevy::prelude::*;

use crate::blocks::{CoinPopSettings, ShatterSettings};

/// What happens when a block is struck. Attached by the level, read by the
/// head probe and the click interactor.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interactable {
    /// Shatters (or is removed outright when it has no `Shatterable`).
    Breakable,
    /// Awards a coin and pops one out of the top.
    Reward,
    #[default]
    Plain,
}

/// Break collaborator for `Interactable::Breakable` blocks.
#[derive(Component, Debug, Clone)]
pub struct Shatterable {
    pub settings: ShatterSettings,
}

/// Pop-effect collaborator for `Interactable::Reward` blocks.
#[derive(Component, Debug, Clone)]
pub struct CoinPopper {
    pub settings: CoinPopSettings,
}

/// Marker for debris spawned by a shattering brick.
#[derive(Component, Debug)]
pub struct ShatterChunk;
