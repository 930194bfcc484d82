//! Blocks domain: strike messages.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::blocks::Interactable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrikeCause {
    /// Head bonk from a character moving upward.
    Ceiling { striker: Entity },
    /// Debug mouse pick.
    Click,
}

/// Fired when a block is struck; block collaborators react to it.
#[derive(Debug, Clone, Copy)]
pub struct BlockStruck {
    pub block: Entity,
    pub kind: Interactable,
    pub cause: StrikeCause,
}

impl Message for BlockStruck {}
