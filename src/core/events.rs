//! Core domain: events for level flow.

use bevy::ecs::message::Message;

/// Fired once when the level timer reaches zero
#[derive(Debug)]
pub struct TimeUpEvent;

impl Message for TimeUpEvent {}
