//! Sprites module: locomotion animation state and flip-book playback.

pub mod animation;
pub mod flipbook;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

pub use animation::{AnimationState, LocomotionAnimator, flip_for};
pub use flipbook::{Flipbook, FlipbookSettings, shimmer_strip, shimmer_strip_pixels};

use crate::movement::LocomotionSet;

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                animation::animate_locomotion.after(LocomotionSet),
                flipbook::tick_flipbooks,
            ),
        );
    }
}
