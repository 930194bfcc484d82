//! UI domain: in-level HUD.

mod hud_timer;
mod hud_wallet;


pub use hud_timer::timer_label;
pub use hud_wallet::coin_label;

use bevy::prelude::*;

use crate::ui::hud_timer::{spawn_timer_ui, update_timer_display};
use crate::ui::hud_wallet::{spawn_coin_display_ui, update_coin_display};

pub(crate) const HUD_PADDING: f32 = 16.0;
pub(crate) const HUD_TEXT_COLOR: Color = Color::srgb(0.95, 0.95, 0.9);

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PostStartup, (spawn_coin_display_ui, spawn_timer_ui))
            .add_systems(Update, (update_coin_display, update_timer_display));
    }
}
