//! UI domain: level countdown HUD element.

use bevy::prelude::*;

use crate::core::LevelTimer;
use crate::ui::{HUD_PADDING, HUD_TEXT_COLOR};

/// Marker for the countdown text
#[derive(Component)]
pub struct TimerText;

pub fn timer_label(timer: &LevelTimer) -> String {
    format!("TIME\n{}", timer.whole_seconds())
}

pub(crate) fn spawn_timer_ui(mut commands: Commands, timer: Res<LevelTimer>) {
    commands.spawn((
        TimerText,
        Text::new(timer_label(&timer)),
        TextFont {
            font_size: 22.0,
            ..default()
        },
        TextColor(HUD_TEXT_COLOR),
        Node {
            position_type: PositionType::Absolute,
            right: Val::Px(HUD_PADDING),
            top: Val::Px(HUD_PADDING),
            ..default()
        },
    ));
}

pub(crate) fn update_timer_display(
    timer: Res<LevelTimer>,
    mut query: Query<&mut Text, With<TimerText>>,
) {
    if timer.is_changed() {
        let label = timer_label(&timer);
        for mut text in &mut query {
            if **text != label {
                **text = label.clone();
            }
        }
    }
}
