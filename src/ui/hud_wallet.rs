//! UI domain: coin display HUD element.

use bevy::prelude::*;

use crate::rewards::CoinWallet;
use crate::ui::{HUD_PADDING, HUD_TEXT_COLOR};

/// Marker for the coin display UI container
#[derive(Component)]
pub struct CoinDisplayUI;

/// Marker for the coin amount text
#[derive(Component)]
pub struct CoinAmountText;

pub fn coin_label(coins: u32) -> String {
    format!("x{}", coins)
}

pub(crate) fn spawn_coin_display_ui(mut commands: Commands) {
    commands
        .spawn((
            CoinDisplayUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(HUD_PADDING),
                top: Val::Px(HUD_PADDING),
                flex_direction: FlexDirection::Row,
                align_items: AlignItems::Center,
                column_gap: Val::Px(8.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            // Coin icon (gold square)
            parent.spawn((
                Node {
                    width: Val::Px(16.0),
                    height: Val::Px(16.0),
                    ..default()
                },
                BackgroundColor(Color::srgb(0.9, 0.75, 0.2)),
            ));

            parent.spawn((
                CoinAmountText,
                Text::new(coin_label(0)),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(HUD_TEXT_COLOR),
            ));
        });
}

pub(crate) fn update_coin_display(
    wallet: Res<CoinWallet>,
    mut query: Query<&mut Text, With<CoinAmountText>>,
) {
    if wallet.is_changed() {
        for mut text in &mut query {
            **text = coin_label(wallet.coins);
        }
    }
}
