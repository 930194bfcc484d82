mod blocks;
mod content;
mod core;
mod level;
mod movement;
mod rewards;
mod sprites;
mod ui;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Brickhop".to_string(),
                resolution: (1280, 720).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .add_plugins((
            content::ContentPlugin,
            core::CorePlugin,
            movement::MovementPlugin,
            blocks::BlocksPlugin,
            rewards::RewardsPlugin,
            sprites::SpritesPlugin,
            level::LevelPlugin,
            ui::UiPlugin,
        ))
        .run();
}
