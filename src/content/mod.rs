//! Content domain: data-driven tuning loaded from `assets/data`.

mod data;
mod loader;

#[cfg(test)]
mod tests;

pub use data::GameplayDefaults;
pub use loader::{ContentLoadError, load_gameplay_defaults, parse_gameplay_defaults};

use bevy::prelude::*;
use std::path::Path;

const CONTENT_DIR: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_content);
    }
}

fn load_content(mut commands: Commands, existing: Option<Res<GameplayDefaults>>) {
    if existing.is_some() {
        debug!("Gameplay defaults already present, skipping load");
        return;
    }

    let defaults = match load_gameplay_defaults(Path::new(CONTENT_DIR)) {
        Ok(defaults) => {
            info!(
                "Loaded gameplay defaults (schema v{})",
                defaults.schema_version
            );
            defaults
        }
        Err(e) => {
            warn!("{}; using built-in defaults", e);
            GameplayDefaults::default()
        }
    };

    commands.insert_resource(defaults);
}
