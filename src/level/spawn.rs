//! Level domain: geometry and block layout for the test level.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::blocks::{CoinPopper, Interactable, Shatterable};
use crate::content::GameplayDefaults;
use crate::movement::GameLayer;
use crate::sprites::{Flipbook, shimmer_strip};

/// Everything spawned as part of the level layout.
#[derive(Component, Debug)]
pub struct LevelPiece;

pub const BLOCK_SIZE: f32 = 1.0;
/// Bottom edge of the floating block row.
pub const BLOCK_ROW_BOTTOM: f32 = 4.0;

/// One bumpable block in the layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockPlacement {
    /// Center of the block.
    pub position: Vec2,
    pub kind: Interactable,
    /// Breakables without it exercise the outright-removal fallback.
    pub shatters: bool,
}

/// Block layout of the test level: a brick row, one brick with no shatter
/// effect, two reward blocks and a plain block, all on one row.
pub fn test_level_blocks() -> Vec<BlockPlacement> {
    let y = BLOCK_ROW_BOTTOM + BLOCK_SIZE * 0.5;
    let block = |x: f32, kind: Interactable, shatters: bool| BlockPlacement {
        position: Vec2::new(x, y),
        kind,
        shatters,
    };

    let mut blocks: Vec<BlockPlacement> = [-2.0, -1.0, 0.0, 1.0]
        .into_iter()
        .map(|x| block(x, Interactable::Breakable, true))
        .collect();
    blocks.push(block(-4.0, Interactable::Breakable, false));
    blocks.push(block(4.0, Interactable::Reward, false));
    blocks.push(block(5.0, Interactable::Reward, false));
    blocks.push(block(7.0, Interactable::Plain, false));
    blocks
}

pub(crate) fn spawn_test_level(
    mut commands: Commands,
    defaults: Res<GameplayDefaults>,
    mut images: ResMut<Assets<Image>>,
) {
    let wall_color = Color::srgb(0.25, 0.25, 0.35);
    let ground_color = Color::srgb(0.35, 0.4, 0.35);
    let brick_color = Color::srgb(0.65, 0.33, 0.18);
    let reward_color = Color::srgb(0.95, 0.7, 0.15);
    let plain_color = Color::srgb(0.5, 0.5, 0.5);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);

    // Ground, top surface at y = 0
    spawn_solid(
        &mut commands,
        Vec2::new(40.0, 1.0),
        Vec2::new(0.0, -0.5),
        ground_color,
        ground_layers,
    );

    // Side walls
    for x in [-20.5, 20.5] {
        spawn_solid(
            &mut commands,
            Vec2::new(1.0, 20.0),
            Vec2::new(x, 9.5),
            wall_color,
            wall_layers,
        );
    }

    // One shared strip; each reward block plays it through its own rect
    let reward_strip = images.add(shimmer_strip(&defaults.flipbook, reward_color));

    let blocks = test_level_blocks();
    for placement in &blocks {
        let color = match placement.kind {
            Interactable::Breakable => brick_color,
            Interactable::Reward => reward_color,
            Interactable::Plain => plain_color,
        };
        let block = spawn_block(&mut commands, placement.position, color, placement.kind);

        if placement.shatters {
            commands.entity(block).insert(Shatterable {
                settings: defaults.brick_shatter.clone(),
            });
        }
        if placement.kind == Interactable::Reward {
            let flipbook = Flipbook::new(&defaults.flipbook);
            commands.entity(block).insert((
                CoinPopper {
                    settings: defaults.coin_pop.clone(),
                },
                Sprite {
                    image: reward_strip.clone(),
                    custom_size: Some(Vec2::splat(BLOCK_SIZE)),
                    rect: Some(flipbook.frame_rect()),
                    ..default()
                },
                flipbook,
            ));
        }
    }

    info!("Spawned test level with {} blocks", blocks.len());
}

fn spawn_solid(
    commands: &mut Commands,
    size: Vec2,
    position: Vec2,
    color: Color,
    layers: CollisionLayers,
) {
    commands.spawn((
        LevelPiece,
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(position.extend(0.0)),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        layers,
    ));
}

fn spawn_block(commands: &mut Commands, position: Vec2, color: Color, kind: Interactable) -> Entity {
    commands
        .spawn((
            LevelPiece,
            kind,
            Sprite {
                color,
                custom_size: Some(Vec2::splat(BLOCK_SIZE)),
                ..default()
            },
            Transform::from_translation(position.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(BLOCK_SIZE, BLOCK_SIZE),
            CollisionLayers::new(GameLayer::Block, [GameLayer::Player]),
        ))
        .id()
}
