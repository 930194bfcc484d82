//! Blocks domain: tests for strike dispatch and effect lifecycles.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::systems::{handle_block_strikes, tick_brick_shatters, tick_coin_pops};
use super::{
    BlockRng, BlockStruck, BrickShatter, CoinPop, CoinPopSettings, CoinPopper, Interactable,
    ShatterChunk, ShatterSettings, Shatterable, StrikeCause,
};
use crate::rewards::economy::process_coin_events;
use crate::rewards::{CoinGainedEvent, CoinWallet};

fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)))
        .insert_resource(BlockRng(ChaCha8Rng::seed_from_u64(7)))
        .init_resource::<CoinWallet>()
        .add_message::<BlockStruck>()
        .add_message::<CoinGainedEvent>()
        .add_systems(
            Update,
            (
                handle_block_strikes,
                tick_brick_shatters,
                tick_coin_pops,
                process_coin_events,
            )
                .chain(),
        );
    app
}

fn strike(app: &mut App, block: Entity, kind: Interactable) {
    app.world_mut().write_message(BlockStruck {
        block,
        kind,
        cause: StrikeCause::Click,
    });
}

fn count<C: Component>(app: &mut App) -> usize {
    app.world_mut()
        .query_filtered::<Entity, With<C>>()
        .iter(app.world())
        .count()
}

fn spawn_brick(app: &mut App) -> Entity {
    app.world_mut()
        .spawn((
            Interactable::Breakable,
            Shatterable {
                settings: ShatterSettings::default(),
            },
            Sprite::from_color(Color::WHITE, Vec2::ONE),
            Transform::from_xyz(0.0, 4.0, 0.0),
        ))
        .id()
}

#[test]
fn test_breakable_without_shatterable_is_removed() {
    let mut app = test_app();
    let block = app
        .world_mut()
        .spawn((Interactable::Breakable, Transform::default()))
        .id();

    strike(&mut app, block, Interactable::Breakable);
    app.update();

    assert!(app.world().get_entity(block).is_err());
}

#[test]
fn test_breakable_shatters_then_despawns() {
    let mut app = test_app();
    let block = spawn_brick(&mut app);

    strike(&mut app, block, Interactable::Breakable);
    app.update();

    assert!(app.world().get::<BrickShatter>(block).is_some());
    assert_eq!(app.world().get::<Visibility>(block), Some(&Visibility::Hidden));
    assert_eq!(count::<ShatterChunk>(&mut app), 4);

    for _ in 0..10 {
        app.update();
    }

    assert!(app.world().get_entity(block).is_err());
    assert_eq!(count::<ShatterChunk>(&mut app), 0);
}

#[test]
fn test_repeat_strikes_shatter_once() {
    let mut app = test_app();
    let block = spawn_brick(&mut app);

    strike(&mut app, block, Interactable::Breakable);
    strike(&mut app, block, Interactable::Breakable);
    app.update();
    strike(&mut app, block, Interactable::Breakable);
    app.update();

    assert_eq!(count::<ShatterChunk>(&mut app), 4);
}

#[test]
fn test_reward_block_awards_coin_and_pops() {
    let mut app = test_app();
    let block = app
        .world_mut()
        .spawn((
            Interactable::Reward,
            CoinPopper {
                settings: CoinPopSettings::default(),
            },
            Transform::from_xyz(3.0, 4.0, 0.0),
        ))
        .id();

    strike(&mut app, block, Interactable::Reward);
    app.update();

    assert_eq!(app.world().resource::<CoinWallet>().coins, 1);
    assert_eq!(count::<CoinPop>(&mut app), 1);
    // The block itself is untouched
    assert!(app.world().get_entity(block).is_ok());

    for _ in 0..10 {
        app.update();
    }
    assert_eq!(count::<CoinPop>(&mut app), 0);
}

#[test]
fn test_reward_block_without_popper_still_pays() {
    let mut app = test_app();
    let block = app
        .world_mut()
        .spawn((Interactable::Reward, Transform::default()))
        .id();

    strike(&mut app, block, Interactable::Reward);
    strike(&mut app, block, Interactable::Reward);
    app.update();

    assert_eq!(app.world().resource::<CoinWallet>().coins, 2);
    assert_eq!(count::<CoinPop>(&mut app), 0);
}

#[test]
fn test_plain_block_is_ignored() {
    let mut app = test_app();
    let block = app
        .world_mut()
        .spawn((Interactable::Plain, Transform::default()))
        .id();

    strike(&mut app, block, Interactable::Plain);
    app.update();

    assert!(app.world().get_entity(block).is_ok());
    assert_eq!(app.world().resource::<CoinWallet>().coins, 0);
}
