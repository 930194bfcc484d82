//! Blocks domain: strike dispatch and effect ticking.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::blocks::tween::TweenState;
use crate::blocks::{
    BlockStruck, BrickShatter, CoinPop, CoinPopper, Interactable, ShatterChunk,
    Shatterable,
};
use crate::rewards::{CoinGainedEvent, CoinSource};

const COIN_SIZE: Vec2 = Vec2::new(0.5, 0.5);
const COIN_COLOR: Color = Color::srgb(0.95, 0.8, 0.2);

/// Seeded source for cosmetic randomness so replays shatter identically.
#[derive(Resource, Debug)]
pub struct BlockRng(pub ChaCha8Rng);

pub(crate) fn handle_block_strikes(
    mut commands: Commands,
    mut strikes: MessageReader<BlockStruck>,
    mut coins: MessageWriter<CoinGainedEvent>,
    mut rng: ResMut<BlockRng>,
    bricks: Query<(&Transform, &Shatterable, Option<&Sprite>, Has<BrickShatter>)>,
    poppers: Query<(&Transform, &CoinPopper)>,
) {
    // Commands are deferred, so repeated strikes within one read are
    // filtered here rather than through `Has<BrickShatter>`.
    let mut breaking: Vec<Entity> = Vec::new();

    for strike in strikes.read() {
        match strike.kind {
            Interactable::Breakable if breaking.contains(&strike.block) => {}
            Interactable::Breakable => match bricks.get(strike.block) {
                Ok((_, _, _, true)) => {}
                Ok((transform, shatterable, sprite, false)) => {
                    let size = sprite
                        .and_then(|sprite| sprite.custom_size)
                        .unwrap_or(Vec2::ONE)
                        .extend(1.0)
                        * transform.scale;
                    breaking.push(strike.block);
                    start_shatter(
                        &mut commands,
                        &mut rng.0,
                        strike.block,
                        transform.translation,
                        size,
                        shatterable,
                    );
                }
                Err(_) => {
                    warn!(
                        "Breakable block {:?} has no shatter settings, removing it outright",
                        strike.block
                    );
                    breaking.push(strike.block);
                    commands.entity(strike.block).despawn();
                }
            },
            Interactable::Reward => {
                coins.write(CoinGainedEvent {
                    amount: 1,
                    source: CoinSource::RewardBlock,
                });
                if let Ok((transform, popper)) = poppers.get(strike.block) {
                    let pop = CoinPop::from_block(transform.translation, &popper.settings);
                    commands.spawn((
                        Sprite::from_color(COIN_COLOR, COIN_SIZE),
                        Transform::from_translation(pop.start()),
                        pop,
                    ));
                }
            }
            Interactable::Plain => {}
        }
    }
}

fn start_shatter(
    commands: &mut Commands,
    rng: &mut ChaCha8Rng,
    brick: Entity,
    center: Vec3,
    brick_size: Vec3,
    shatterable: &Shatterable,
) {
    let mut shatter = BrickShatter::plan(center, brick_size, &shatterable.settings, || {
        if rng.random_bool(0.5) { -1.0 } else { 1.0 }
    });

    let chunk_size = brick_size.truncate() * 0.5;
    for index in 0..shatter.chunks().len() {
        let start = shatter.chunks()[index].start;
        let chunk = commands
            .spawn((
                ShatterChunk,
                Sprite::from_color(Color::srgb(0.6, 0.3, 0.15), chunk_size),
                Transform::from_translation(start),
            ))
            .id();
        shatter.attach_chunk(index, chunk);
    }

    info!("Brick {:?} breaking into {} chunks", brick, shatter.chunks().len());

    // Hidden at once; the collider stays until the effect completes.
    commands.entity(brick).insert((shatter, Visibility::Hidden));
}

pub(crate) fn tick_brick_shatters(
    time: Res<Time>,
    mut commands: Commands,
    mut shatters: Query<(Entity, &mut BrickShatter)>,
    mut chunks: Query<&mut Transform, With<ShatterChunk>>,
) {
    let dt = time.delta_secs();

    for (brick, mut shatter) in &mut shatters {
        match shatter.advance(dt) {
            TweenState::Running => {
                for track in shatter.chunks() {
                    let Some(entity) = track.entity else {
                        continue;
                    };
                    if let Ok(mut transform) = chunks.get_mut(entity) {
                        transform.translation = shatter.chunk_position(track);
                        transform.rotate_z(shatter.spin_step(track, dt));
                    }
                }
            }
            TweenState::Complete => {
                for entity in shatter.chunks().iter().filter_map(|track| track.entity) {
                    commands.entity(entity).despawn();
                }
                commands.entity(brick).despawn();
                info!("Brick {:?} removed", brick);
            }
        }
    }
}

pub(crate) fn tick_coin_pops(
    time: Res<Time>,
    mut commands: Commands,
    mut pops: Query<(Entity, &mut CoinPop, &mut Transform)>,
) {
    let dt = time.delta_secs();

    for (entity, mut pop, mut transform) in &mut pops {
        match pop.advance(dt) {
            TweenState::Running => {
                transform.translation = pop.position();
                transform.rotate_z(pop.spin_step(dt));
            }
            TweenState::Complete => {
                commands.entity(entity).despawn();
            }
        }
    }
}
