//! Blocks domain: brick shatter effect.
//!
//! A broken brick is hidden at once and replaced by 4 (or 8) chunks that
//! fly outward along a parabolic arc while spinning. When the effect
//! completes the chunks and the brick are despawned.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::blocks::tween::{TweenClock, TweenState};

const OFFSETS_4: [Vec3; 4] = [
    Vec3::new(-0.25, 0.25, 0.0),
    Vec3::new(0.25, 0.25, 0.0),
    Vec3::new(-0.25, -0.25, 0.0),
    Vec3::new(0.25, -0.25, 0.0),
];

const OFFSETS_8: [Vec3; 8] = [
    Vec3::new(-0.25, 0.25, -0.15),
    Vec3::new(0.25, 0.25, -0.15),
    Vec3::new(-0.25, -0.25, -0.15),
    Vec3::new(0.25, -0.25, -0.15),
    Vec3::new(-0.25, 0.25, 0.15),
    Vec3::new(0.25, 0.25, 0.15),
    Vec3::new(-0.25, -0.25, 0.15),
    Vec3::new(0.25, -0.25, 0.15),
];

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ShatterSettings {
    pub duration: f32,
    pub up_height: f32,
    pub out_distance: f32,
    /// Degrees per second.
    pub spin_speed: f32,
    /// 8 adds a front/back layer; anything else means 4.
    pub chunks: u8,
}

impl Default for ShatterSettings {
    fn default() -> Self {
        Self {
            duration: 0.35,
            up_height: 1.2,
            out_distance: 0.6,
            spin_speed: 540.0,
            chunks: 4,
        }
    }
}

impl ShatterSettings {
    fn offsets(&self) -> &'static [Vec3] {
        if self.chunks == 8 { &OFFSETS_8 } else { &OFFSETS_4 }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChunkTrack {
    pub entity: Option<Entity>,
    pub start: Vec3,
    pub out_dir: Vec3,
    /// +1 or -1.
    pub spin_dir: f32,
}

/// Running shatter effect, attached to the brick being broken.
#[derive(Component, Debug, Clone)]
pub struct BrickShatter {
    settings: ShatterSettings,
    clock: TweenClock,
    chunks: Vec<ChunkTrack>,
}

impl BrickShatter {
    /// Lay out chunk starting points inside a brick of `brick_size` centered
    /// at `center`. `spin` is called once per chunk for its spin direction.
    pub fn plan(
        center: Vec3,
        brick_size: Vec3,
        settings: &ShatterSettings,
        mut spin: impl FnMut() -> f32,
    ) -> Self {
        let chunks = settings
            .offsets()
            .iter()
            .map(|offset| {
                let start = center + *offset * brick_size;
                let spread = Vec3::new(start.x - center.x, 0.0, start.z - center.z);
                let out_dir = if spread.length_squared() > 0.0001 {
                    spread.normalize()
                } else {
                    Vec3::X
                };
                ChunkTrack {
                    entity: None,
                    start,
                    out_dir,
                    spin_dir: spin().signum(),
                }
            })
            .collect();

        Self {
            settings: settings.clone(),
            clock: TweenClock::new(settings.duration),
            chunks,
        }
    }

    pub fn chunks(&self) -> &[ChunkTrack] {
        &self.chunks
    }

    pub fn attach_chunk(&mut self, index: usize, entity: Entity) {
        if let Some(track) = self.chunks.get_mut(index) {
            track.entity = Some(entity);
        }
    }

    pub fn advance(&mut self, dt: f32) -> TweenState {
        self.clock.tick(dt)
    }

    pub fn state(&self) -> TweenState {
        self.clock.state()
    }

    /// Out along `out_dir`, up and back down along a parabola peaking at
    /// half time.
    pub fn chunk_position(&self, track: &ChunkTrack) -> Vec3 {
        let u = self.clock.progress();
        let arc = 4.0 * u * (1.0 - u);
        track.start
            + track.out_dir * (self.settings.out_distance * u)
            + Vec3::Y * (self.settings.up_height * arc)
    }

    /// Rotation to apply to a chunk this tick, in radians.
    pub fn spin_step(&self, track: &ChunkTrack, dt: f32) -> f32 {
        (track.spin_dir * self.settings.spin_speed * dt).to_radians()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(settings: &ShatterSettings) -> BrickShatter {
        BrickShatter::plan(Vec3::new(2.0, 3.0, 0.0), Vec3::ONE, settings, || 1.0)
    }

    #[test]
    fn test_plan_spreads_chunks_sideways() {
        let shatter = plan(&ShatterSettings::default());
        assert_eq!(shatter.chunks().len(), 4);
        for track in shatter.chunks() {
            assert_eq!(track.out_dir.y, 0.0);
            assert!((track.out_dir.length() - 1.0).abs() < 1e-5);
            assert_eq!(track.out_dir.x.signum(), (track.start.x - 2.0).signum());
        }
    }

    #[test]
    fn test_eight_chunks_when_configured() {
        let settings = ShatterSettings {
            chunks: 8,
            ..Default::default()
        };
        assert_eq!(plan(&settings).chunks().len(), 8);
    }

    #[test]
    fn test_chunk_offsets_scale_with_brick_size() {
        let shatter = BrickShatter::plan(
            Vec3::ZERO,
            Vec3::new(2.0, 4.0, 1.0),
            &ShatterSettings::default(),
            || -1.0,
        );
        let first = &shatter.chunks()[0];
        assert_eq!(first.start, Vec3::new(-0.5, 1.0, 0.0));
        assert_eq!(first.spin_dir, -1.0);
    }

    #[test]
    fn test_arc_peaks_mid_flight_and_lands_out() {
        let settings = ShatterSettings {
            duration: 1.0,
            ..Default::default()
        };
        let mut shatter = plan(&settings);
        let track = shatter.chunks()[1].clone();

        assert_eq!(shatter.chunk_position(&track), track.start);

        shatter.advance(0.5);
        let mid = shatter.chunk_position(&track);
        assert!((mid.y - (track.start.y + 1.2)).abs() < 1e-5);

        shatter.advance(0.5);
        let end = shatter.chunk_position(&track);
        assert!((end.y - track.start.y).abs() < 1e-5);
        assert!((end - track.start - track.out_dir * 0.6).length() < 1e-5);
        assert_eq!(shatter.state(), TweenState::Running);
        assert_eq!(shatter.advance(0.016), TweenState::Complete);
    }
}
