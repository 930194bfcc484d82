//! Frame-stepped sprite animation for looping block art.
//!
//! A flip-book image is a vertical strip of square frames, frame 0 on top.
//! Playback moves the sprite's source rect down the strip.

use bevy::asset::RenderAssetUsages;
use bevy::image::ImageSampler;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FlipbookSettings {
    pub frames: u32,
    pub fps: f32,
    /// Edge length of one square frame in the strip.
    pub frame_pixels: u32,
}

impl Default for FlipbookSettings {
    fn default() -> Self {
        Self {
            frames: 5,
            fps: 10.0,
            frame_pixels: 16,
        }
    }
}

/// Loops through `frames` stacked vertically in one texture, one frame
/// every `1 / fps` seconds.
#[derive(Component, Debug, Clone)]
pub struct Flipbook {
    frames: u32,
    frame_pixels: u32,
    frame_duration: f32,
    timer: f32,
    frame: u32,
}

impl Flipbook {
    pub fn new(settings: &FlipbookSettings) -> Self {
        let frames = settings.frames.max(1);
        if frames != settings.frames {
            warn!("Flipbook needs at least one frame, using 1");
        }
        let frame_duration = if settings.fps > 0.0 {
            1.0 / settings.fps
        } else {
            warn!("Flipbook fps {} is not positive, holding first frame", settings.fps);
            f32::INFINITY
        };
        Self {
            frames,
            frame_pixels: settings.frame_pixels.max(1),
            frame_duration,
            timer: 0.0,
            frame: 0,
        }
    }

    /// Advance by `dt`. Steps at most one frame per call and resets the
    /// timer when it does. Returns true on a frame change.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.timer += dt;
        if self.timer < self.frame_duration {
            return false;
        }
        self.timer = 0.0;
        self.frame = (self.frame + 1) % self.frames;
        true
    }

    pub fn current_frame(&self) -> u32 {
        self.frame
    }

    /// Vertical texture offset (bottom-up UV) that shows the current frame
    /// when frame 0 sits at the top of the strip.
    pub fn uv_offset_y(&self) -> f32 {
        1.0 - (self.frame + 1) as f32 / self.frames as f32
    }

    /// Pixel size of the whole strip.
    pub fn strip_size(&self) -> UVec2 {
        UVec2::new(self.frame_pixels, self.frame_pixels * self.frames)
    }

    /// Source rect of the current frame, in image pixels (top-down).
    pub fn frame_rect(&self) -> Rect {
        let strip = self.strip_size().as_vec2();
        let frame_height = strip.y / self.frames as f32;
        // The UV offset is the frame's bottom edge measured from the strip
        // bottom; the frame's top edge in image rows sits one frame above it.
        let top = ((1.0 - self.uv_offset_y()) * strip.y - frame_height).round().max(0.0);
        Rect::new(0.0, top, strip.x, top + frame_height)
    }
}

/// RGBA8 pixels for a strip of square frames that pulse in brightness,
/// brightest on frame 0, each with a darker one-pixel border.
pub fn shimmer_strip_pixels(frames: u32, frame_pixels: u32, base: [u8; 3]) -> Vec<u8> {
    let frames = frames.max(1);
    let size = frame_pixels.max(1);
    let mut data = Vec::with_capacity((size * size * frames * 4) as usize);

    for frame in 0..frames {
        let phase = frame as f32 / frames as f32 * std::f32::consts::TAU;
        let brightness = 0.75 + 0.25 * phase.cos();
        for row in 0..size {
            for column in 0..size {
                let border = row == 0 || column == 0 || row == size - 1 || column == size - 1;
                let scale = if border { brightness * 0.5 } else { brightness };
                for channel in base {
                    data.push((channel as f32 * scale).round() as u8);
                }
                data.push(u8::MAX);
            }
        }
    }
    data
}

/// Build the strip image a `Flipbook` with these settings plays through.
pub fn shimmer_strip(settings: &FlipbookSettings, base: Color) -> Image {
    let frames = settings.frames.max(1);
    let size = settings.frame_pixels.max(1);
    let [r, g, b, _] = base.to_srgba().to_u8_array();

    let mut image = Image::new(
        Extent3d {
            width: size,
            height: size * frames,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        shimmer_strip_pixels(frames, size, [r, g, b]),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::default(),
    );
    // Linear filtering would bleed neighbouring frames into the edges
    image.sampler = ImageSampler::nearest();
    image
}

pub(crate) fn tick_flipbooks(time: Res<Time>, mut query: Query<(&mut Flipbook, &mut Sprite)>) {
    let dt = time.delta_secs();

    for (mut flipbook, mut sprite) in &mut query {
        if flipbook.tick(dt) {
            sprite.rect = Some(flipbook.frame_rect());
        }
    }
}
