//! Sprite bundle
//!
//! Images are decoded by whoever hosts the game; this module only holds the
//! decoded RGBA data and the collision masks derived from it. The bundle is
//! built once at startup and passed by reference to the simulation and the
//! renderer.

use serde::{Deserialize, Serialize};

use crate::error::AssetError;
use crate::mask::Mask;

/// Number of bird animation frames
pub const BIRD_FRAME_COUNT: usize = 3;

/// Identifies a sprite when asking a surface to draw it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteId {
    /// Bird animation frame (0..BIRD_FRAME_COUNT)
    Bird(usize),
    /// Upper pipe segment (mirrored top-to-bottom)
    PipeTop,
    /// Lower pipe segment
    PipeBottom,
    Ground,
    Background,
}

/// Decoded RGBA image plus its opacity mask
#[derive(Debug, Clone)]
pub struct Sprite {
    name: &'static str,
    width: u32,
    height: u32,
    rgba: Vec<u8>,
    mask: Mask,
}

impl Sprite {
    /// Wrap a row-major RGBA8 buffer
    pub fn from_rgba(
        name: &'static str,
        width: u32,
        height: u32,
        rgba: Vec<u8>,
    ) -> Result<Self, AssetError> {
        if width == 0 || height == 0 {
            return Err(AssetError::EmptyImage { name });
        }
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or(AssetError::TooLarge {
                name,
                width,
                height,
            })?;
        if rgba.len() != expected {
            return Err(AssetError::BufferSize {
                name,
                expected,
                actual: rgba.len(),
            });
        }
        let alpha: Vec<u8> = rgba.chunks_exact(4).map(|px| px[3]).collect();
        let mask = Mask::from_alpha(width, height, &alpha);
        Ok(Self {
            name,
            width,
            height,
            rgba,
            mask,
        })
    }

    /// Opaque single-colour rectangle
    pub fn solid(name: &'static str, width: u32, height: u32, color: [u8; 3]) -> Self {
        let rgba = [color[0], color[1], color[2], 255]
            .repeat(width as usize * height as usize);
        Self {
            name,
            width,
            height,
            rgba,
            mask: Mask::filled(width, height),
        }
    }

    /// Opaque ellipse inscribed in a transparent rectangle
    pub fn ellipse(name: &'static str, width: u32, height: u32, color: [u8; 3]) -> Self {
        let rx = width as f32 / 2.0;
        let ry = height as f32 / 2.0;
        let mut rgba = Vec::with_capacity(width as usize * height as usize * 4);
        let mut mask = Mask::new(width, height);
        for y in 0..height {
            for x in 0..width {
                let dx = (x as f32 + 0.5 - rx) / rx;
                let dy = (y as f32 + 0.5 - ry) / ry;
                let inside = dx * dx + dy * dy <= 1.0;
                let alpha = if inside { 255 } else { 0 };
                rgba.extend_from_slice(&[color[0], color[1], color[2], alpha]);
                mask.set(x, y, inside);
            }
        }
        Self {
            name,
            width,
            height,
            rgba,
            mask,
        }
    }

    /// Copy mirrored top-to-bottom (pixels and mask)
    pub fn flip_vertical(&self, name: &'static str) -> Self {
        let row = (self.width * 4) as usize;
        let rgba = self
            .rgba
            .chunks(row)
            .rev()
            .flat_map(|r| r.iter().copied())
            .collect();
        Self {
            name,
            width: self.width,
            height: self.height,
            rgba,
            mask: self.mask.flip_vertical(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major RGBA8 pixels, for surfaces that upload or rasterize them
    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    #[inline]
    pub fn mask(&self) -> &Mask {
        &self.mask
    }
}

/// Every image the game needs, loaded up front
#[derive(Debug, Clone)]
pub struct AssetBundle {
    bird_frames: [Sprite; BIRD_FRAME_COUNT],
    pipe_top: Sprite,
    pipe_bottom: Sprite,
    ground: Sprite,
    background: Sprite,
}

impl AssetBundle {
    /// Assemble a bundle; the top pipe is derived by mirroring `pipe`
    pub fn new(
        bird_frames: [Sprite; BIRD_FRAME_COUNT],
        pipe: Sprite,
        ground: Sprite,
        background: Sprite,
    ) -> Result<Self, AssetError> {
        let (w, h) = (bird_frames[0].width, bird_frames[0].height);
        if let Some(frame) = bird_frames.iter().find(|f| f.width != w || f.height != h) {
            return Err(AssetError::FrameSizeMismatch { name: frame.name });
        }
        let pipe_top = pipe.flip_vertical("pipe_top");
        Ok(Self {
            bird_frames,
            pipe_top,
            pipe_bottom: pipe,
            ground,
            background,
        })
    }

    /// Procedural stand-ins with the dimensions of the original 2x-scaled art
    /// (bird 68x48, pipe 104x640, ground 672x224, background 576x1024)
    pub fn placeholder() -> Self {
        let bird_frames = [
            Sprite::ellipse("bird_0", 68, 48, [250, 200, 40]),
            Sprite::ellipse("bird_1", 68, 48, [245, 190, 35]),
            Sprite::ellipse("bird_2", 68, 48, [240, 180, 30]),
        ];
        let pipe = Sprite::solid("pipe", 104, 640, [90, 190, 40]);
        let pipe_top = pipe.flip_vertical("pipe_top");
        Self {
            bird_frames,
            pipe_top,
            pipe_bottom: pipe,
            ground: Sprite::solid("ground", 672, 224, [220, 215, 150]),
            background: Sprite::solid("background", 576, 1024, [80, 190, 200]),
        }
    }

    pub fn sprite(&self, id: SpriteId) -> &Sprite {
        match id {
            SpriteId::Bird(i) => &self.bird_frames[i % BIRD_FRAME_COUNT],
            SpriteId::PipeTop => &self.pipe_top,
            SpriteId::PipeBottom => &self.pipe_bottom,
            SpriteId::Ground => &self.ground,
            SpriteId::Background => &self.background,
        }
    }

    pub fn bird_frame(&self, frame: usize) -> &Sprite {
        self.sprite(SpriteId::Bird(frame))
    }

    pub fn pipe_top(&self) -> &Sprite {
        &self.pipe_top
    }

    pub fn pipe_bottom(&self) -> &Sprite {
        &self.pipe_bottom
    }

    pub fn ground(&self) -> &Sprite {
        &self.ground
    }
}
