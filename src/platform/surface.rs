//! Drawing surface abstraction

use glam::Vec2;

use crate::assets::SpriteId;
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Renders short strings (the score) onto the surface
pub trait TextRenderer {
    /// Width in pixels the text would occupy
    fn text_width(&self, text: &str) -> f32;
    /// Draw text with its top-left corner at `pos`
    fn draw_text(&mut self, text: &str, pos: Vec2);
}

/// Fixed-size drawable the renderer blits sprites onto
pub trait Surface: TextRenderer {
    /// Drawable size in pixels
    fn size(&self) -> Vec2;
    /// Draw a sprite with its top-left corner at `pos`
    fn blit(&mut self, sprite: SpriteId, pos: Vec2);
    /// Draw a sprite rotated counter-clockwise by `angle` degrees.
    /// `pos` is the top-left corner of the rotated image's bounding box.
    fn blit_rotated(&mut self, sprite: SpriteId, pos: Vec2, angle: f32);
    /// Show the finished frame
    fn present(&mut self);
}

/// One recorded drawing operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Blit {
        sprite: SpriteId,
        pos: Vec2,
    },
    BlitRotated {
        sprite: SpriteId,
        pos: Vec2,
        angle: f32,
    },
    Text {
        text: String,
        pos: Vec2,
    },
}

/// Approximate glyph advance used by [`RecordingSurface`]
pub const RECORDED_GLYPH_WIDTH: f32 = 25.0;

/// Surface that keeps the draw calls instead of rasterizing them
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pending: Vec<DrawCall>,
    last_frame: Vec<DrawCall>,
    frames_presented: u64,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw calls of the most recently presented frame
    pub fn last_frame(&self) -> &[DrawCall] {
        &self.last_frame
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Score string drawn in the last frame, if any
    pub fn last_text(&self) -> Option<&str> {
        self.last_frame.iter().rev().find_map(|call| match call {
            DrawCall::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl TextRenderer for RecordingSurface {
    fn text_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * RECORDED_GLYPH_WIDTH
    }

    fn draw_text(&mut self, text: &str, pos: Vec2) {
        self.pending.push(DrawCall::Text {
            text: text.to_string(),
            pos,
        });
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Vec2 {
        Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }

    fn blit(&mut self, sprite: SpriteId, pos: Vec2) {
        self.pending.push(DrawCall::Blit { sprite, pos });
    }

    fn blit_rotated(&mut self, sprite: SpriteId, pos: Vec2, angle: f32) {
        self.pending.push(DrawCall::BlitRotated { sprite, pos, angle });
    }

    fn present(&mut self) {
        self.last_frame = std::mem::take(&mut self.pending);
        self.frames_presented += 1;
    }
}
