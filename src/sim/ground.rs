//! Looping ground strip
//!
//! Two copies of the ground tile scroll left side by side. When one has
//! slid completely off the left edge it jumps to the right of the other.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::assets::SpriteId;
use crate::consts::SCROLL_SPEED;
use crate::platform::Surface;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ground {
    /// Top edge of the strip; birds touching it are out
    pub y: f32,
    /// Tile width
    pub width: f32,
    pub x1: f32,
    pub x2: f32,
}

impl Ground {
    pub fn new(y: f32, width: f32) -> Self {
        Self {
            y,
            width,
            x1: 0.0,
            x2: width,
        }
    }

    pub fn advance(&mut self) {
        self.x1 -= SCROLL_SPEED;
        self.x2 -= SCROLL_SPEED;

        if self.x1 + self.width < 0.0 {
            self.x1 = self.x2 + self.width;
        }
        if self.x2 + self.width < 0.0 {
            self.x2 = self.x1 + self.width;
        }
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.blit(SpriteId::Ground, Vec2::new(self.x1, self.y));
        surface.blit(SpriteId::Ground, Vec2::new(self.x2, self.y));
    }

    /// Whether the two tiles together cover `[from, to)` without a gap
    pub fn covers(&self, from: f32, to: f32) -> bool {
        let (a, b) = if self.x1 <= self.x2 {
            (self.x1, self.x2)
        } else {
            (self.x2, self.x1)
        };
        let joined = b <= a + self.width;
        let end = if joined { b + self.width } else { a + self.width };
        a <= from && end >= to
    }
}
