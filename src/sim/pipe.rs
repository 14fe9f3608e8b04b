//! Pipe obstacles
//!
//! A pipe is a pair of solid segments, one hanging from the top and one
//! rising from the bottom, with a fixed-size gap between them. The gap
//! height is rolled once when the pipe is created.

use glam::{IVec2, Vec2};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::bird::Bird;
use crate::assets::{AssetBundle, SpriteId};
use crate::consts::*;
use crate::platform::Surface;

/// A pipe entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pipe {
    pub id: u32,
    /// Left edge of both segments
    pub x: f32,
    gap_height: i32,
    top: f32,
    bottom: f32,
    passed: bool,
}

impl Pipe {
    /// Create a pipe with a random gap height in `[GAP_HEIGHT_MIN, GAP_HEIGHT_MAX)`
    pub fn new<R: Rng>(id: u32, x: f32, assets: &AssetBundle, rng: &mut R) -> Self {
        let gap_height = rng.random_range(GAP_HEIGHT_MIN..GAP_HEIGHT_MAX);
        Self::with_gap(id, x, gap_height, assets)
    }

    /// Create a pipe with a chosen gap height
    pub fn with_gap(id: u32, x: f32, gap_height: i32, assets: &AssetBundle) -> Self {
        let top = gap_height as f32 - assets.pipe_top().height() as f32;
        let bottom = gap_height as f32 + PIPE_GAP;
        Self {
            id,
            x,
            gap_height,
            top,
            bottom,
            passed: false,
        }
    }

    /// y of the gap's upper edge (bottom of the top segment)
    #[inline]
    pub fn gap_height(&self) -> i32 {
        self.gap_height
    }

    /// y where the top segment sprite is drawn
    #[inline]
    pub fn top(&self) -> f32 {
        self.top
    }

    /// y where the bottom segment sprite is drawn
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.bottom
    }

    /// Whether a bird has already scored on this pipe
    #[inline]
    pub fn passed(&self) -> bool {
        self.passed
    }

    pub fn advance(&mut self) {
        self.x -= SCROLL_SPEED;
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.blit(SpriteId::PipeTop, Vec2::new(self.x, self.top));
        surface.blit(SpriteId::PipeBottom, Vec2::new(self.x, self.bottom));
    }

    /// Pixel-exact overlap between the bird and either segment
    pub fn check_collision(&self, bird: &Bird, assets: &AssetBundle) -> bool {
        let bird_mask = bird.collision_mask(assets);
        let bird_y = bird.y.round() as i32;
        let dx = (self.x - bird.x()).round() as i32;

        let top_offset = IVec2::new(dx, self.top as i32 - bird_y);
        let bottom_offset = IVec2::new(dx, self.bottom as i32 - bird_y);

        bird_mask.overlaps(assets.pipe_top().mask(), top_offset)
            || bird_mask.overlaps(assets.pipe_bottom().mask(), bottom_offset)
    }

    /// Latches to true the first time the bird is right of the pipe's left
    /// edge, and stays true afterwards
    pub fn has_been_passed_by(&mut self, bird: &Bird) -> bool {
        if !self.passed && bird.x() > self.x {
            self.passed = true;
        }
        self.passed
    }

    /// Right edge has scrolled to or past the left edge of the screen
    pub fn is_off_screen(&self, assets: &AssetBundle) -> bool {
        self.x + assets.pipe_top().width() as f32 <= 0.0
    }
}
