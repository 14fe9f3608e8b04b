//! The player's bird
//!
//! The bird never moves horizontally; the world scrolls past it. Vertical
//! motion follows a quadratic arc measured from the last jump.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::assets::{AssetBundle, SpriteId};
use crate::consts::*;
use crate::mask::Mask;
use crate::platform::Surface;
use crate::renderer::rotated_bounds;

/// Vertical displacement for one tick, `ticks` after a jump with `velocity`
///
/// Falls are capped at `MAX_FALL_PER_TICK`; upward moves get an extra
/// `RISE_BOOST` of lift.
#[inline]
pub fn displacement(ticks: u32, velocity: f32) -> f32 {
    let t = ticks as f32;
    let shift = GRAVITY * t * t + velocity * t;
    if shift > MAX_FALL_PER_TICK {
        MAX_FALL_PER_TICK
    } else if shift < 0.0 {
        shift - RISE_BOOST
    } else {
        shift
    }
}

/// A bird entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bird {
    pub id: u32,
    x: f32,
    pub y: f32,
    /// Velocity set by the last jump
    pub velocity: f32,
    /// Ticks elapsed since the last jump (time in the arc formula)
    pub ticks_since_jump: u32,
    /// y at the last jump; the bird stays nose-up near this height
    pub jump_height: f32,
    /// Tilt in degrees (positive = nose up)
    pub angle: f32,
    /// Selected animation frame
    pub frame: usize,
    /// Render calls into the current wing cycle
    pub frame_counter: u32,
    /// Displacement applied by the last `advance`
    pub last_displacement: f32,
}

impl Bird {
    pub fn new(id: u32, x: f32, y: f32) -> Self {
        Self {
            id,
            x,
            y,
            velocity: 0.0,
            ticks_since_jump: 0,
            jump_height: y,
            angle: 0.0,
            frame: 0,
            frame_counter: 0,
            last_displacement: 0.0,
        }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn jump(&mut self) {
        self.velocity = JUMP_VELOCITY;
        self.ticks_since_jump = 0;
        self.jump_height = self.y;
    }

    /// Step one tick along the jump arc and update the tilt
    pub fn advance(&mut self) {
        self.ticks_since_jump += 1;
        let shift = displacement(self.ticks_since_jump, self.velocity);
        self.y += shift;
        self.last_displacement = shift;

        if shift < 0.0 || self.y < self.jump_height + TILT_BAND {
            if self.angle < MAX_ROTATION {
                self.angle = MAX_ROTATION;
            }
        } else if self.angle > MIN_ROTATION {
            // Guarded, not clamped: the last step can land one
            // ROTATION_SPEED below MIN_ROTATION (-95 with the defaults).
            self.angle -= ROTATION_SPEED;
        }
    }

    /// Still moving upward on the current arc
    #[inline]
    pub fn is_rising(&self) -> bool {
        self.last_displacement < 0.0
    }

    /// Pick the wing frame for this render call
    fn animate(&mut self) {
        self.frame_counter += 1;
        let c = self.frame_counter;

        if c < ANIMATION_TIME {
            self.frame = 0;
        } else if c < ANIMATION_TIME * 2 {
            self.frame = 1;
        } else if c < ANIMATION_TIME * 3 {
            self.frame = 2;
        } else if c < ANIMATION_TIME * 4 {
            self.frame = 1;
        } else if c > ANIMATION_TIME * 4 {
            self.frame = 0;
            self.frame_counter = 0;
        }

        // Wings stay level in a steep dive
        if self.angle <= DIVE_ANGLE {
            self.frame = 1;
            self.frame_counter = ANIMATION_TIME * 2;
        }
    }

    /// Advance the wing animation and draw the tilted sprite centered on
    /// its untilted bounding box
    pub fn render<S: Surface + ?Sized>(&mut self, surface: &mut S, assets: &AssetBundle) {
        self.animate();
        let sprite = assets.bird_frame(self.frame);
        let size = Vec2::new(sprite.width() as f32, sprite.height() as f32);
        let center = Vec2::new(self.x, self.y) + size / 2.0;
        let rotated = rotated_bounds(size, self.angle);
        surface.blit_rotated(SpriteId::Bird(self.frame), center - rotated / 2.0, self.angle);
    }

    /// Opacity mask of the current frame
    pub fn collision_mask<'a>(&self, assets: &'a AssetBundle) -> &'a Mask {
        assets.bird_frame(self.frame).mask()
    }

    /// Height of the current frame in pixels
    pub fn height(&self, assets: &AssetBundle) -> f32 {
        assets.bird_frame(self.frame).height() as f32
    }
}
