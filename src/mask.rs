//! Per-pixel opacity masks
//!
//! A mask records which pixels of a sprite are solid. Two masks overlap when
//! at least one pixel is solid in both after shifting one by an integer
//! offset. This is the ground truth for bird/pipe collisions.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Alpha values above this count as solid
pub const ALPHA_THRESHOLD: u8 = 127;

/// Row-major bitmap of solid pixels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl Mask {
    /// Empty (fully transparent) mask
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits: vec![false; width as usize * height as usize],
        }
    }

    /// Fully solid mask
    pub fn filled(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits: vec![true; width as usize * height as usize],
        }
    }

    /// Build from a row-major alpha channel (one byte per pixel)
    pub fn from_alpha(width: u32, height: u32, alpha: &[u8]) -> Self {
        debug_assert_eq!(alpha.len(), width as usize * height as usize);
        Self {
            width,
            height,
            bits: alpha.iter().map(|&a| a > ALPHA_THRESHOLD).collect(),
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether pixel (x, y) is solid; out of range is transparent
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return false;
        }
        self.bits[y as usize * self.width as usize + x as usize]
    }

    pub fn set(&mut self, x: u32, y: u32, solid: bool) {
        if x < self.width && y < self.height {
            self.bits[y as usize * self.width as usize + x as usize] = solid;
        }
    }

    /// Number of solid pixels
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Copy mirrored top-to-bottom
    pub fn flip_vertical(&self) -> Self {
        let w = self.width as usize;
        let bits = self
            .bits
            .chunks(w.max(1))
            .rev()
            .flat_map(|row| row.iter().copied())
            .collect();
        Self {
            width: self.width,
            height: self.height,
            bits,
        }
    }

    /// First pixel (in this mask's coordinates) solid in both masks, with
    /// `other` placed at `offset` relative to this mask's top-left corner.
    ///
    /// Scans row by row, so the returned point is the top-most, then
    /// left-most, overlapping pixel.
    pub fn overlap(&self, other: &Mask, offset: IVec2) -> Option<IVec2> {
        // Intersection of the two bounding boxes, in self's coordinates
        let x0 = offset.x.max(0);
        let y0 = offset.y.max(0);
        let x1 = (offset.x + other.width as i32).min(self.width as i32);
        let y1 = (offset.y + other.height as i32).min(self.height as i32);

        if x0 >= x1 || y0 >= y1 {
            return None;
        }

        for y in y0..y1 {
            for x in x0..x1 {
                if self.get(x, y) && other.get(x - offset.x, y - offset.y) {
                    return Some(IVec2::new(x, y));
                }
            }
        }
        None
    }

    /// Convenience wrapper over [`Mask::overlap`]
    #[inline]
    pub fn overlaps(&self, other: &Mask, offset: IVec2) -> bool {
        self.overlap(other, offset).is_some()
    }
}
