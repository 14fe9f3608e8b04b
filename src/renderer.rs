//! Frame rendering
//!
//! Draws a game state onto any [`Surface`]. Order matters: later calls
//! paint over earlier ones.

use glam::Vec2;

use crate::assets::{AssetBundle, SpriteId};
use crate::consts::SCORE_MARGIN;
use crate::platform::Surface;
use crate::sim::GameState;

/// Size of the axis-aligned box enclosing a `size` rectangle rotated by
/// `angle` degrees
#[inline]
pub fn rotated_bounds(size: Vec2, angle: f32) -> Vec2 {
    let (sin, cos) = angle.to_radians().sin_cos();
    let (sin, cos) = (sin.abs(), cos.abs());
    Vec2::new(size.x * cos + size.y * sin, size.x * sin + size.y * cos)
}

/// Score label shown in the top-right corner
pub fn score_text(score: u64) -> String {
    format!("Score: {}", score)
}

/// Draw one complete frame and present it
///
/// Takes the state mutably because drawing a bird advances its wing
/// animation.
pub fn draw_frame<S: Surface + ?Sized>(surface: &mut S, state: &mut GameState, assets: &AssetBundle) {
    surface.blit(SpriteId::Background, Vec2::ZERO);

    for bird in &mut state.birds {
        bird.render(surface, assets);
    }
    for pipe in &state.pipes {
        pipe.render(surface);
    }

    let text = score_text(state.score);
    let x = surface.size().x - SCORE_MARGIN - surface.text_width(&text);
    surface.draw_text(&text, Vec2::new(x, SCORE_MARGIN));

    state.ground.render(surface);
    surface.present();
}
