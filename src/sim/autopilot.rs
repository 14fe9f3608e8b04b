//! Idle/demo controller
//!
//! Plays the game without a human: jumps whenever the lead bird is
//! dropping toward the lower edge of the gap it has to fly through next.

use super::state::GameState;
use crate::assets::AssetBundle;

/// Clearance kept above the lower pipe (or the ground)
pub const SAFETY_MARGIN: f32 = 40.0;

/// y the lead bird must stay above: the top of the next lower pipe segment,
/// or the ground when no pipe is ahead
pub fn target_floor(state: &GameState, assets: &AssetBundle) -> Option<f32> {
    let bird = state.birds.first()?;
    let pipe_width = assets.pipe_bottom().width() as f32;
    let floor = state
        .pipes
        .iter()
        .find(|pipe| pipe.x + pipe_width > bird.x())
        .map(|pipe| pipe.bottom())
        .unwrap_or(state.ground.y);
    Some(floor)
}

/// Whether the autopilot wants a jump this tick
pub fn should_jump(state: &GameState, assets: &AssetBundle) -> bool {
    let Some(bird) = state.birds.first() else {
        return false;
    };
    if bird.is_rising() {
        return false;
    }
    let Some(floor) = target_floor(state, assets) else {
        return false;
    };
    bird.y + bird.height(assets) >= floor - SAFETY_MARGIN
}
