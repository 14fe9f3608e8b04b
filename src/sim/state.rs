//! Game state and core simulation types
//!
//! Everything a session needs between ticks lives here. The RNG is seeded
//! so the same seed and inputs always produce the same pipe layout.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::bird::Bird;
use super::ground::Ground;
use super::pipe::Pipe;
use crate::assets::AssetBundle;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    /// At least one bird is alive
    Running,
    /// Every bird is gone; ticking is a no-op
    GameOver,
}

/// Complete session state
///
/// Serializes to a snapshot for logs and determinism checks. The RNG is left
/// out of the snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    #[serde(skip)]
    pub rng: Pcg32,
    pub phase: GamePhase,
    /// Pipes cleared
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Live birds (sorted by id)
    pub birds: Vec<Bird>,
    /// Live pipes, oldest (leftmost) first
    pub pipes: Vec<Pipe>,
    pub ground: Ground,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new session with the given seed
    pub fn new(seed: u64, assets: &AssetBundle) -> Self {
        Self::with_rng(seed, Pcg32::seed_from_u64(seed), assets)
    }

    /// Create a session drawing pipe gaps from `rng`
    pub fn with_rng(seed: u64, rng: Pcg32, assets: &AssetBundle) -> Self {
        let mut state = Self {
            seed,
            rng,
            phase: GamePhase::Running,
            score: 0,
            time_ticks: 0,
            birds: Vec::new(),
            pipes: Vec::new(),
            ground: Ground::new(GROUND_Y, assets.ground().width() as f32),
            next_id: 1,
        };

        state.spawn_bird(BIRD_START_X, BIRD_START_Y);
        state.spawn_pipe(FIRST_PIPE_X, assets);

        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add a bird; returns its ID
    pub fn spawn_bird(&mut self, x: f32, y: f32) -> u32 {
        let id = self.next_entity_id();
        self.birds.push(Bird::new(id, x, y));
        id
    }

    /// Add a pipe with a random gap at the right end of the queue
    pub fn spawn_pipe(&mut self, x: f32, assets: &AssetBundle) -> u32 {
        let id = self.next_entity_id();
        let pipe = Pipe::new(id, x, assets, &mut self.rng);
        log::debug!("Spawned pipe {} at x={} gap={}", id, x, pipe.gap_height());
        self.pipes.push(pipe);
        id
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// JSON snapshot of the state
    pub fn snapshot_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_session() {
        let assets = AssetBundle::placeholder();
        let state = GameState::new(1, &assets);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.birds.len(), 1);
        assert_eq!(state.birds[0].x(), BIRD_START_X);
        assert_eq!(state.birds[0].y, BIRD_START_Y);
        assert_eq!(state.pipes.len(), 1);
        assert_eq!(state.pipes[0].x, FIRST_PIPE_X);
        assert_eq!(state.ground.y, GROUND_Y);
        assert_eq!(state.ground.width, 672.0);
    }

    #[test]
    fn test_entity_ids_unique() {
        let assets = AssetBundle::placeholder();
        let mut state = GameState::new(1, &assets);
        let a = state.spawn_bird(100.0, 200.0);
        let b = state.spawn_pipe(600.0, &assets);
        assert_ne!(a, b);
        assert_eq!(state.birds[0].id, 1);
        assert_eq!(state.pipes[0].id, 2);
        assert_eq!(a, 3);
        assert_eq!(b, 4);
    }

    #[test]
    fn test_same_seed_same_layout() {
        let assets = AssetBundle::placeholder();
        let mut a = GameState::new(99, &assets);
        let mut b = GameState::new(99, &assets);
        for _ in 0..10 {
            a.spawn_pipe(600.0, &assets);
            b.spawn_pipe(600.0, &assets);
        }
        assert_eq!(a.snapshot_json().unwrap(), b.snapshot_json().unwrap());
    }

    #[test]
    fn test_snapshot_contains_score() {
        let assets = AssetBundle::placeholder();
        let mut state = GameState::new(5, &assets);
        state.score = 3;
        let json: serde_json::Value = serde_json::from_str(&state.snapshot_json().unwrap()).unwrap();
        assert_eq!(json["score"], 3);
        assert_eq!(json["phase"], "Running");
        assert!(json.get("rng").is_none());
    }
}
