//! Pipe Dash - A side-scrolling pipe-dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, game state)
//! - `mask`: Per-pixel opacity masks for exact overlap tests
//! - `assets`: Sprite bundle handed to the simulation and renderer
//! - `renderer`: Draw pass over an abstract surface
//! - `platform`: Surface/input/clock abstraction
//! - `game`: Fixed-rate loop driver
//! - `settings`: Data-driven configuration

pub mod assets;
pub mod error;
pub mod game;
pub mod mask;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use assets::{AssetBundle, Sprite, SpriteId};
pub use error::{AssetError, ConfigError};
pub use game::{Game, LoopExit, SessionSummary};
pub use mask::Mask;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (ticks per second)
    pub const TICK_RATE_HZ: u32 = 30;

    /// Play area dimensions
    pub const SCREEN_WIDTH: f32 = 500.0;
    pub const SCREEN_HEIGHT: f32 = 800.0;

    /// Horizontal scroll speed shared by pipes and ground (px/tick)
    pub const SCROLL_SPEED: f32 = 5.0;

    /// Bird spawn position
    pub const BIRD_START_X: f32 = 100.0;
    pub const BIRD_START_Y: f32 = 350.0;

    /// Upward impulse applied by a jump (negative = up)
    pub const JUMP_VELOCITY: f32 = -10.5;
    /// Quadratic coefficient of the fall arc (px/tick²)
    pub const GRAVITY: f32 = 1.5;
    /// Largest downward displacement in one tick
    pub const MAX_FALL_PER_TICK: f32 = 16.0;
    /// Extra lift subtracted while rising
    pub const RISE_BOOST: f32 = 2.0;

    /// Nose-up tilt (degrees)
    pub const MAX_ROTATION: f32 = 25.0;
    /// Nose-down tilt the decrement stops at (degrees)
    pub const MIN_ROTATION: f32 = -90.0;
    /// Tilt lost per falling tick (degrees)
    pub const ROTATION_SPEED: f32 = 20.0;
    /// Bird keeps its nose up until it drops this far below the jump height
    pub const TILT_BAND: f32 = 50.0;
    /// At or below this angle the wing animation freezes
    pub const DIVE_ANGLE: f32 = -80.0;
    /// Render calls per animation frame
    pub const ANIMATION_TIME: u32 = 5;

    /// Vertical opening between top and bottom pipe
    pub const PIPE_GAP: f32 = 200.0;
    /// Gap height is sampled from this half-open range
    pub const GAP_HEIGHT_MIN: i32 = 50;
    pub const GAP_HEIGHT_MAX: i32 = 450;
    /// X of the pipe present at session start
    pub const FIRST_PIPE_X: f32 = 700.0;
    /// X at which follow-up pipes appear
    pub const PIPE_SPAWN_X: f32 = 600.0;

    /// Top edge of the ground strip
    pub const GROUND_Y: f32 = 730.0;

    /// Distance of the score text from the top-right corner
    pub const SCORE_MARGIN: f32 = 10.0;
}
