//! Platform abstraction layer
//!
//! The simulation never talks to a window, keyboard or timer directly. It
//! goes through these traits:
//! - `Surface` / `TextRenderer`: drawing and presenting frames
//! - `InputSource`: discrete input events
//! - `Clock`: fixed-rate tick pacing

pub mod input;
pub mod surface;
pub mod time;

pub use input::{InputEvent, InputSource, NoInput, ScriptedInput};
pub use surface::{DrawCall, RecordingSurface, Surface, TextRenderer};
pub use time::{Clock, FixedRateClock, UnpacedClock};
