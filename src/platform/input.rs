//! Input events and sources

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// A discrete input event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Close the game now
    Quit,
    /// Make every live bird jump
    Jump,
    /// Anything else the host reports; ignored by the game
    Other,
}

/// Pollable queue of input events
pub trait InputSource {
    /// Take every event that arrived since the last call
    fn drain(&mut self) -> Vec<InputEvent>;
}

/// Source that never produces events
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInput;

impl InputSource for NoInput {
    fn drain(&mut self) -> Vec<InputEvent> {
        Vec::new()
    }
}

/// Replays one batch of events per drain; empty once the script runs out
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    batches: VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    pub fn new(batches: impl IntoIterator<Item = Vec<InputEvent>>) -> Self {
        Self {
            batches: batches.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.batches.len()
    }
}

impl InputSource for ScriptedInput {
    fn drain(&mut self) -> Vec<InputEvent> {
        self.batches.pop_front().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_input_replays_in_order() {
        let mut input = ScriptedInput::new([vec![InputEvent::Jump], vec![], vec![InputEvent::Quit]]);
        assert_eq!(input.drain(), vec![InputEvent::Jump]);
        assert!(input.drain().is_empty());
        assert_eq!(input.drain(), vec![InputEvent::Quit]);
        assert_eq!(input.remaining(), 0);
        assert!(input.drain().is_empty());
    }
}
