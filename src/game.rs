//! Fixed-rate game loop
//!
//! Ties the simulation to its collaborators: waits on the clock, drains
//! input, ticks, renders, and reports when the session ends.

use serde::Serialize;

use crate::assets::AssetBundle;
use crate::platform::{Clock, InputEvent, InputSource, Surface};
use crate::renderer;
use crate::settings::Settings;
use crate::sim::{GameState, TickInput, TickOutcome, autopilot, tick};

/// Result of one loop iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Ticked and rendered; birds remain
    Continue,
    /// Quit was requested; nothing was ticked or drawn
    Quit,
    /// The last bird is gone
    GameOver { score: u64 },
}

/// Why [`Game::run`] returned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LoopExit {
    Quit,
    GameOver,
    /// `Settings::max_ticks` reached with birds still alive
    TickLimit,
}

/// Final numbers of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub exit: LoopExit,
    pub seed: u64,
    pub score: u64,
    pub ticks: u64,
}

/// Game instance holding all state and collaborators
pub struct Game<S, I, C> {
    settings: Settings,
    assets: AssetBundle,
    state: GameState,
    surface: S,
    input: I,
    clock: C,
}

impl<S: Surface, I: InputSource, C: Clock> Game<S, I, C> {
    pub fn new(settings: Settings, assets: AssetBundle, surface: S, input: I, clock: C) -> Self {
        let seed = settings.resolve_seed();
        let state = GameState::new(seed, &assets);
        log::info!(
            "Session started with seed {} at {} Hz (autopilot: {})",
            seed,
            settings.tick_rate_hz,
            settings.autopilot
        );
        Self {
            settings,
            assets,
            state,
            surface,
            input,
            clock,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Throw the current session away and start over
    pub fn restart(&mut self, seed: u64) {
        self.state = GameState::new(seed, &self.assets);
        log::info!("Game restarted with seed: {}", seed);
    }

    /// Run one iteration: wait, read input, tick, draw
    pub fn run_frame(&mut self) -> FrameOutcome {
        self.clock.wait_next_tick();

        let mut input = TickInput::default();
        for event in self.input.drain() {
            match event {
                InputEvent::Quit => {
                    log::info!("Quit requested at tick {}", self.state.time_ticks);
                    return FrameOutcome::Quit;
                }
                InputEvent::Jump => input.jump = true,
                InputEvent::Other => {}
            }
        }

        if self.settings.autopilot && autopilot::should_jump(&self.state, &self.assets) {
            input.jump = true;
        }

        let outcome = tick(&mut self.state, &self.assets, &input);
        renderer::draw_frame(&mut self.surface, &mut self.state, &self.assets);

        match outcome {
            TickOutcome::Running => FrameOutcome::Continue,
            TickOutcome::GameOver { score } => FrameOutcome::GameOver { score },
        }
    }

    /// Loop until quit, game over or the tick limit
    pub fn run(&mut self) -> SessionSummary {
        let exit = loop {
            match self.run_frame() {
                FrameOutcome::Quit => break LoopExit::Quit,
                FrameOutcome::GameOver { .. } => break LoopExit::GameOver,
                FrameOutcome::Continue => {
                    if let Some(max) = self.settings.max_ticks {
                        if self.state.time_ticks >= max {
                            break LoopExit::TickLimit;
                        }
                    }
                }
            }
        };

        let summary = self.summary(exit);
        log::info!(
            "Session ended ({:?}): score {} after {} ticks",
            summary.exit,
            summary.score,
            summary.ticks
        );
        summary
    }

    fn summary(&self, exit: LoopExit) -> SessionSummary {
        SessionSummary {
            exit,
            seed: self.state.seed,
            score: self.state.score,
            ticks: self.state.time_ticks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{NoInput, RecordingSurface, ScriptedInput, UnpacedClock};

    fn settings(autopilot: bool, max_ticks: Option<u64>) -> Settings {
        Settings {
            seed: Some(2024),
            autopilot,
            paced: false,
            max_ticks,
            ..Settings::default()
        }
    }

    #[test]
    fn test_quit_skips_tick_and_render() {
        let input = ScriptedInput::new([vec![InputEvent::Jump, InputEvent::Quit]]);
        let mut game = Game::new(
            settings(false, None),
            AssetBundle::placeholder(),
            RecordingSurface::new(),
            input,
            UnpacedClock::default(),
        );

        assert_eq!(game.run_frame(), FrameOutcome::Quit);
        assert_eq!(game.state().time_ticks, 0);
        assert_eq!(game.state().birds[0].y, 350.0);
        assert_eq!(game.surface().frames_presented(), 0);
    }

    #[test]
    fn test_jump_event_reaches_birds() {
        let input = ScriptedInput::new([vec![InputEvent::Other, InputEvent::Jump]]);
        let mut game = Game::new(
            settings(false, None),
            AssetBundle::placeholder(),
            RecordingSurface::new(),
            input,
            UnpacedClock::default(),
        );

        assert_eq!(game.run_frame(), FrameOutcome::Continue);
        assert_eq!(game.state().birds[0].y, 339.0);
        assert_eq!(game.surface().frames_presented(), 1);
    }

    #[test]
    fn test_run_ends_on_game_over() {
        let mut game = Game::new(
            settings(false, None),
            AssetBundle::placeholder(),
            RecordingSurface::new(),
            NoInput,
            UnpacedClock::default(),
        );

        let summary = game.run();
        assert_eq!(summary.exit, LoopExit::GameOver);
        assert_eq!(summary.score, 0);
        assert_eq!(summary.seed, 2024);
        // Free fall from y=350 reaches the ground on tick 23
        assert_eq!(summary.ticks, 23);
        // The final frame is still drawn
        assert_eq!(game.surface().frames_presented(), 23);
        assert_eq!(game.surface().last_text(), Some("Score: 0"));
        assert!(game.state().birds.is_empty());
    }

    #[test]
    fn test_quit_mid_session() {
        let input = ScriptedInput::new([vec![], vec![], vec![InputEvent::Quit]]);
        let mut game = Game::new(
            settings(false, None),
            AssetBundle::placeholder(),
            RecordingSurface::new(),
            input,
            UnpacedClock::default(),
        );

        let summary = game.run();
        assert_eq!(summary.exit, LoopExit::Quit);
        assert_eq!(summary.ticks, 2);
        assert_eq!(game.surface().frames_presented(), 2);
    }

    #[test]
    fn test_tick_limit() {
        let mut game = Game::new(
            settings(true, Some(50)),
            AssetBundle::placeholder(),
            RecordingSurface::new(),
            NoInput,
            UnpacedClock::default(),
        );

        let summary = game.run();
        assert_eq!(summary.exit, LoopExit::TickLimit);
        assert_eq!(summary.ticks, 50);
        assert!(!game.state().birds.is_empty());
    }

    #[test]
    fn test_restart_resets_session() {
        let mut game = Game::new(
            settings(false, None),
            AssetBundle::placeholder(),
            RecordingSurface::new(),
            NoInput,
            UnpacedClock::default(),
        );
        game.run();
        assert!(game.state().is_over());

        game.restart(7);
        assert!(!game.state().is_over());
        assert_eq!(game.state().seed, 7);
        assert_eq!(game.state().time_ticks, 0);
        assert_eq!(game.state().birds.len(), 1);
        assert_eq!(game.run_frame(), FrameOutcome::Continue);
    }
}
