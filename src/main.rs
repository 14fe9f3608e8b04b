//! Pipe Dash entry point
//!
//! Headless native runner: plays one session against an in-memory surface
//! and prints the session summary as JSON. Settings come from the file named
//! by `PIPE_DASH_CONFIG`, or defaults.

use std::process::ExitCode;

use pipe_dash::platform::{Clock, FixedRateClock, NoInput, RecordingSurface, UnpacedClock};
use pipe_dash::{AssetBundle, ConfigError, Game, Settings};

const CONFIG_ENV: &str = "PIPE_DASH_CONFIG";

fn load_settings() -> Result<Settings, ConfigError> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => Settings::load(path),
        None => {
            log::info!("{} not set, using default settings", CONFIG_ENV);
            Ok(Settings::default())
        }
    }
}

fn play<C: Clock>(settings: Settings, clock: C) -> ExitCode {
    let mut game = Game::new(
        settings,
        AssetBundle::placeholder(),
        RecordingSurface::new(),
        NoInput,
        clock,
    );
    let summary = game.run();
    log::info!("Presented {} frames", game.surface().frames_presented());

    match serde_json::to_string(&summary) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Failed to encode summary: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Pipe Dash (native) starting...");

    let settings = match load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if settings.paced {
        let clock = FixedRateClock::new(settings.tick_rate_hz);
        play(settings, clock)
    } else {
        play(settings, UnpacedClock::default())
    }
}
