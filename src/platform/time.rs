//! Tick pacing

use std::time::{Duration, Instant};

/// Blocks the caller until the next tick is due
pub trait Clock {
    fn wait_next_tick(&mut self);
}

/// Sleeps so that ticks are released at a fixed rate
#[derive(Debug)]
pub struct FixedRateClock {
    interval: Duration,
    last: Option<Instant>,
}

impl FixedRateClock {
    pub fn new(rate_hz: u32) -> Self {
        Self {
            interval: Duration::from_secs(1) / rate_hz.max(1),
            last: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Clock for FixedRateClock {
    fn wait_next_tick(&mut self) {
        if let Some(last) = self.last {
            let elapsed = last.elapsed();
            if elapsed < self.interval {
                std::thread::sleep(self.interval - elapsed);
            }
        }
        self.last = Some(Instant::now());
    }
}

/// Releases ticks immediately; counts how many were requested
#[derive(Debug, Clone, Copy, Default)]
pub struct UnpacedClock {
    pub ticks: u64,
}

impl Clock for UnpacedClock {
    fn wait_next_tick(&mut self) {
        self.ticks += 1;
    }
}
