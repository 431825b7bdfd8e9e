//! Fixed-rate tick driver.
//!
//! The driver turns elapsed wall-clock time into a number of simulation ticks
//! at a fixed rate. Hosts call [`TickDriver::run`] once per frame; nothing in
//! the simulation keeps its own timer.

use std::time::Duration;

use super::stats::GenerationSummary;
use super::world::World;

/// Upper bound on ticks executed for a single `advance` call, so a long stall
/// does not freeze the host while it catches up.
pub const DEFAULT_MAX_CATCH_UP: u32 = 2_000;

/// Converts elapsed time into ticks at a fixed rate.
#[derive(Debug, Clone)]
pub struct TickDriver {
    interval: Duration,
    accumulator: Duration,
    running: bool,
    max_catch_up: u32,
}

impl TickDriver {
    /// Creates a stopped driver ticking `ticks_per_second` times per second.
    pub fn new(ticks_per_second: u32) -> Self {
        Self {
            interval: interval_for(ticks_per_second),
            accumulator: Duration::ZERO,
            running: false,
            max_catch_up: DEFAULT_MAX_CATCH_UP,
        }
    }

    /// Limits how many ticks one `advance` call may produce.
    pub fn with_max_catch_up(mut self, max_catch_up: u32) -> Self {
        self.max_catch_up = max_catch_up.max(1);
        self
    }

    /// Time between two ticks.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Changes the rate, keeping any accumulated time.
    pub fn set_rate(&mut self, ticks_per_second: u32) {
        self.interval = interval_for(ticks_per_second);
    }

    /// Starts producing ticks.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stops producing ticks and drops any accumulated time.
    pub fn stop(&mut self) {
        self.running = false;
        self.accumulator = Duration::ZERO;
    }

    /// Whether the driver is producing ticks.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Adds `elapsed` and returns how many ticks are now due.
    ///
    /// Time beyond the catch-up limit is discarded.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if !self.running {
            return 0;
        }

        self.accumulator += elapsed;
        let due = self.accumulator.as_nanos() / self.interval.as_nanos();
        let ticks = due.min(u128::from(self.max_catch_up)) as u32;

        if due > u128::from(self.max_catch_up) {
            log::debug!(
                "tick driver dropping {} ticks of backlog",
                due - u128::from(self.max_catch_up)
            );
            self.accumulator = Duration::ZERO;
        } else {
            self.accumulator -= self.interval * ticks;
        }
        ticks
    }

    /// Advances `world` by the ticks due after `elapsed`.
    ///
    /// Returns the summaries of generations that ended during this call.
    pub fn run(&mut self, world: &mut World, elapsed: Duration) -> Vec<GenerationSummary> {
        (0..self.advance(elapsed))
            .filter_map(|_| world.tick().finished)
            .collect()
    }
}

fn interval_for(ticks_per_second: u32) -> Duration {
    Duration::from_secs(1) / ticks_per_second.max(1)
}
