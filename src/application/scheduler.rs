//! Fixed-interval tick scheduling.
//!
//! The scheduler fires at most once per poll. Intervals missed while the
//! loop was busy (or the window hidden) are dropped rather than queued.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Simulation tick period
pub const TICK_INTERVAL: Duration = Duration::from_millis(30);

/// Source of monotonic time, measured from an arbitrary origin
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Wall clock backed by [`Instant`]
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Hand-driven clock for tests and headless runs
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

#[derive(Debug, Clone)]
pub struct Scheduler {
    interval: Duration,
    last_fire: Duration,
}

impl Scheduler {
    /// Start a schedule whose first tick is due one interval after `now`
    pub fn new(interval: Duration, now: Duration) -> Self {
        Self { interval, last_fire: now }
    }

    /// Returns true when a tick is due, and restarts the interval from `now`
    pub fn poll(&mut self, now: Duration) -> bool {
        if now.saturating_sub(self.last_fire) < self.interval {
            return false;
        }
        self.last_fire = now;
        true
    }
}
