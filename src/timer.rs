use std::time::{Duration, Instant};

/// Fixed-period tick scheduler.
///
/// Callers pass `now` explicitly so the schedule can be driven from tests.
#[derive(Debug, Clone, Copy)]
pub struct TickTimer {
    interval: Duration,
    last_tick: Instant,
}

impl TickTimer {
    #[must_use]
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last_tick: now,
        }
    }

    /// Returns true when a full period has elapsed since the last tick.
    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.last_tick) >= self.interval
    }

    /// Time left before the next tick is due, zero when overdue.
    #[must_use]
    pub fn time_until_due(&self, now: Instant) -> Duration {
        self.interval
            .saturating_sub(now.saturating_duration_since(self.last_tick))
    }

    /// Records that a tick ran at `now`.
    pub fn mark_ticked(&mut self, now: Instant) {
        self.last_tick = now;
    }

    /// Starts a fresh period from `now`, dropping any pending tick.
    pub fn restart(&mut self, now: Instant) {
        self.last_tick = now;
    }
}
