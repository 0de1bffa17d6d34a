//! Scoped periodic tick source
//!
//! A `Ticker` exists only while a timer is running. It is polled with the
//! current instant and reports how many whole intervals have passed since
//! the last poll. Dropping it is the cancellation.

use std::time::{Duration, Instant};

/// Periodic tick source polled from the UI loop
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    next_due: Instant,
}

impl Ticker {
    /// Arm a ticker whose first tick falls one interval after `now`
    pub fn arm(interval: Duration, now: Instant) -> Self {
        let interval = interval.max(Duration::from_millis(1));
        Self {
            interval,
            next_due: now + interval,
        }
    }

    /// Number of ticks that came due up to `now`, consuming them
    pub fn drain(&mut self, now: Instant) -> u32 {
        if now < self.next_due {
            return 0;
        }
        let behind = now.duration_since(self.next_due).as_nanos() / self.interval.as_nanos();
        let due = u32::try_from(behind + 1).unwrap_or(u32::MAX);
        self.next_due = self
            .interval
            .checked_mul(due)
            .and_then(|ahead| self.next_due.checked_add(ahead))
            .unwrap_or(now + self.interval);
        due
    }

    /// Time left until the next tick, zero if one is already due
    pub fn until_next(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }
}
