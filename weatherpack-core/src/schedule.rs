//! Aggregation timer
//!
//! Two states, polled from the host loop:
//!
//! ```text
//!            now > deadline
//!   Idle ─────────────────────→ Firing
//!    ↑                            │ deadline = now + 1000 ms
//!    └────────────────────────────┘ (one aggregation pass)
//! ```
//!
//! The next deadline is measured from the poll that fired, not from the old
//! deadline, so a late poll stretches that interval instead of queueing
//! catch-up passes.
//!
//! An unarmed timer fires on its first poll, whatever the clock reads. That
//! includes `now == 0`, where a strict `now > 0` comparison against a zero
//! deadline would wait for the next millisecond. Starting from a zero
//! deadline is not an option here: with wrap-safe comparison, a clock that
//! boots past 2^31 ms would see that deadline as in the future.

use core::convert::Infallible;

use crate::constants::time::AGGREGATION_INTERVAL_MS;
use crate::time::{is_after, Millis};

/// Fixed-interval, non-blocking deadline timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregationTimer {
    next_deadline: Option<Millis>,
}

impl AggregationTimer {
    /// Unarmed timer; the first poll fires
    pub const fn new() -> Self {
        Self { next_deadline: None }
    }

    /// `Ok` when the deadline has passed (and re-arm), otherwise `WouldBlock`
    ///
    /// ```rust
    /// use weatherpack_core::schedule::AggregationTimer;
    ///
    /// let mut timer = AggregationTimer::new();
    /// assert!(timer.wait(10).is_ok());
    /// assert_eq!(timer.wait(500), Err(nb::Error::WouldBlock));
    /// assert!(timer.wait(1011).is_ok());
    /// ```
    pub fn wait(&mut self, now: Millis) -> nb::Result<(), Infallible> {
        match self.next_deadline {
            Some(deadline) if !is_after(now, deadline) => Err(nb::Error::WouldBlock),
            _ => {
                self.next_deadline = Some(now.wrapping_add(AGGREGATION_INTERVAL_MS));
                Ok(())
            }
        }
    }

    /// Deadline the timer is waiting for, `None` before the first fire
    pub fn next_deadline(&self) -> Option<Millis> {
        self.next_deadline
    }
}

impl Default for AggregationTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_poll_fires_and_arms() {
        let mut timer = AggregationTimer::new();
        assert_eq!(timer.next_deadline(), None);

        assert_eq!(timer.wait(250), Ok(()));
        assert_eq!(timer.next_deadline(), Some(1250));
    }

    #[test]
    fn unarmed_timer_fires_at_time_zero() {
        let mut timer = AggregationTimer::new();
        assert_eq!(timer.wait(0), Ok(()));
        assert_eq!(timer.next_deadline(), Some(1000));
    }

    #[test]
    fn unarmed_timer_fires_past_half_range() {
        let mut timer = AggregationTimer::new();
        assert_eq!(timer.wait(0x8000_0001), Ok(()));
    }

    #[test]
    fn fires_strictly_after_deadline() {
        let mut timer = AggregationTimer::new();
        timer.wait(0).unwrap();

        assert_eq!(timer.wait(999), Err(nb::Error::WouldBlock));
        assert_eq!(timer.wait(1000), Err(nb::Error::WouldBlock));
        assert_eq!(timer.wait(1001), Ok(()));
        assert_eq!(timer.next_deadline(), Some(2001));
    }

    #[test]
    fn late_poll_does_not_catch_up() {
        let mut timer = AggregationTimer::new();
        timer.wait(0).unwrap();

        // Three intervals late: one pass, then a full interval from now
        assert_eq!(timer.wait(3500), Ok(()));
        assert_eq!(timer.wait(3600), Err(nb::Error::WouldBlock));
        assert_eq!(timer.next_deadline(), Some(4500));
    }

    #[test]
    fn survives_millisecond_wrap() {
        let mut timer = AggregationTimer::new();
        timer.wait(u32::MAX - 200).unwrap();

        assert_eq!(timer.next_deadline(), Some(799));
        assert_eq!(timer.wait(100), Err(nb::Error::WouldBlock));
        assert_eq!(timer.wait(800), Ok(()));
    }
}
