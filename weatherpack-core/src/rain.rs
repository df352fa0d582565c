//! Rain accumulation
//!
//! Each bucket tip adds [`RAIN_PER_TIP`] to a running total. The total is
//! cumulative for the lifetime of the accumulator: reading it does not reset
//! it. Hosts that report per-period rainfall keep the previous reading and
//! subtract.

use crate::constants::sensors::RAIN_PER_TIP;
use crate::errors::{WeatherError, WeatherResult};

/// Lifetime rain total
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RainAccumulator {
    total: u32,
}

impl RainAccumulator {
    /// Accumulator at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one interval's tips, returning the increment
    ///
    /// The total saturates at `u32::MAX`; reaching it is reported as
    /// [`WeatherError::Overflow`] while the saturated total is kept.
    pub fn record_tips(&mut self, tips: u32) -> WeatherResult<u32> {
        let step = tips
            .checked_mul(RAIN_PER_TIP)
            .and_then(|increment| Some((increment, self.total.checked_add(increment)?)));

        match step {
            Some((increment, total)) => {
                self.total = total;
                Ok(increment)
            }
            None => {
                self.total = u32::MAX;
                Err(WeatherError::Overflow { what: "rain total" })
            }
        }
    }

    /// Rain since construction
    pub fn total(&self) -> u32 {
        self.total
    }
}
