//! Wind speed and gust tracking
//!
//! Once per aggregation interval the anemometer count is converted to a
//! speed, pushed into a 30-slot gust ring, and the gust maximum is updated
//! from the ring.
//!
//! ## Gust Semantics
//!
//! The gust value is a latched record, not a sliding maximum: it is raised
//! to the largest value in the ring but never lowered, so a fast gust stays
//! reported after it has rolled out of the ring. Hosts that want a true
//! 30-second maximum can read [`WindTracker::window_max`].

use crate::buffer::CircularBuffer;
use crate::constants::buffers::GUST_HISTORY_CAPACITY;
use crate::constants::sensors::{ANEMOMETER_SPEED_DENOMINATOR, ANEMOMETER_SPEED_NUMERATOR};

/// Convert one interval's anemometer closures to speed units
///
/// `pulses × 14920 / 1000`, truncated, saturating at `u32::MAX`.
pub fn pulses_to_speed(pulses: u32) -> u32 {
    let speed = u64::from(pulses) * u64::from(ANEMOMETER_SPEED_NUMERATOR)
        / u64::from(ANEMOMETER_SPEED_DENOMINATOR);
    u32::try_from(speed).unwrap_or(u32::MAX)
}

/// Current speed, gust history and latched gust maximum
#[derive(Debug, Clone, Default)]
pub struct WindTracker {
    gusts: CircularBuffer<u32, GUST_HISTORY_CAPACITY>,
    current: u32,
    gust_max: u32,
}

impl WindTracker {
    /// Tracker with an all-zero history
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert and record one interval's pulse count, returning the speed
    pub fn record_pulses(&mut self, pulses: u32) -> u32 {
        let speed = pulses_to_speed(pulses);
        self.record_speed(speed);
        speed
    }

    /// Record one interval's speed and raise the gust latch if needed
    pub fn record_speed(&mut self, speed: u32) {
        self.current = speed;
        self.gusts.push(speed);
        self.gust_max = self.gust_max.max(self.gusts.max());
    }

    /// Speed from the most recent interval
    pub fn current(&self) -> u32 {
        self.current
    }

    /// Highest speed seen since construction
    pub fn gust(&self) -> u32 {
        self.gust_max
    }

    /// Highest speed still inside the gust ring
    pub fn window_max(&self) -> u32 {
        self.gusts.max()
    }

    /// Speeds in the gust ring, oldest first
    pub fn history(&self) -> [u32; GUST_HISTORY_CAPACITY] {
        self.gusts.snapshot()
    }
}
