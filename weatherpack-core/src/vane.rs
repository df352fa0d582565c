//! Wind vane sample ring
//!
//! Holds the most recent raw ADC readings of the vane. One sample is pushed
//! on every [`WeatherStation::update`](crate::WeatherStation::update) call,
//! whether or not an aggregation pass runs, and the whole ring is handed to
//! the direction resolver once per interval.

use crate::buffer::CircularBuffer;
use crate::constants::buffers::VANE_SAMPLE_CAPACITY;
use crate::errors::{WeatherError, WeatherResult};

/// Raw vane reading from a 10-bit ADC (0..=1023)
pub type VaneSample = u16;

/// Last [`VANE_SAMPLE_CAPACITY`] vane readings
#[derive(Debug, Clone, Default)]
pub struct VaneSampleRing {
    samples: CircularBuffer<VaneSample, VANE_SAMPLE_CAPACITY>,
}

impl VaneSampleRing {
    /// Empty ring; every slot reads as zero until written
    pub fn new() -> Self {
        Self {
            samples: CircularBuffer::new(),
        }
    }

    /// Store a sample, overwriting the oldest once full
    pub fn push(&mut self, raw: VaneSample) {
        self.samples.push(raw);
    }

    /// Every slot, oldest to newest by cursor position
    pub fn snapshot(&self) -> [VaneSample; VANE_SAMPLE_CAPACITY] {
        self.samples.snapshot()
    }

    /// Every slot in storage order, for order-independent consumers
    pub fn samples(&self) -> &[VaneSample; VANE_SAMPLE_CAPACITY] {
        self.samples.slots()
    }

    /// Samples pushed so far, capped at capacity
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether nothing has been pushed
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Whether the ring has been filled once
    pub fn is_primed(&self) -> bool {
        self.samples.is_full()
    }

    /// `Ok` once primed, otherwise `StaleInput` with the current fill
    ///
    /// A stale ring still resolves: unwritten slots read as zero and land in
    /// the lowest-voltage sector, biasing the first intervals toward ESE.
    pub fn check_primed(&self) -> WeatherResult<()> {
        if self.is_primed() {
            Ok(())
        } else {
            Err(WeatherError::StaleInput {
                required: VANE_SAMPLE_CAPACITY,
                available: self.len(),
            })
        }
    }
}
