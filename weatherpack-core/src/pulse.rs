//! Debounced Pulse Counters Shared With Interrupt Context
//!
//! ## Overview
//!
//! The rain gauge and the anemometer are reed switches: every bucket tip or
//! cup revolution closes a contact and raises an edge interrupt. The
//! interrupt handler records the edge here; the cooperative context drains
//! the count once per aggregation interval.
//!
//! ```text
//! Edge ISR (preempts)                  update() (cooperative)
//!      ↓                                      ↓
//!  debounce check                             ↓
//!      ↓                                      ↓
//!  fetch_add(1) ──→  pending_count  ←──  swap(0)
//! ```
//!
//! ## Concurrency Contract
//!
//! Each channel is two atomics. `pending_count` is written by both sides, but
//! only through single read-modify-write instructions, so an increment can
//! never be lost in the middle of a drain. `last_edge_us` is touched only by
//! the edge handler. Nothing here blocks or disables interrupts.
//!
//! ## Binding to Interrupts
//!
//! Hardware vectors cannot carry an instance pointer, so the counters live in
//! a `static` and the trampoline calls a free function:
//!
//! ```rust
//! use weatherpack_core::pulse::{on_rain_edge, PulseCounters};
//! use weatherpack_core::time::MockTimeSource;
//!
//! static COUNTERS: PulseCounters = PulseCounters::new();
//! static CLOCK: MockTimeSource = MockTimeSource::new(1000);
//!
//! // #[interrupt]
//! fn gpio_rain() {
//!     on_rain_edge(&COUNTERS, &CLOCK);
//! }
//!
//! gpio_rain();
//! assert_eq!(COUNTERS.rain.drain(), 1);
//! ```

use core::sync::atomic::{AtomicU32, Ordering};

use crate::constants::time::{DEBOUNCE_TIME_MS, US_PER_MS};
use crate::time::{elapsed, Micros, TimeSource};

/// Which physical pulse sensor an edge came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PulseSource {
    /// Tipping-bucket rain gauge
    Rain,
    /// Cup anemometer
    WindSpeed,
}

/// One debounced, drainable edge counter
///
/// Counts saturate at `u32::MAX` rather than wrap; with one drain per second
/// that ceiling is unreachable by a physical switch.
#[derive(Debug)]
pub struct PulseChannel {
    /// Timestamp of the last accepted edge (µs)
    last_edge_us: AtomicU32,

    /// Accepted edges since the last drain
    pending_count: AtomicU32,

    /// Minimum spacing between accepted edges (µs)
    debounce_us: u32,
}

impl PulseChannel {
    /// Create a channel with a debounce window in microseconds
    pub const fn new(debounce_us: u32) -> Self {
        Self {
            last_edge_us: AtomicU32::new(0),
            pending_count: AtomicU32::new(0),
            debounce_us,
        }
    }

    /// Record an edge stamped at `now_us`
    ///
    /// Accepted when at least the debounce window has passed since the last
    /// accepted edge; otherwise it is bounce and ignored. Suppressed edges do
    /// not move the window. Returns whether the edge was counted.
    ///
    /// Called from interrupt context.
    pub fn on_edge(&self, now_us: Micros) -> bool {
        // Relaxed is enough: each atomic is independent, no data is published through it
        let last = self.last_edge_us.load(Ordering::Relaxed);
        if elapsed(last, now_us) < self.debounce_us {
            return false;
        }

        // fetch_update never fails here: the closure always returns Some
        let _ = self
            .pending_count
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |count| {
                Some(count.saturating_add(1))
            });
        self.last_edge_us.store(now_us, Ordering::Relaxed);
        true
    }

    /// Take the accumulated count and reset it to zero in one step
    ///
    /// Called from the cooperative context only.
    pub fn drain(&self) -> u32 {
        self.pending_count.swap(0, Ordering::AcqRel)
    }

    /// Current count without draining
    pub fn pending(&self) -> u32 {
        self.pending_count.load(Ordering::Relaxed)
    }

    /// Debounce window in microseconds
    pub fn debounce_us(&self) -> u32 {
        self.debounce_us
    }
}

/// The two pulse channels of the weather package
///
/// Const-constructible so it can live in a `static` shared between the
/// interrupt trampolines and the [`WeatherStation`](crate::WeatherStation).
#[derive(Debug)]
pub struct PulseCounters {
    /// Rain gauge bucket tips
    pub rain: PulseChannel,
    /// Anemometer closures
    pub wind_speed: PulseChannel,
}

impl PulseCounters {
    /// Counters with the default 15 ms debounce window
    pub const fn new() -> Self {
        Self::with_debounce_ms(DEBOUNCE_TIME_MS)
    }

    /// Counters with a custom debounce window
    pub const fn with_debounce_ms(debounce_ms: u32) -> Self {
        let debounce_us = debounce_ms.saturating_mul(US_PER_MS);
        Self {
            rain: PulseChannel::new(debounce_us),
            wind_speed: PulseChannel::new(debounce_us),
        }
    }

    /// Channel for a given sensor
    pub fn channel(&self, source: PulseSource) -> &PulseChannel {
        match source {
            PulseSource::Rain => &self.rain,
            PulseSource::WindSpeed => &self.wind_speed,
        }
    }

    /// Record an edge on `source` at `now_us`
    pub fn on_edge(&self, source: PulseSource, now_us: Micros) -> bool {
        self.channel(source).on_edge(now_us)
    }

    /// Drain the count for `source`
    pub fn drain(&self, source: PulseSource) -> u32 {
        self.channel(source).drain()
    }
}

impl Default for PulseCounters {
    fn default() -> Self {
        Self::new()
    }
}

/// Rain gauge interrupt body: stamp the edge with `clock` and count it
pub fn on_rain_edge<C: TimeSource>(counters: &PulseCounters, clock: &C) {
    counters.rain.on_edge(clock.now_us());
}

/// Anemometer interrupt body: stamp the edge with `clock` and count it
pub fn on_wind_edge<C: TimeSource>(counters: &PulseCounters, clock: &C) {
    counters.wind_speed.on_edge(clock.now_us());
}
