//! Time-Related Constants
//!
//! Debounce and scheduling intervals for the pulse counters and the
//! aggregation timer.

// ===== TIME UNIT CONVERSIONS =====

/// Microseconds per millisecond.
pub const US_PER_MS: u32 = 1000;

/// Milliseconds per second.
pub const MS_PER_SECOND: u32 = 1000;

// ===== PULSE INPUTS =====

/// Minimum spacing between accepted edges on one pulse channel (milliseconds).
///
/// Reed switches in both the rain gauge and the anemometer chatter for a few
/// milliseconds on every closure. At 15 ms the anemometer still resolves
/// about 66 closures per second, close to 100 mph.
pub const DEBOUNCE_TIME_MS: u32 = 15;

/// Debounce window expressed in microseconds, the unit edges are stamped in.
pub const DEBOUNCE_TIME_US: u32 = DEBOUNCE_TIME_MS * US_PER_MS;

// ===== AGGREGATION =====

/// Period between aggregation passes (milliseconds).
///
/// Speed calibration assumes exactly this window: pulse counts are
/// per-interval, so changing it changes the meaning of every speed output.
pub const AGGREGATION_INTERVAL_MS: u32 = MS_PER_SECOND;
