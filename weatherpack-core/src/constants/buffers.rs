//! Buffer Sizes and Direction Geometry
//!
//! All buffers are sized at compile time; nothing is allocated after
//! construction.

/// Number of wind vane samples kept for consensus averaging.
///
/// At a host loop of a few kilohertz this covers only the last few
/// milliseconds before each aggregation; at slower loops it stretches over
/// most of the interval.
pub const VANE_SAMPLE_CAPACITY: usize = 50;

/// Number of per-interval speeds kept for gust detection (30 s at 1 Hz).
pub const GUST_HISTORY_CAPACITY: usize = 30;

/// Number of angular sectors a vane reading is classified into (22.5° each).
pub const SECTOR_COUNT: usize = 16;

/// Width in sectors of the arc searched for the densest cluster of samples.
pub const CONSENSUS_ARC_WIDTH: usize = 5;

/// Twice the width of one sector in degrees (2 × 22.5).
///
/// Direction maths runs in half-degree units and halves at the end so it
/// stays in integers.
pub const DEGREES_PER_HALF_SECTOR_X2: u32 = 45;

// Sector arithmetic masks with `SECTOR_COUNT - 1`
const _: () = assert!(SECTOR_COUNT.is_power_of_two());
const _: () = assert!(CONSENSUS_ARC_WIDTH < SECTOR_COUNT);
