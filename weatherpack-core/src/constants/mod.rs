//! Constants for the weather package
//!
//! All numeric values the sampling pipeline depends on live here, grouped by
//! domain, with units in the names:
//! - **Time**: debounce window and aggregation interval
//! - **Sensors**: calibration factors and the wind vane voltage table
//! - **Buffers**: ring capacities and consensus arc geometry

/// Time-related constants: debounce window, aggregation interval, conversions.
pub mod time;

/// Sensor calibration factors and the vane voltage-to-sector table.
pub mod sensors;

/// Ring capacities and direction-resolver geometry.
pub mod buffers;

// Re-export commonly used constants for convenience
pub use time::{AGGREGATION_INTERVAL_MS, DEBOUNCE_TIME_MS, US_PER_MS};

pub use sensors::{
    ANEMOMETER_SPEED_DENOMINATOR, ANEMOMETER_SPEED_NUMERATOR, RAIN_PER_TIP, VANE_THRESHOLDS,
};

pub use buffers::{
    CONSENSUS_ARC_WIDTH, DEGREES_PER_HALF_SECTOR_X2, GUST_HISTORY_CAPACITY, SECTOR_COUNT,
    VANE_SAMPLE_CAPACITY,
};
