//! Sensor Calibration and Transfer Tables
//!
//! Factors for the Argent Data Systems style weather package: a
//! tipping-bucket rain gauge, a three-cup anemometer and an eight-resistor
//! wind vane read through a 10 kΩ pull-up on a 10-bit ADC.

// ===== ANEMOMETER =====

/// Speed numerator. One closure per second is 1.492 mph, and speed is
/// reported in tenths of a mile per hour.
///
/// Combined with [`ANEMOMETER_SPEED_DENOMINATOR`] this gives
/// `speed = pulses × 14920 / 1000` using integer arithmetic only.
pub const ANEMOMETER_SPEED_NUMERATOR: u32 = 14920;

/// Speed denominator, see [`ANEMOMETER_SPEED_NUMERATOR`].
pub const ANEMOMETER_SPEED_DENOMINATOR: u32 = 1000;

// ===== RAIN GAUGE =====

/// Rain volume per bucket tip (0.011 in, reported in thousandths).
pub const RAIN_PER_TIP: u32 = 11;

// ===== WIND VANE =====

/// Voltage-to-sector lookup for the resistive vane.
///
/// Each entry is `(threshold, sector)`: a raw ADC reading strictly greater
/// than `threshold` belongs to `sector`, checked top to bottom. Readings that
/// match none of the entries (80 and below) are sector 5 (ESE).
///
/// The table is ordered by voltage, not by angle. The vane switches in two
/// resistors at the half-way positions, which is why neighbouring sectors can
/// be far apart here.
pub const VANE_THRESHOLDS: [(u16, u8); 15] = [
    (940, 12), // W
    (890, 14), // NW
    (820, 13), // WNW
    (785, 0),  // N
    (690, 15), // NNW
    (630, 10), // SW
    (590, 11), // WSW
    (455, 2),  // NE
    (400, 1),  // NNE
    (285, 8),  // S
    (240, 9),  // SSW
    (180, 6),  // SE
    (125, 7),  // SSE
    (90, 4),   // E
    (80, 3),   // ENE
];

/// Sector for readings at or below the last threshold.
pub const VANE_FALLBACK_SECTOR: u8 = 5;
