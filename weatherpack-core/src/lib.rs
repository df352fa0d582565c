//! Sampling and aggregation core for a three-sensor weather package
//!
//! Turns raw pulse counts from a tipping-bucket rain gauge and a cup
//! anemometer, plus analog samples from a resistive wind vane, into rain
//! accumulation, wind speed, gust maximum and wind direction.
//!
//! Key constraints:
//! - Runs on small microcontrollers (no heap, fixed-size buffers)
//! - Edge handlers are interrupt-safe (atomics only)
//! - Everything else runs in one cooperative context via [`WeatherStation::update`]
//!
//! ```no_run
//! use weatherpack_core::{PulseCounters, SensorIo, StationPins, WeatherStation};
//! use weatherpack_core::time::MockTimeSource;
//!
//! static COUNTERS: PulseCounters = PulseCounters::new();
//!
//! struct Board;
//!
//! impl SensorIo for Board {
//!     fn configure_pulse_input(&mut self, _pin: u8) {}
//!     fn read_analog(&mut self, _pin: u8) -> u16 { 512 }
//! }
//!
//! let clock = MockTimeSource::new(0);
//! let pins = StationPins { rain: 2, wind_direction: 0, wind_speed: 3 };
//! let mut station = WeatherStation::new(pins, &COUNTERS, &clock, Board);
//!
//! // In the interrupt trampolines:
//! // weatherpack_core::pulse::on_rain_edge(&COUNTERS, &clock);
//!
//! loop {
//!     station.update();
//!     let _rain = station.rain();
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod buffer;
pub mod constants;
pub mod direction;
pub mod errors;
pub mod hal;
pub mod pulse;
pub mod rain;
pub mod schedule;
pub mod station;
pub mod time;
pub mod vane;
pub mod wind;

// Public API
pub use direction::{CompassPoint, SectorHistogram, WindDirection};
pub use errors::{WeatherError, WeatherResult};
pub use hal::{PinId, SensorIo, StationPins};
pub use pulse::{PulseChannel, PulseCounters, PulseSource};
pub use station::{WeatherState, WeatherStation};
pub use time::TimeSource;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
