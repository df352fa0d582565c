//! Error Types for Degraded Sensor Input
//!
//! Nothing in this crate is fatal. The conditions below are the ones the
//! sampling pipeline can run into; components report them so the
//! [`WeatherStation`](crate::WeatherStation) facade can apply a fixed fallback
//! and log it instead of producing garbage arithmetic.
//!
//! ## Error Categories
//!
//! - `EmptyHistogram`: the direction resolver has no classified samples and
//!   would divide by zero. The station keeps the last published direction.
//! - `StaleInput`: the vane ring has not been filled yet. Results are still
//!   produced, with lower confidence.
//! - `Overflow`: a counter or total hit its ceiling and saturated.
//!
//! ```rust
//! use weatherpack_core::{SectorHistogram, WeatherError};
//!
//! let empty = SectorHistogram::new();
//! match empty.resolve() {
//!     Ok(direction) => { let _ = direction.degrees(); }
//!     Err(WeatherError::EmptyHistogram) => {
//!         // keep the previous direction
//!     }
//!     Err(_) => {}
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for sampling operations
pub type WeatherResult<T> = Result<T, WeatherError>;

/// Sampling conditions - kept small and `Copy` for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherError {
    /// No vane samples fell into any arc, so the weighted mean is undefined
    #[error("Direction histogram is empty")]
    EmptyHistogram,

    /// Fewer samples than the buffer holds
    #[error("Stale input: need {required} samples, have {available}")]
    StaleInput {
        /// Samples needed for a full window
        required: usize,
        /// Samples pushed so far
        available: usize,
    },

    /// A counter or running total reached its maximum and saturated
    #[error("Overflow in {what}")]
    Overflow {
        /// Name of the saturated quantity
        what: &'static str,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for WeatherError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::EmptyHistogram => defmt::write!(fmt, "Empty direction histogram"),
            Self::StaleInput { required, available } => {
                defmt::write!(fmt, "Need {} samples, have {}", required, available)
            }
            Self::Overflow { what } => defmt::write!(fmt, "Overflow in {}", what),
        }
    }
}
