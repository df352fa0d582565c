//! Host capabilities the station depends on
//!
//! The crate never touches hardware. Pin setup and ADC reads come through
//! [`SensorIo`]; time comes through [`TimeSource`](crate::TimeSource); edge
//! interrupts are wired by the host to the handlers in [`pulse`](crate::pulse).
//!
//! ```ignore
//! struct Board {
//!     adc: Adc<'static, ADC1>,
//!     vane: AdcPin<GpioPin<4>, ADC1>,
//! }
//!
//! impl SensorIo for Board {
//!     fn configure_pulse_input(&mut self, pin: PinId) {
//!         // input, internal pull-up, falling-edge interrupt
//!     }
//!
//!     fn read_analog(&mut self, _pin: PinId) -> u16 {
//!         nb::block!(self.adc.read_oneshot(&mut self.vane)).unwrap_or(0)
//!     }
//! }
//! ```

/// Board-specific pin number
pub type PinId = u8;

/// Pins the three sensors are wired to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StationPins {
    /// Rain gauge reed switch (digital, pulled up)
    pub rain: PinId,
    /// Wind vane divider (analog)
    pub wind_direction: PinId,
    /// Anemometer reed switch (digital, pulled up)
    pub wind_speed: PinId,
}

/// Pin configuration and analog sampling provided by the board
pub trait SensorIo {
    /// Make `pin` a pulled-up digital input for a reed switch
    fn configure_pulse_input(&mut self, pin: PinId);

    /// Sample the analog level on `pin`
    ///
    /// Thresholds assume a 10-bit result (0..=1023).
    fn read_analog(&mut self, pin: PinId) -> u16;
}

impl<T: SensorIo + ?Sized> SensorIo for &mut T {
    fn configure_pulse_input(&mut self, pin: PinId) {
        (**self).configure_pulse_input(pin)
    }

    fn read_analog(&mut self, pin: PinId) -> u16 {
        (**self).read_analog(pin)
    }
}
