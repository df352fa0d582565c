//! Shared fixtures for the integration tests
//!
//! - `ScriptedVane`: board I/O that replays a list of vane readings
//! - `Rig`: counters + mock clock + pins, the pieces a station is built from
//! - edge helpers that space pulses in time the way a reed switch would

#![allow(dead_code)]

use weatherpack_core::{
    pulse::{on_rain_edge, on_wind_edge},
    time::MockTimeSource,
    PulseCounters, SensorIo, StationPins, WeatherStation,
};

/// Pin assignment used throughout the tests
pub const PINS: StationPins = StationPins {
    rain: 2,
    wind_direction: 0,
    wind_speed: 3,
};

/// Raw reading in the middle of the W band
pub const RAW_W: u16 = 1000;
/// Raw reading in the N band
pub const RAW_N: u16 = 800;
/// Raw reading in the NNW band
pub const RAW_NNW: u16 = 700;
/// Raw reading in the S band
pub const RAW_S: u16 = 300;
/// Raw reading in the NW band
pub const RAW_NW: u16 = 900;
/// Raw reading in the NNE band
pub const RAW_NNE: u16 = 420;

/// Board I/O replaying vane readings in a loop
pub struct ScriptedVane {
    script: Vec<u16>,
    position: usize,
    pub configured: Vec<u8>,
}

impl ScriptedVane {
    pub fn constant(raw: u16) -> Self {
        Self::cycle(&[raw])
    }

    pub fn cycle(script: &[u16]) -> Self {
        assert!(!script.is_empty(), "script needs at least one reading");
        Self {
            script: script.to_vec(),
            position: 0,
            configured: Vec::new(),
        }
    }
}

impl SensorIo for ScriptedVane {
    fn configure_pulse_input(&mut self, pin: u8) {
        self.configured.push(pin);
    }

    fn read_analog(&mut self, pin: u8) -> u16 {
        assert_eq!(pin, PINS.wind_direction, "vane read on the wrong pin");
        let raw = self.script[self.position % self.script.len()];
        self.position += 1;
        raw
    }
}

/// Counters and clock a station borrows
pub struct Rig {
    pub counters: PulseCounters,
    pub clock: MockTimeSource,
}

impl Rig {
    /// Clock starts at 100 ms so the first edge clears the debounce window
    pub fn new() -> Self {
        Self {
            counters: PulseCounters::new(),
            clock: MockTimeSource::new(100),
        }
    }

    pub fn station(&self, io: ScriptedVane) -> WeatherStation<'_, &MockTimeSource, ScriptedVane> {
        WeatherStation::new(PINS, &self.counters, &self.clock, io)
    }

    /// `count` rain tips, `spacing_ms` apart
    pub fn rain_tips(&self, count: u32, spacing_ms: u32) {
        for _ in 0..count {
            on_rain_edge(&self.counters, &self.clock);
            self.clock.advance_ms(spacing_ms);
        }
    }

    /// `count` anemometer closures, `spacing_ms` apart
    pub fn wind_pulses(&self, count: u32, spacing_ms: u32) {
        for _ in 0..count {
            on_wind_edge(&self.counters, &self.clock);
            self.clock.advance_ms(spacing_ms);
        }
    }

    /// Run `ticks` host-loop iterations `step_ms` apart, returning the
    /// number of aggregation passes
    pub fn run(
        &self,
        station: &mut WeatherStation<'_, &MockTimeSource, ScriptedVane>,
        ticks: u32,
        step_ms: u32,
    ) -> u32 {
        let mut passes = 0;
        for _ in 0..ticks {
            if station.update() {
                passes += 1;
            }
            self.clock.advance_ms(step_ms);
        }
        passes
    }
}
