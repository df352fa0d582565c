//! Weather Station Facade
//!
//! ## Overview
//!
//! [`WeatherStation`] owns the cooperative half of the pipeline. The host
//! calls [`update`](WeatherStation::update) from its main loop as often as it
//! can; every call takes one vane sample, and once per second the call also
//! runs an aggregation pass:
//!
//! ```text
//! update()
//!   ├─ vane ring ← read_analog(wind_direction)      every call
//!   └─ timer fired?                                 once per 1000 ms
//!        ├─ rain  ← drain(rain)       × 11          cumulative
//!        ├─ speed ← drain(wind_speed) × 14.92       + gust ring
//!        └─ direction ← consensus(vane ring)
//! ```
//!
//! ## Error Handling
//!
//! The facade never returns errors. Conditions reported by the components
//! get a fixed fallback and a log line:
//!
//! | Condition        | Fallback                                  |
//! |------------------|-------------------------------------------|
//! | `EmptyHistogram` | keep the last published direction         |
//! | `StaleInput`     | resolve anyway; see [`WeatherStation::vane_primed`] |
//! | `Overflow`       | saturate the rain total                   |
//!
//! ## Sampling Discipline
//!
//! Vane samples are only as fresh as the loop is fast: at a 10 ms loop the
//! ring spans half a second. Edge counting is independent of the loop, but
//! edges arriving faster than the debounce window are undercounted.

use crate::direction::{SectorHistogram, WindDirection};
use crate::errors::WeatherError;
use crate::hal::{SensorIo, StationPins};
use crate::pulse::PulseCounters;
use crate::rain::RainAccumulator;
use crate::schedule::AggregationTimer;
use crate::time::TimeSource;
use crate::vane::VaneSampleRing;
use crate::wind::WindTracker;

/// Published outputs, updated once per aggregation pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WeatherState {
    /// Rain since construction (never reset by reads)
    pub rain_accumulated: u32,
    /// Consensus wind direction
    pub wind_direction: WindDirection,
    /// Speed over the most recent interval
    pub wind_speed: u32,
    /// Highest interval speed since construction
    pub wind_gust_max: u32,
    /// Completed aggregation passes
    pub aggregations: u32,
}

/// Rain gauge, anemometer and wind vane sampled as one unit
///
/// Generic over the host clock `C` and board I/O `IO`. The pulse counters
/// are borrowed because the interrupt handlers need them too; in firmware
/// they are a `static`.
pub struct WeatherStation<'a, C, IO> {
    pins: StationPins,
    counters: &'a PulseCounters,
    clock: C,
    io: IO,
    timer: AggregationTimer,
    vane: VaneSampleRing,
    wind: WindTracker,
    rain: RainAccumulator,
    state: WeatherState,
}

impl<'a, C: TimeSource, IO: SensorIo> WeatherStation<'a, C, IO> {
    /// Configure the two pulse inputs and start with all outputs at zero
    ///
    /// Edge interrupts are the host's job: bind them to
    /// [`on_rain_edge`](crate::pulse::on_rain_edge) and
    /// [`on_wind_edge`](crate::pulse::on_wind_edge) with the same `counters`.
    pub fn new(pins: StationPins, counters: &'a PulseCounters, clock: C, mut io: IO) -> Self {
        io.configure_pulse_input(pins.rain);
        io.configure_pulse_input(pins.wind_speed);

        Self {
            pins,
            counters,
            clock,
            io,
            timer: AggregationTimer::new(),
            vane: VaneSampleRing::new(),
            wind: WindTracker::new(),
            rain: RainAccumulator::new(),
            state: WeatherState::default(),
        }
    }

    /// Take a vane sample and, when the interval has elapsed, aggregate
    ///
    /// Returns whether an aggregation pass ran.
    pub fn update(&mut self) -> bool {
        let now = self.clock.now_ms();
        let raw = self.io.read_analog(self.pins.wind_direction);
        self.vane.push(raw);

        if self.timer.wait(now).is_err() {
            return false;
        }

        self.aggregate();
        true
    }

    fn aggregate(&mut self) {
        let rain_tips = self.counters.rain.drain();
        let wind_pulses = self.counters.wind_speed.drain();

        match self.rain.record_tips(rain_tips) {
            Ok(increment) => log_trace!("rain +{}", increment),
            Err(err) => log_warn!("rain total saturated: {}", err),
        }

        let speed = self.wind.record_pulses(wind_pulses);

        if let Err(err) = self.vane.check_primed() {
            log_debug!("resolving direction from partial ring: {}", err);
        }

        let histogram = SectorHistogram::from_samples(self.vane.samples());
        match histogram.resolve() {
            Ok(direction) => self.state.wind_direction = direction,
            Err(WeatherError::EmptyHistogram) => {
                log_warn!("no vane samples classified, keeping previous direction")
            }
            Err(err) => log_warn!("direction not updated: {}", err),
        }

        self.state.rain_accumulated = self.rain.total();
        self.state.wind_speed = speed;
        self.state.wind_gust_max = self.wind.gust();
        self.state.aggregations = self.state.aggregations.wrapping_add(1);

        log_debug!(
            "aggregated: rain={} speed={} gust={} dir={}",
            self.state.rain_accumulated,
            self.state.wind_speed,
            self.state.wind_gust_max,
            self.state.wind_direction.degrees()
        );
    }

    /// Rain since construction
    ///
    /// Cumulative: reading does not reset it. Subtract successive readings
    /// to get per-period rainfall.
    pub fn rain(&self) -> u32 {
        self.state.rain_accumulated
    }

    /// Consensus wind direction in degrees, `[0, 360)`
    pub fn wind_direction(&self) -> u16 {
        self.state.wind_direction.degrees()
    }

    /// Speed over the most recent aggregation interval
    pub fn wind_speed(&self) -> u32 {
        self.state.wind_speed
    }

    /// Gust record
    ///
    /// Highest interval speed since construction. It never decreases, even
    /// after the gust has left the 30-interval history.
    pub fn wind_gust(&self) -> u32 {
        self.state.wind_gust_max
    }

    /// Copy of every published output
    pub fn state(&self) -> WeatherState {
        self.state
    }

    /// Whether the vane ring has been filled since construction
    ///
    /// Until then unwritten slots count as the lowest-voltage sector and the
    /// direction is biased toward ESE.
    pub fn vane_primed(&self) -> bool {
        self.vane.is_primed()
    }

    /// Highest speed still inside the gust history
    pub fn wind_gust_window(&self) -> u32 {
        self.wind.window_max()
    }

    /// Pins this station was built with
    pub fn pins(&self) -> StationPins {
        self.pins
    }

    /// Give back the board I/O
    pub fn release(self) -> IO {
        self.io
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pulse::on_rain_edge;
    use crate::time::MockTimeSource;

    const PINS: StationPins = StationPins {
        rain: 2,
        wind_direction: 14,
        wind_speed: 3,
    };

    /// Board that returns a fixed vane level and records configured pins
    struct FixedVane {
        level: u16,
        configured: [Option<u8>; 2],
        reads: u32,
    }

    impl FixedVane {
        fn new(level: u16) -> Self {
            Self {
                level,
                configured: [None; 2],
                reads: 0,
            }
        }
    }

    impl SensorIo for FixedVane {
        fn configure_pulse_input(&mut self, pin: u8) {
            let slot = self.configured.iter_mut().find(|s| s.is_none()).expect("too many pins");
            *slot = Some(pin);
        }

        fn read_analog(&mut self, pin: u8) -> u16 {
            assert_eq!(pin, PINS.wind_direction);
            self.reads += 1;
            self.level
        }
    }

    #[test]
    fn constructor_configures_pulse_pins() {
        let counters = PulseCounters::new();
        let clock = MockTimeSource::new(0);
        let station = WeatherStation::new(PINS, &counters, &clock, FixedVane::new(0));

        let io = station.release();
        assert_eq!(io.configured, [Some(2), Some(3)]);
    }

    #[test]
    fn every_update_samples_the_vane() {
        let counters = PulseCounters::new();
        let clock = MockTimeSource::new(0);
        let mut io = FixedVane::new(1000);
        let mut station = WeatherStation::new(PINS, &counters, &clock, &mut io);

        for _ in 0..10 {
            station.update();
        }
        drop(station);
        assert_eq!(io.reads, 10);
    }

    #[test]
    fn aggregates_once_per_interval() {
        let counters = PulseCounters::new();
        let clock = MockTimeSource::new(1);
        let mut station = WeatherStation::new(PINS, &counters, &clock, FixedVane::new(1000));

        assert!(station.update());
        clock.advance_ms(500);
        assert!(!station.update());
        clock.advance_ms(501);
        assert!(station.update());
        assert_eq!(station.state().aggregations, 2);
    }

    #[test]
    fn five_tips_make_fifty_five() {
        let counters = PulseCounters::new();
        let clock = MockTimeSource::new(100);
        let mut station = WeatherStation::new(PINS, &counters, &clock, FixedVane::new(1000));

        for _ in 0..5 {
            on_rain_edge(&counters, &clock);
            clock.advance_ms(20);
        }
        clock.advance_ms(1000);
        station.update();

        assert_eq!(station.rain(), 55);
    }

    #[test]
    fn steady_west_wind() {
        let counters = PulseCounters::new();
        let clock = MockTimeSource::new(0);
        let mut station = WeatherStation::new(PINS, &counters, &clock, FixedVane::new(1000));

        for _ in 0..50 {
            station.update();
            clock.advance_ms(1);
        }
        clock.advance_ms(1000);
        station.update();

        assert!(station.vane_primed());
        assert_eq!(station.wind_direction(), 270);
    }
}
