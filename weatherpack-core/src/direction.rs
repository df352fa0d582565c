//! Consensus Wind Direction From Noisy Vane Samples
//!
//! ## Overview
//!
//! A resistive vane gives one of sixteen voltages, but the mapping is not
//! ordered by angle and the vane itself flutters between neighbours. Taking
//! the arithmetic mean of raw angles also fails at north, where 350° and 10°
//! average to 180°. Instead every sample is classified into a sector and the
//! densest contiguous arc of sectors wins.
//!
//! ## Algorithm
//!
//! ```text
//! 1. histogram[sector(sample)] += 1          for every ring sample
//! 2. arc(i) = Σ histogram[(i + j) mod 16]    j in 0..5
//!    start  = first i with the largest arc   (strictly greater wins)
//! 3. offset = Σ histogram[(start + k) mod 16] × k   k in 1..5
//!    deg    = ((start × 45 + offset × 45 / arc) >> 1) mod 360
//! ```
//!
//! Step 3 works in half-degree units (45 per sector) and halves once at the
//! end. Integer division truncates before the shift, so every step rounds
//! toward zero. Arcs that cross north produce values past 360 before the
//! final modulo.
//!
//! ## Example
//!
//! ```rust
//! use weatherpack_core::direction::{classify, SectorHistogram};
//! use weatherpack_core::CompassPoint;
//!
//! assert_eq!(classify(1000), CompassPoint::W);
//!
//! let histogram = SectorHistogram::from_samples(&[1000; 50]);
//! let direction = histogram.resolve().unwrap();
//! assert_eq!(direction.degrees(), 270);
//! ```

use crate::constants::buffers::{CONSENSUS_ARC_WIDTH, DEGREES_PER_HALF_SECTOR_X2, SECTOR_COUNT};
use crate::constants::sensors::{VANE_FALLBACK_SECTOR, VANE_THRESHOLDS};
use crate::errors::{WeatherError, WeatherResult};
use crate::vane::VaneSample;

const SECTOR_MASK: usize = SECTOR_COUNT - 1;

/// One of the sixteen 22.5° sectors, clockwise from north
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(missing_docs)]
#[repr(u8)]
pub enum CompassPoint {
    N = 0,
    NNE,
    NE,
    ENE,
    E,
    ESE,
    SE,
    SSE,
    S,
    SSW,
    SW,
    WSW,
    W,
    WNW,
    NW,
    NNW,
}

impl CompassPoint {
    const ALL: [CompassPoint; SECTOR_COUNT] = [
        Self::N,
        Self::NNE,
        Self::NE,
        Self::ENE,
        Self::E,
        Self::ESE,
        Self::SE,
        Self::SSE,
        Self::S,
        Self::SSW,
        Self::SW,
        Self::WSW,
        Self::W,
        Self::WNW,
        Self::NW,
        Self::NNW,
    ];

    /// Sector for an index, taken modulo 16
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index & SECTOR_MASK]
    }

    /// Sector index, 0 = north
    pub fn index(self) -> usize {
        self as usize
    }

    /// Short label such as `"WSW"`
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::N => "N",
            Self::NNE => "NNE",
            Self::NE => "NE",
            Self::ENE => "ENE",
            Self::E => "E",
            Self::ESE => "ESE",
            Self::SE => "SE",
            Self::SSE => "SSE",
            Self::S => "S",
            Self::SSW => "SSW",
            Self::SW => "SW",
            Self::WSW => "WSW",
            Self::W => "W",
            Self::WNW => "WNW",
            Self::NW => "NW",
            Self::NNW => "NNW",
        }
    }
}

/// Classify a raw vane reading into its sector
pub fn classify(raw: VaneSample) -> CompassPoint {
    let sector = VANE_THRESHOLDS
        .iter()
        .find(|(threshold, _)| raw > *threshold)
        .map_or(VANE_FALLBACK_SECTOR, |(_, sector)| *sector);

    CompassPoint::from_index(sector as usize)
}

/// Wind direction in whole degrees, always in `[0, 360)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WindDirection(u16);

impl WindDirection {
    /// Direction from any degree value, reduced modulo 360
    pub fn from_degrees(degrees: u32) -> Self {
        Self((degrees % 360) as u16)
    }

    /// Degrees clockwise from north
    pub fn degrees(self) -> u16 {
        self.0
    }

    /// Nearest of the sixteen compass points
    pub fn compass_point(self) -> CompassPoint {
        // round(deg / 22.5) == floor((4 × deg + 45) / 90)
        let index = (u32::from(self.0) * 4 + 45) / 90;
        CompassPoint::from_index(index as usize)
    }
}

/// Per-sector sample counts for one aggregation interval
///
/// Rebuilt from scratch every interval, never carried over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SectorHistogram {
    counts: [u32; SECTOR_COUNT],
}

impl SectorHistogram {
    /// All sectors at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify every sample into a fresh histogram
    pub fn from_samples(samples: &[VaneSample]) -> Self {
        let mut histogram = Self::new();
        for &raw in samples {
            histogram.record(raw);
        }
        histogram
    }

    /// Classify one raw sample and count it
    pub fn record(&mut self, raw: VaneSample) -> CompassPoint {
        let sector = classify(raw);
        self.add(sector, 1);
        sector
    }

    /// Add `count` samples directly to a sector
    pub fn add(&mut self, sector: CompassPoint, count: u32) {
        let slot = &mut self.counts[sector.index()];
        *slot = slot.saturating_add(count);
    }

    /// Samples in one sector
    pub fn count(&self, sector: CompassPoint) -> u32 {
        self.counts[sector.index()]
    }

    /// All sector counts, indexed clockwise from north
    pub fn counts(&self) -> &[u32; SECTOR_COUNT] {
        &self.counts
    }

    /// Total samples recorded
    pub fn total(&self) -> u32 {
        self.counts.iter().fold(0u32, |acc, c| acc.saturating_add(*c))
    }

    fn arc_sum(&self, start: usize) -> u32 {
        (0..CONSENSUS_ARC_WIDTH)
            .map(|j| self.counts[(start + j) & SECTOR_MASK])
            .fold(0u32, |acc, c| acc.saturating_add(c))
    }

    /// Start sector and sample count of the densest 5-sector arc
    ///
    /// Ties go to the lowest start index. `None` when every arc is empty.
    pub fn densest_arc(&self) -> Option<(CompassPoint, u32)> {
        let mut maximum = 0u32;
        let mut max_i = 0usize;

        for i in 0..SECTOR_COUNT {
            let sum = self.arc_sum(i);
            if sum > maximum {
                maximum = sum;
                max_i = i;
            }
        }

        (maximum > 0).then(|| (CompassPoint::from_index(max_i), maximum))
    }

    /// Weighted circular mean over the densest arc
    ///
    /// Fails with [`WeatherError::EmptyHistogram`] when there is nothing to
    /// average instead of dividing by zero.
    pub fn resolve(&self) -> WeatherResult<WindDirection> {
        let (start, maximum) = self.densest_arc().ok_or(WeatherError::EmptyHistogram)?;
        let max_i = start.index();

        let offset: u64 = (1..CONSENSUS_ARC_WIDTH)
            .map(|k| u64::from(self.counts[(max_i + k) & SECTOR_MASK]) * k as u64)
            .sum();

        let step = u64::from(DEGREES_PER_HALF_SECTOR_X2);
        let half_degrees = max_i as u64 * step + (offset * step) / u64::from(maximum);

        Ok(WindDirection::from_degrees(((half_degrees >> 1) % 360) as u32))
    }
}
