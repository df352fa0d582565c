//! Time Source Abstraction
//!
//! The host supplies the clock. Both counters are 32-bit and wrap, the same
//! as a microcontroller's millisecond and microsecond tick counters, so every
//! comparison in this crate goes through unsigned wrapping subtraction.
//!
//! ## Implementations
//!
//! - `MockTimeSource`: settable clock for tests and simulations
//! - `MonotonicClock`: `std::time::Instant` based (requires `std`)
//! - Board clocks: implement [`TimeSource`] over the HAL's timer

use core::sync::atomic::{AtomicU32, Ordering};

use crate::constants::time::US_PER_MS;

/// Milliseconds since an arbitrary origin, wrapping at `u32::MAX`
pub type Millis = u32;

/// Microseconds since an arbitrary origin, wrapping at `u32::MAX`
pub type Micros = u32;

/// Source of monotonic time
///
/// Implementations must be safe to call from interrupt context when the
/// clock is shared with the edge handlers.
///
/// ```rust
/// use weatherpack_core::time::{Micros, Millis, TimeSource};
///
/// struct TickTimer {
///     ticks_us: u32,
/// }
///
/// impl TimeSource for TickTimer {
///     fn now_ms(&self) -> Millis {
///         self.ticks_us / 1000
///     }
///
///     fn now_us(&self) -> Micros {
///         self.ticks_us
///     }
/// }
/// ```
pub trait TimeSource {
    /// Current time in milliseconds
    fn now_ms(&self) -> Millis;

    /// Current time in microseconds
    fn now_us(&self) -> Micros;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now_ms(&self) -> Millis {
        (**self).now_ms()
    }

    fn now_us(&self) -> Micros {
        (**self).now_us()
    }
}

/// Ticks from `earlier` to `later`, correct across one wrap
#[inline]
pub fn elapsed(earlier: u32, later: u32) -> u32 {
    later.wrapping_sub(earlier)
}

/// Whether `now` is strictly after `deadline`, correct across one wrap
///
/// Treats anything less than half the counter range ahead as the future.
#[inline]
pub fn is_after(now: u32, deadline: u32) -> bool {
    let delta = now.wrapping_sub(deadline);
    delta != 0 && delta < (1 << 31)
}

/// Controllable time for testing
///
/// Interior atomics make it `Sync`, so a test can hand `&clock` to the
/// station and keep advancing it. Both readings come from one microsecond
/// counter, so the millisecond view wraps after about 71 minutes.
#[derive(Debug, Default)]
pub struct MockTimeSource {
    micros: AtomicU32,
}

impl MockTimeSource {
    /// Create a clock reading `start_ms`
    pub const fn new(start_ms: Millis) -> Self {
        Self {
            micros: AtomicU32::new(start_ms.wrapping_mul(US_PER_MS)),
        }
    }

    /// Jump to an absolute time in milliseconds
    pub fn set_ms(&self, ms: Millis) {
        self.micros.store(ms.wrapping_mul(US_PER_MS), Ordering::Relaxed);
    }

    /// Jump to an absolute time in microseconds
    pub fn set_us(&self, us: Micros) {
        self.micros.store(us, Ordering::Relaxed);
    }

    /// Move forward by `ms` milliseconds
    pub fn advance_ms(&self, ms: u32) {
        self.advance_us(ms.wrapping_mul(US_PER_MS));
    }

    /// Move forward by `us` microseconds
    pub fn advance_us(&self, us: u32) {
        self.micros.fetch_add(us, Ordering::Relaxed);
    }
}

impl TimeSource for MockTimeSource {
    fn now_ms(&self) -> Millis {
        self.micros.load(Ordering::Relaxed) / US_PER_MS
    }

    fn now_us(&self) -> Micros {
        self.micros.load(Ordering::Relaxed)
    }
}

/// Monotonic clock counting from construction (requires std)
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: std::time::Instant,
}

#[cfg(feature = "std")]
impl MonotonicClock {
    /// Start a clock at zero
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl TimeSource for MonotonicClock {
    // Truncation to u32 reproduces the wrap of a hardware tick counter
    fn now_ms(&self) -> Millis {
        self.origin.elapsed().as_millis() as Millis
    }

    fn now_us(&self) -> Micros {
        self.origin.elapsed().as_micros() as Micros
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_time_advances() {
        let clock = MockTimeSource::new(1000);
        assert_eq!(clock.now_ms(), 1000);
        assert_eq!(clock.now_us(), 1_000_000);

        clock.advance_ms(500);
        assert_eq!(clock.now_ms(), 1500);

        clock.advance_us(999);
        assert_eq!(clock.now_ms(), 1500);
        assert_eq!(clock.now_us(), 1_500_999);
    }

    #[test]
    fn shared_reference_is_a_time_source() {
        fn read<T: TimeSource>(clock: T) -> Millis {
            clock.now_ms()
        }

        let clock = MockTimeSource::new(42);
        assert_eq!(read(&clock), 42);
    }

    #[test]
    fn elapsed_survives_wrap() {
        assert_eq!(elapsed(u32::MAX - 4, 10), 15);
        assert_eq!(elapsed(100, 250), 150);
    }

    #[test]
    fn deadline_comparison() {
        assert!(!is_after(1000, 1000));
        assert!(is_after(1001, 1000));
        assert!(!is_after(999, 1000));

        // Deadline just before wrap, now just after
        assert!(is_after(5, u32::MAX - 5));
        assert!(!is_after(u32::MAX - 5, 5));
    }

    #[cfg(feature = "std")]
    #[test]
    fn monotonic_clock_does_not_go_backwards() {
        let clock = MonotonicClock::new();
        let a = clock.now_us();
        let b = clock.now_us();
        assert!(b >= a);
    }
}
