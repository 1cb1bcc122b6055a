//! Host clock abstraction
//!
//! The wind core reads two free-running counters from the host:
//! - a millisecond counter for debounce and staleness
//! - a microsecond counter for pulse timing
//!
//! Both are 32-bit and wrap (microseconds roughly every 71 minutes,
//! milliseconds every 49 days). Callers never get a wider value, so every
//! consumer in this crate compares with rollover in mind.

/// Millisecond counter value
pub type Millis = u32;

/// Microsecond counter value
pub type Micros = u32;

/// Source of monotonic time for the wind core
pub trait Clock {
    /// Current millisecond counter
    fn millis(&self) -> Millis;

    /// Current microsecond counter
    fn micros(&self) -> Micros;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn millis(&self) -> Millis {
        (**self).millis()
    }

    fn micros(&self) -> Micros {
        (**self).micros()
    }
}

/// Controllable clock for tests and simulations
///
/// Keeps one microsecond count and derives milliseconds from it, both
/// wrapping like hardware counters. Interior mutability lets a shared
/// reference be advanced while edge handlers hold another.
#[derive(Debug, Default)]
pub struct MockClock {
    micros: core::cell::Cell<u64>,
}

impl MockClock {
    /// Clock starting at the given millisecond value
    pub fn new(start_ms: u32) -> Self {
        Self::from_micros(start_ms as u64 * 1000)
    }

    /// Clock starting at the given microsecond value
    pub fn from_micros(start_us: u64) -> Self {
        Self {
            micros: core::cell::Cell::new(start_us),
        }
    }

    /// Jump to an absolute microsecond time
    pub fn set_micros(&self, us: u64) {
        self.micros.set(us);
    }

    /// Advance by a number of milliseconds
    pub fn advance_ms(&self, ms: u32) {
        self.advance_us(ms as u64 * 1000);
    }

    /// Advance by a number of microseconds
    pub fn advance_us(&self, us: u64) {
        self.micros.set(self.micros.get() + us);
    }
}

impl Clock for MockClock {
    fn millis(&self) -> Millis {
        (self.micros.get() / 1000) as Millis
    }

    fn micros(&self) -> Micros {
        self.micros.get() as Micros
    }
}

/// Host clock backed by `std::time::Instant`
///
/// Counters start at zero when the clock is created and wrap like the
/// hardware counters they stand in for.
#[cfg(feature = "std")]
#[derive(Debug, Clone)]
pub struct SystemClock {
    start: std::time::Instant,
}

#[cfg(feature = "std")]
impl SystemClock {
    /// Clock starting now
    pub fn new() -> Self {
        Self {
            start: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock for SystemClock {
    fn millis(&self) -> Millis {
        self.start.elapsed().as_millis() as Millis
    }

    fn micros(&self) -> Micros {
        self.start.elapsed().as_micros() as Micros
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_clock_advances() {
        let clock = MockClock::new(1000);
        assert_eq!(clock.millis(), 1000);
        assert_eq!(clock.micros(), 1_000_000);

        clock.advance_ms(500);
        assert_eq!(clock.millis(), 1500);

        clock.advance_us(250);
        assert_eq!(clock.micros(), 1_500_250);
        assert_eq!(clock.millis(), 1500);
    }

    #[test]
    fn mock_clock_micros_wrap() {
        let clock = MockClock::from_micros(u32::MAX as u64);
        clock.advance_us(11);
        assert_eq!(clock.micros(), 10);
        // Millisecond counter keeps counting
        assert_eq!(clock.millis(), 4_294_967);
    }

    #[test]
    fn clock_through_reference() {
        fn read<C: Clock>(clock: C) -> u32 {
            clock.millis()
        }
        let clock = MockClock::new(42);
        assert_eq!(read(&clock), 42);
    }

    #[cfg(feature = "std")]
    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.micros();
        let b = clock.micros();
        assert!(b >= a);
    }
}
