//! Wind Component
//!
//! One [`Wind`] owns everything the periodic task needs: the correlator and
//! its period, the direction sample buffer, the calculator and the
//! instrument store. The edge state lives in an [`EdgeCapture`] borrowed
//! from a `static` shared with the interrupt handlers.
//!
//! ```rust
//! use windvane_core::{EdgeCapture, MemoryStore, Wind, WindConfig};
//! use windvane_core::time::{Clock, MockClock};
//!
//! let capture = EdgeCapture::new();
//! let clock = MockClock::new(1_000);
//! let mut wind: Wind<'_, MemoryStore> =
//!     Wind::new(&capture, MemoryStore::default(), WindConfig::default(), &clock)?;
//!
//! // Rotor turning once per 100 ms, vane a quarter turn behind
//! for _ in 0..3 {
//!     clock.advance_ms(75);
//!     capture.on_speed_edge(&clock);
//!     clock.advance_ms(25);
//!     capture.on_direction_edge(&clock);
//! }
//! wind.calc_speed_and_dir();
//! wind.calc_wind_data(clock.millis());
//!
//! assert_eq!(wind.outputs().apparent_dir, 0);
//! # Ok::<(), windvane_core::WindError>(())
//! ```

use crate::buffer::CircularBuffer;
use crate::calculator::{CycleReport, WindCalculator};
use crate::capture::EdgeCapture;
use crate::config::WindConfig;
use crate::constants::buffers::DIRECTION_BUFFER_SIZE;
use crate::correlator::{Correlation, Correlator};
use crate::errors::WindResult;
use crate::store::{InstrumentStore, WindOutputs};
use crate::time::{Clock, Millis};

/// Apparent wind from one anemometer and vane pair
///
/// `N` is the number of vane angles averaged into the published direction.
#[derive(Debug)]
pub struct Wind<'a, S: InstrumentStore, const N: usize = DIRECTION_BUFFER_SIZE> {
    capture: &'a EdgeCapture,
    correlator: Correlator,
    samples: CircularBuffer<u16, N>,
    calculator: WindCalculator,
    config: WindConfig,
    store: S,
}

impl<'a, S: InstrumentStore, const N: usize> Wind<'a, S, N> {
    /// Validate `config`, arm the edge capture and clamp the alarm speed
    ///
    /// Both edge channels are seeded with the clock's current time so the
    /// first real edges are measured against a known start.
    pub fn new<C: Clock>(
        capture: &'a EdgeCapture,
        mut store: S,
        config: WindConfig,
        clock: &C,
    ) -> WindResult<Self> {
        config.validate()?;

        capture.set_debounce_ms(config.debounce_ms);
        capture.seed(clock.millis(), clock.micros());

        let alarm = store.wind_alarm_speed();
        if alarm > config.alarm_speed_limit {
            log_debug!("Alarm speed {} clamped to {}", alarm, config.alarm_speed_limit);
            store.set_wind_alarm_speed(config.alarm_speed_limit);
        }

        Ok(Self {
            capture,
            correlator: Correlator::new(config.debounce_us),
            samples: CircularBuffer::new(),
            calculator: WindCalculator::new(config.stale_after_ms),
            config,
            store,
        })
    }

    /// Correlate the latest edge pairs into a period and a vane angle
    ///
    /// Rejected snapshots are dropped silently; the reason is only logged.
    pub fn calc_speed_and_dir(&mut self) -> Option<Correlation> {
        let snapshot = self.capture.snapshot();
        match self.correlator.correlate(snapshot, &mut self.samples) {
            Ok(correlation) => Some(correlation),
            Err(rejection) => {
                log_trace!("Edge snapshot dropped: {}", rejection);
                None
            }
        }
    }

    /// Publish speed, gust and direction for the cycle at `now_ms`
    pub fn calc_wind_data(&mut self, now_ms: Millis) -> CycleReport {
        self.calculator.run(
            now_ms,
            self.capture,
            self.correlator.period_us(),
            &self.samples,
            &mut self.store,
        )
    }

    /// Forget the period and every buffered angle, reseed the edge channels
    ///
    /// Published values in the store are left alone.
    pub fn reset<C: Clock>(&mut self, clock: &C) {
        self.correlator.reset();
        self.samples.clear();
        self.capture.seed(clock.millis(), clock.micros());
    }

    /// Zero the gust maximum
    pub fn reset_gust(&mut self) {
        self.store.set_wind_max(0);
    }

    /// Whether the published average meets a non-zero alarm speed
    ///
    /// The comparison is against the average as published, already divided
    /// by the store's calibration factor, so the alarm speed has to be in
    /// those same units. With a factor of 1 the average sits near
    /// knots × 10⁴ and any alarm under the clamp limit trips in a light
    /// breeze; a factor near 10 000 publishes whole knots.
    pub fn alarm_active(&self) -> bool {
        let alarm = self.store.wind_alarm_speed();
        alarm > 0 && self.store.wind_average() >= alarm
    }

    /// Published values
    pub fn outputs(&self) -> WindOutputs {
        WindOutputs::from_store(&self.store)
    }

    /// Instrument store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Instrument store, for changing calibration at runtime
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Buffered vane angles
    pub fn samples(&self) -> &CircularBuffer<u16, N> {
        &self.samples
    }

    /// Latest rotor period in microseconds
    pub fn period_us(&self) -> u32 {
        self.correlator.period_us()
    }

    /// Active configuration
    pub fn config(&self) -> &WindConfig {
        &self.config
    }
}
