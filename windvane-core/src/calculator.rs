//! Periodic Wind Calculation
//!
//! Runs once per reporting interval from the periodic task. Each cycle:
//!
//! 1. Guard against a wrapped millisecond counter
//! 2. Stamp the store with the cycle time
//! 3. Report calm if the rotor has been still longer than the staleness window
//! 4. Otherwise convert the latest period to a calibrated speed
//! 5. Raise the gust maximum if the new average exceeds it
//! 6. Publish the circular mean of the buffered vane angles
//!
//! A calm cycle stops after step 3: neither gust nor direction move.

use crate::buffer::CircularBuffer;
use crate::calibration::speed_from_period;
use crate::capture::EdgeCapture;
use crate::constants::timing::STALE_AFTER_MS;
use crate::direction::{apparent_direction, circular_mean};
use crate::store::InstrumentStore;
use crate::time::Millis;

/// What one calculation cycle did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CycleReport {
    /// No speed edge within the staleness window, zero published
    Calm {
        /// Milliseconds since the last speed edge
        idle_ms: Millis,
    },
    /// Speed and direction processed
    Updated {
        /// Newly published average, `None` if the speed update was skipped
        speed: Option<i32>,
        /// Published apparent direction
        direction: u16,
        /// Whether this cycle raised the gust maximum
        new_gust: bool,
    },
}

/// Periodic speed, gust and direction calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindCalculator {
    stale_after_ms: Millis,
}

impl WindCalculator {
    /// Calculator with a custom staleness window
    pub const fn new(stale_after_ms: Millis) -> Self {
        Self { stale_after_ms }
    }

    /// Staleness window in milliseconds
    pub fn stale_after_ms(&self) -> Millis {
        self.stale_after_ms
    }

    /// Run one cycle and publish the results to `store`
    pub fn run<S, const N: usize>(
        &self,
        now_ms: Millis,
        capture: &EdgeCapture,
        period_us: u32,
        samples: &CircularBuffer<u16, N>,
        store: &mut S,
    ) -> CycleReport
    where
        S: InstrumentStore + ?Sized,
    {
        let age = capture.speed_pulse_age(now_ms);
        if age.reseeded {
            log_debug!("Millisecond counter wrapped, pulse times reseeded at {}", now_ms);
        }

        store.set_wind_last_update(now_ms);

        if age.speed_ms > self.stale_after_ms {
            log_debug!("No speed edge for {} ms, reporting calm", age.speed_ms);
            store.set_wind_average(0);
            return CycleReport::Calm { idle_ms: age.speed_ms };
        }

        let speed = if period_us == 0 {
            None
        } else {
            match speed_from_period(period_us, store.wind_factor()) {
                Ok(speed) => {
                    store.set_wind_average(speed);
                    Some(speed)
                }
                Err(err) => {
                    log_warn!("Speed update skipped: {}", err);
                    None
                }
            }
        };

        let average = store.wind_average();
        let new_gust = average > store.wind_max();
        if new_gust {
            store.set_wind_max(average);
        }

        let direction = apparent_direction(circular_mean(samples), store.wind_zero_offset());
        store.set_wind_apparent_dir(direction);

        CycleReport::Updated {
            speed,
            direction,
            new_gust,
        }
    }
}

impl Default for WindCalculator {
    fn default() -> Self {
        Self::new(STALE_AFTER_MS)
    }
}
