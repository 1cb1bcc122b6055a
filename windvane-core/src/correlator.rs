//! Speed/Direction Correlator
//!
//! Turns one [`EdgeSnapshot`] into a rotor period and, when the timing is
//! usable, a vane angle pushed into the direction sample buffer.
//!
//! ## Why Phase Gives Direction
//!
//! The speed reed and the direction sensor share one rotating shaft but
//! close at different points of the turn. The lag between a speed edge and
//! the next direction edge, as a fraction of a full turn, is the vane's
//! offset from the rotor's reference mark:
//!
//! ```text
//! speed   ─┐        ┌────────────┐        ┌───
//!          └────────┘            └────────┘
//! dir     ────┐        ┌────────────┐        ┌
//!             └────────┘            └────────┘
//!          |←phase→|
//!          |←──────── period ───────→|
//!
//! angle = phase × 360 / period
//! ```
//!
//! ## Validation Order
//!
//! 1. Speed pair in order and at least one debounce window apart
//! 2. Direction pair in order and at least one debounce window apart
//! 3. No zero timestamps; direction edges follow their speed edges
//!
//! A failed check drops the snapshot without touching the period or the
//! buffer. Past validation the period is always refreshed, even when the
//! phase turns out unusable.

use crate::buffer::CircularBuffer;
use crate::capture::EdgeSnapshot;
use crate::constants::timing::DEBOUNCE_US;
use crate::errors::Rejection;
use crate::time::Micros;

/// Full turn in degrees
const DEGREES_PER_TURN: u64 = 360;

/// Outcome of a successful correlation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Correlation {
    /// Averaged rotor period in microseconds
    pub period_us: u32,
    /// Averaged speed-to-direction lag in microseconds
    pub phase_us: u32,
    /// Vane angle in degrees, `0..360`
    pub angle: u16,
}

/// Stateful correlator holding the latest period
#[derive(Debug, Clone)]
pub struct Correlator {
    debounce_us: Micros,
    period_us: u32,
    /// Direction edge of the last snapshot turned into a sample
    last_dir_us: Option<Micros>,
}

impl Correlator {
    /// Correlator with a custom debounce window in microseconds
    pub const fn new(debounce_us: Micros) -> Self {
        Self {
            debounce_us,
            period_us: 0,
            last_dir_us: None,
        }
    }

    /// Latest validated rotor period in microseconds, 0 before the first one
    pub fn period_us(&self) -> u32 {
        self.period_us
    }

    /// Forget the period and the processed-edge marker
    pub fn reset(&mut self) {
        self.period_us = 0;
        self.last_dir_us = None;
    }

    /// Validate a snapshot, refresh the period and push a direction sample
    ///
    /// On `Err` the buffer is unchanged. The period is refreshed for every
    /// snapshot that passes timing validation, including those rejected with
    /// [`Rejection::PhaseOutOfRange`] or [`Rejection::AlreadyProcessed`].
    pub fn correlate<const N: usize>(
        &mut self,
        snapshot: EdgeSnapshot,
        samples: &mut CircularBuffer<u16, N>,
    ) -> Result<Correlation, Rejection> {
        validate(&snapshot, self.debounce_us)?;

        let EdgeSnapshot {
            speed_prev_us: ws_prev,
            speed_cur_us: ws_cur,
            dir_prev_us: wd_prev,
            dir_cur_us: wd_cur,
        } = snapshot;

        // Both channels see the same rotor, average out their jitter
        let period = average(ws_cur - ws_prev, wd_cur - wd_prev);
        self.period_us = period;

        if self.last_dir_us == Some(wd_cur) {
            return Err(Rejection::AlreadyProcessed);
        }
        self.last_dir_us = Some(wd_cur);

        let phase = average(wd_prev - ws_prev, wd_cur - ws_cur);
        if phase == 0 || phase >= period {
            return Err(Rejection::PhaseOutOfRange {
                phase_us: phase,
                period_us: period,
            });
        }

        let angle = (phase as u64 * DEGREES_PER_TURN / period as u64) as u16;
        samples.push(angle);

        Ok(Correlation {
            period_us: period,
            phase_us: phase,
            angle,
        })
    }
}

impl Default for Correlator {
    fn default() -> Self {
        Self::new(DEBOUNCE_US)
    }
}

/// Timing checks, see module docs for the order
fn validate(snap: &EdgeSnapshot, debounce_us: Micros) -> Result<(), Rejection> {
    if snap.speed_prev_us >= snap.speed_cur_us {
        return Err(Rejection::SpeedRollover);
    }
    let interval_us = snap.speed_cur_us - snap.speed_prev_us;
    if interval_us < debounce_us {
        return Err(Rejection::SpeedBounce { interval_us });
    }

    if snap.dir_prev_us >= snap.dir_cur_us {
        return Err(Rejection::DirectionRollover);
    }
    let interval_us = snap.dir_cur_us - snap.dir_prev_us;
    if interval_us < debounce_us {
        return Err(Rejection::DirectionBounce { interval_us });
    }

    if snap.speed_prev_us == 0 || snap.speed_cur_us == 0 || snap.dir_prev_us == 0 || snap.dir_cur_us == 0 {
        return Err(Rejection::MissingEdge);
    }
    if snap.dir_prev_us <= snap.speed_prev_us || snap.dir_cur_us < snap.speed_cur_us {
        return Err(Rejection::NonCausal);
    }

    Ok(())
}

/// Mean of two durations without u32 overflow
fn average(a: u32, b: u32) -> u32 {
    ((a as u64 + b as u64) / 2) as u32
}
