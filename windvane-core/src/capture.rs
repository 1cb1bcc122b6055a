//! Interrupt-Safe Edge Capture
//!
//! ## Overview
//!
//! Records when the speed reed and the direction sensor fire. The two
//! handlers run in interrupt context, so they do the minimum: debounce,
//! shift the previous timestamp, store the new one, return.
//!
//! ```text
//! speed ISR ──→ on_speed_pulse ──┐
//!                                ├──→ CaptureState ──→ snapshot() ──→ Correlator
//! dir ISR ────→ on_direction_pulse┘   (critical section)
//! ```
//!
//! ## Correlating Independent Sources
//!
//! Speed and direction edges come from separate switches with no common
//! clock. When a direction edge is accepted, the speed channel's current
//! and previous timestamps are copied next to it. That copy is what the
//! correlator later works from, so the four values it sees always belong to
//! the same moment, even if more speed edges have arrived since.
//!
//! ## Concurrency
//!
//! All state sits in one `critical_section::Mutex<RefCell<_>>`. Each handler
//! and each reader is a single critical section, so a reader never observes
//! a half-written channel. `EdgeCapture::new` is `const`, allowing a
//! `static` shared between interrupt handlers and the periodic task:
//!
//! ```rust
//! use windvane_core::EdgeCapture;
//! use windvane_core::time::{Clock, MockClock};
//!
//! static CAPTURE: EdgeCapture = EdgeCapture::new();
//!
//! let clock = MockClock::new(10_000);
//! CAPTURE.seed(clock.millis(), clock.micros());
//!
//! clock.advance_ms(100);
//! assert!(CAPTURE.on_speed_edge(&clock));
//!
//! // Contact bounce 2 ms later is ignored
//! clock.advance_ms(2);
//! assert!(!CAPTURE.on_speed_edge(&clock));
//! ```

use core::cell::RefCell;

use critical_section::Mutex;

use crate::constants::timing::DEBOUNCE_MS;
use crate::time::{Clock, Micros, Millis};

/// Consistent copy of the four timestamps the correlator needs
///
/// The speed pair is the one captured at the instant the latest direction
/// edge was accepted, not the live speed channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeSnapshot {
    /// Speed edge before `speed_cur_us`
    pub speed_prev_us: Micros,
    /// Latest speed edge at the time of the direction edge
    pub speed_cur_us: Micros,
    /// Direction edge before `dir_cur_us`
    pub dir_prev_us: Micros,
    /// Latest direction edge
    pub dir_cur_us: Micros,
}

/// Age of the last accepted speed edge as seen by the periodic task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseAge {
    /// Milliseconds since the last accepted speed edge
    pub speed_ms: Millis,
    /// The millisecond counter had wrapped and the stale pulse times were reset
    pub reseeded: bool,
}

/// One edge channel: current/previous timestamps plus debounce state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Channel {
    current_us: Micros,
    previous_us: Micros,
    last_accepted_ms: Millis,
}

impl Channel {
    const fn new() -> Self {
        Self {
            current_us: 0,
            previous_us: 0,
            last_accepted_ms: 0,
        }
    }

    /// Debounce and record an edge, returns whether it was accepted
    fn accept(&mut self, now_ms: Millis, now_us: Micros, debounce_ms: Millis) -> bool {
        if now_ms.wrapping_sub(self.last_accepted_ms) < debounce_ms {
            return false;
        }

        self.previous_us = self.current_us;
        self.current_us = now_us;
        self.last_accepted_ms = now_ms;
        true
    }

    fn seed(&mut self, now_ms: Millis, now_us: Micros) {
        self.current_us = now_us;
        self.previous_us = now_us;
        self.last_accepted_ms = now_ms;
    }
}

#[derive(Debug)]
struct CaptureState {
    speed: Channel,
    direction: Channel,
    /// Speed channel (previous, current) latched on the last direction edge
    speed_at_direction: (Micros, Micros),
    debounce_ms: Millis,
}

/// Edge timestamps for the speed and direction channels
pub struct EdgeCapture {
    state: Mutex<RefCell<CaptureState>>,
}

impl EdgeCapture {
    /// Unseeded capture with the default 20 ms debounce window
    pub const fn new() -> Self {
        Self::with_debounce_ms(DEBOUNCE_MS)
    }

    /// Unseeded capture with a custom debounce window
    pub const fn with_debounce_ms(debounce_ms: Millis) -> Self {
        Self {
            state: Mutex::new(RefCell::new(CaptureState {
                speed: Channel::new(),
                direction: Channel::new(),
                speed_at_direction: (0, 0),
                debounce_ms,
            })),
        }
    }

    /// Change the debounce window
    pub fn set_debounce_ms(&self, debounce_ms: Millis) {
        critical_section::with(|cs| {
            self.state.borrow_ref_mut(cs).debounce_ms = debounce_ms;
        });
    }

    /// Current debounce window in milliseconds
    pub fn debounce_ms(&self) -> Millis {
        critical_section::with(|cs| self.state.borrow_ref(cs).debounce_ms)
    }

    /// Set every timestamp to "now"
    ///
    /// Called once at construction of the wind component, so the first read
    /// does not see a bogus edge at time zero.
    pub fn seed(&self, now_ms: Millis, now_us: Micros) {
        critical_section::with(|cs| {
            let mut state = self.state.borrow_ref_mut(cs);
            state.speed.seed(now_ms, now_us);
            state.direction.seed(now_ms, now_us);
            state.speed_at_direction = (now_us, now_us);
        });
    }

    /// Speed reed handler, returns whether the edge passed debounce
    pub fn on_speed_pulse(&self, now_ms: Millis, now_us: Micros) -> bool {
        critical_section::with(|cs| {
            let mut state = self.state.borrow_ref_mut(cs);
            let debounce_ms = state.debounce_ms;
            state.speed.accept(now_ms, now_us, debounce_ms)
        })
    }

    /// Direction sensor handler, returns whether the edge passed debounce
    ///
    /// On acceptance the speed channel's pair is latched alongside.
    pub fn on_direction_pulse(&self, now_ms: Millis, now_us: Micros) -> bool {
        critical_section::with(|cs| {
            let mut state = self.state.borrow_ref_mut(cs);
            let debounce_ms = state.debounce_ms;
            if !state.direction.accept(now_ms, now_us, debounce_ms) {
                return false;
            }
            state.speed_at_direction = (state.speed.previous_us, state.speed.current_us);
            true
        })
    }

    /// [`on_speed_pulse`](Self::on_speed_pulse) reading both counters from a clock
    pub fn on_speed_edge<C: Clock>(&self, clock: &C) -> bool {
        self.on_speed_pulse(clock.millis(), clock.micros())
    }

    /// [`on_direction_pulse`](Self::on_direction_pulse) reading both counters from a clock
    pub fn on_direction_edge<C: Clock>(&self, clock: &C) -> bool {
        self.on_direction_pulse(clock.millis(), clock.micros())
    }

    /// Atomic copy of the latched speed pair and the direction pair
    pub fn snapshot(&self) -> EdgeSnapshot {
        critical_section::with(|cs| {
            let state = self.state.borrow_ref(cs);
            EdgeSnapshot {
                speed_prev_us: state.speed_at_direction.0,
                speed_cur_us: state.speed_at_direction.1,
                dir_prev_us: state.direction.previous_us,
                dir_cur_us: state.direction.current_us,
            }
        })
    }

    /// Millisecond time of the last accepted speed edge
    pub fn last_speed_pulse_ms(&self) -> Millis {
        critical_section::with(|cs| self.state.borrow_ref(cs).speed.last_accepted_ms)
    }

    /// Millisecond time of the last accepted direction edge
    pub fn last_direction_pulse_ms(&self) -> Millis {
        critical_section::with(|cs| self.state.borrow_ref(cs).direction.last_accepted_ms)
    }

    /// Elapsed time since the last speed edge, with a rollover guard
    ///
    /// If `now_ms` is behind a recorded pulse time the millisecond counter
    /// wrapped; the stale pulse times on both channels are reset to `now_ms`
    /// instead of producing a huge elapsed time.
    pub fn speed_pulse_age(&self, now_ms: Millis) -> PulseAge {
        critical_section::with(|cs| {
            let mut state = self.state.borrow_ref_mut(cs);
            let mut reseeded = false;

            if now_ms < state.speed.last_accepted_ms {
                state.speed.last_accepted_ms = now_ms;
                reseeded = true;
            }
            if now_ms < state.direction.last_accepted_ms {
                state.direction.last_accepted_ms = now_ms;
                reseeded = true;
            }

            PulseAge {
                speed_ms: now_ms - state.speed.last_accepted_ms,
                reseeded,
            }
        })
    }
}

impl core::fmt::Debug for EdgeCapture {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EdgeCapture")
            .field("snapshot", &self.snapshot())
            .field("debounce_ms", &self.debounce_ms())
            .finish()
    }
}

impl Default for EdgeCapture {
    fn default() -> Self {
        Self::new()
    }
}
