//! Signal-processing core for a marine wind instrument
//!
//! Turns raw pulse edges from an anemometer (speed reed) and a wind vane
//! (direction pulse) into calibrated apparent wind speed and direction.
//!
//! Key constraints:
//! - Edge handlers run in interrupt context: no allocation, no blocking
//! - Everything else runs from one periodic task
//! - Integer arithmetic on the calibration path
//!
//! ```no_run
//! use windvane_core::{EdgeCapture, MemoryStore, Wind, WindConfig};
//! use windvane_core::time::{Clock, SystemClock};
//!
//! static CAPTURE: EdgeCapture = EdgeCapture::new();
//!
//! let clock = SystemClock::new();
//! let mut wind: Wind<'_, MemoryStore> =
//!     Wind::new(&CAPTURE, MemoryStore::default(), WindConfig::default(), &clock).unwrap();
//!
//! // Speed reed interrupt: CAPTURE.on_speed_edge(&clock);
//! // Direction interrupt:  CAPTURE.on_direction_edge(&clock);
//!
//! // Periodic task
//! wind.calc_speed_and_dir();
//! wind.calc_wind_data(clock.millis());
//! let outputs = wind.outputs();
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod logging;

pub mod buffer;
pub mod calculator;
pub mod calibration;
pub mod capture;
pub mod config;
pub mod constants;
pub mod correlator;
pub mod direction;
pub mod errors;
pub mod store;
pub mod time;
pub mod trig;
pub mod wind;

// Public API
pub use buffer::CircularBuffer;
pub use calculator::{CycleReport, WindCalculator};
pub use capture::{EdgeCapture, EdgeSnapshot};
pub use config::WindConfig;
pub use correlator::{Correlation, Correlator};
pub use errors::{Rejection, WindError, WindResult};
pub use store::{InstrumentStore, MemoryStore, WindOutputs};
pub use wind::Wind;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
