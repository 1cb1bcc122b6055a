//! Constants for the wind instrument core
//!
//! Centralised numeric values used by edge capture, correlation and the
//! calibration curve. Every value carries its unit in the name.
//!
//! ## Organization
//!
//! - **Timing**: Debounce and staleness windows, clock conversions
//! - **Calibration**: Factory-fitted speed curve coefficients
//! - **Buffers**: Direction sample buffer size and trig table geometry

/// Debounce, staleness and clock conversion constants.
pub mod timing;

/// Anemometer calibration curve coefficients.
pub mod calibration;

/// Buffer sizes and lookup-table geometry.
pub mod buffers;

// Re-export commonly used constants for convenience
pub use timing::{DEBOUNCE_MS, DEBOUNCE_US, STALE_AFTER_MS};

pub use calibration::{LOW_RANGE_RPS_LIMIT, MID_RANGE_RPS_LIMIT, RPS_PERIOD_NUMERATOR};

pub use buffers::{DIRECTION_BUFFER_SIZE, TRIG_TABLE_SIZE};
