//! Timing Constants
//!
//! Debounce windows, the "no wind" staleness window and clock conversions.
//! All comparisons against these values are elapsed-time comparisons on
//! wrapping 32-bit counters.

// ===== TIME UNIT CONVERSIONS =====

/// Microseconds per millisecond.
pub const US_PER_MS: u32 = 1000;

/// Milliseconds per second.
pub const MS_PER_SECOND: u32 = 1000;

// ===== DEBOUNCE =====

/// Minimum spacing between two accepted edges on one channel (milliseconds).
///
/// The anemometer tops out near 60 rev/s at 140 knots, so a genuine edge
/// never arrives faster than ~16 ms after the previous one. Anything closer
/// is reed contact bounce.
pub const DEBOUNCE_MS: u32 = 20;

/// Minimum spacing between two edges checked by the correlator (microseconds).
///
/// Same window as [`DEBOUNCE_MS`] at microsecond resolution.
pub const DEBOUNCE_US: u32 = DEBOUNCE_MS * US_PER_MS;

// ===== STALENESS =====

/// Inactivity window after which the rotor is considered stopped (milliseconds).
///
/// The slowest calibrated rotation is roughly 0.33 rev/s, one edge every
/// three seconds. No edge for longer than this means no wind.
pub const STALE_AFTER_MS: u32 = 3000;

// ===== SCHEDULING =====

/// Typical cadence of the periodic wind calculation (milliseconds).
///
/// One calculation per NMEA reporting interval.
pub const DEFAULT_REPORT_INTERVAL_MS: u32 = MS_PER_SECOND;
