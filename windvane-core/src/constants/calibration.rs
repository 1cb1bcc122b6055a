//! Anemometer Calibration Constants
//!
//! Factory-fitted quadratic curves for the speed rotor, one per aerodynamic
//! regime. Inputs are `rps`, revolutions per second times 100, derived from
//! the pulse period in microseconds:
//!
//! ```text
//! rps = 100_000_000 / period_us
//! ```
//!
//! Each segment evaluates `a·rps² + b·rps + c` in integers, multiplying
//! before dividing, and the result is divided by the operator calibration
//! factor.

/// Numerator turning a period in microseconds into `rps` (rev/s × 100).
pub const RPS_PERIOD_NUMERATOR: i64 = 100_000_000;

/// Upper bound (exclusive) of the low-speed segment, roughly 8 mph.
pub const LOW_RANGE_RPS_LIMIT: i64 = 323;

/// Upper bound (exclusive) of the mid-speed segment, roughly 136 mph.
pub const MID_RANGE_RPS_LIMIT: i64 = 5436;

// ===== LOW RANGE =====
// rps is scaled by LOW_RANGE_PRECISION first, the result divided by it last.

/// Extra precision applied to `rps` in the low segment.
pub const LOW_RANGE_PRECISION: i64 = 10;

/// Divisor of the squared term (negative curvature).
pub const LOW_SQUARE_DIVISOR: i64 = -105;

/// Linear term numerator.
pub const LOW_LINEAR_NUMERATOR: i64 = 25_476;

/// Linear term denominator.
pub const LOW_LINEAR_DENOMINATOR: i64 = 100;

/// Constant term.
pub const LOW_OFFSET: i64 = -12_260;

// ===== MID RANGE =====

/// Divisor of the squared term.
pub const MID_SQUARE_DIVISOR: i64 = 2222;

/// Linear term numerator.
pub const MID_LINEAR_NUMERATOR: i64 = 19_099;

/// Linear term denominator.
pub const MID_LINEAR_DENOMINATOR: i64 = 100;

/// Constant term.
pub const MID_OFFSET: i64 = 9638;

// ===== HIGH RANGE =====

/// Divisor of the squared term, applied before [`HIGH_SQUARE_MULTIPLIER`].
pub const HIGH_SQUARE_DIVISOR: i64 = 1042;

/// Multiplier applied to the squared term after division.
pub const HIGH_SQUARE_MULTIPLIER: i64 = 100;

/// Linear term numerator (negative slope, 8.3147 knots per rev/s).
pub const HIGH_LINEAR_NUMERATOR: i64 = -83_147;

/// Linear term denominator.
pub const HIGH_LINEAR_DENOMINATOR: i64 = 100;

/// Constant term.
pub const HIGH_OFFSET: i64 = 2_866_500;
