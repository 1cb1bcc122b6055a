//! Circular Mean of Vane Angles
//!
//! Direction wraps at 360°, so an arithmetic mean of 350° and 10° gives 180°,
//! the exact opposite of the right answer. Each sample is treated as a unit
//! vector instead; the mean direction is the angle of the vector sum:
//!
//! ```text
//! x = Σ cos(θᵢ)     y = Σ sin(θᵢ)     mean = atan2(y, x)
//! ```
//!
//! Sines and cosines come from the fixed-point table in [`crate::trig`];
//! only the final `atan2` runs in floating point (`libm`, so it works
//! without std).

use crate::trig::{icos_long, isin_long, RAW_TO_UNIT};

/// Offset between the table's phase origin and the bow, in degrees
pub const PHASE_ORIGIN_DEG: i32 = 90;

/// Vector mean of angles in degrees, rounded, in `-180..=180`
///
/// Returns 0 when the vector sum is exactly zero: no samples, or samples
/// that cancel (0° and 180°, 90° and 270°).
pub fn circular_mean<'a, I>(samples: I) -> i32
where
    I: IntoIterator<Item = &'a u16>,
{
    let mut x: i64 = 0;
    let mut y: i64 = 0;
    let mut count: u32 = 0;

    for &angle in samples {
        x += icos_long(angle as i32) as i64;
        y += isin_long(angle as i32) as i64;
        count += 1;
    }

    if x == 0 && y == 0 {
        return 0;
    }

    let xf = x as f32 * RAW_TO_UNIT / count as f32;
    let yf = y as f32 * RAW_TO_UNIT / count as f32;

    libm::roundf(libm::atan2f(yf, xf).to_degrees()) as i32
}

/// Apparent wind direction, degrees clockwise from the bow in `0..360`
///
/// Shifts the circular mean from the table origin to the bow, applies the
/// operator's zero offset and folds the result into one turn.
pub fn apparent_direction(mean: i32, zero_offset: i32) -> u16 {
    let dir = mean as i64 - PHASE_ORIGIN_DEG as i64 + zero_offset as i64;
    dir.rem_euclid(360) as u16
}

/// Fold any integer angle into `0..360`
pub fn normalize_degrees(angle: i32) -> u16 {
    angle.rem_euclid(360) as u16
}
