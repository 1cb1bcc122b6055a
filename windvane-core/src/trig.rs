//! Fixed-Point Trigonometry on Integer Degrees
//!
//! ## Motivation
//!
//! The direction average needs a sine and cosine per buffered sample every
//! calculation cycle. Small masthead controllers often lack an FPU, where a
//! software `sinf` costs thousands of cycles. A 91-entry table covering one
//! quarter wave answers the same question with an index and a sign flip.
//!
//! ## Table Design
//!
//! Entries are `sin(θ)` for θ = 0°..=90° scaled to the full `u16` range:
//!
//! ```text
//! SIN_TABLE[θ] = round(sin(θ) × 65535)
//! ```
//!
//! Any integer angle is folded onto the table:
//!
//! ```text
//! 1. |x| mod 360, remember the sign          sin(-x) = -sin(x)
//! 2. > 180° → subtract 180°, flip the sign  sin(x) = -sin(x - 180°)
//! 3. > 90°  → mirror to 180° - x            sin(x) = sin(180° - x)
//! ```
//!
//! Cosine is `sin(x + 90°)`. Fractional angles go through [`fsin`], which
//! interpolates linearly between neighbouring integer degrees.
//!
//! Memory: 91 × 2 bytes = 182 bytes of flash.

use crate::constants::buffers::{TRIG_FULL_SCALE, TRIG_TABLE_SIZE};

/// Converts a raw table value to a unit fraction (1 / 65535)
pub const RAW_TO_UNIT: f32 = 1.0 / TRIG_FULL_SCALE as f32;

/// Quarter-wave sine table, 0° to 90° in 1° steps, 65535 = 1.0
pub const SIN_TABLE: [u16; TRIG_TABLE_SIZE] = [
    0, 1144, 2287, 3430, 4571, 5712, 6850, 7987, 9121, 10252, // 0-9°
    11380, 12505, 13625, 14742, 15854, 16962, 18064, 19161, 20251, 21336, // 10-19°
    22414, 23486, 24550, 25607, 26655, 27696, 28729, 29752, 30767, 31772, // 20-29°
    32768, 33753, 34728, 35693, 36647, 37589, 38521, 39440, 40347, 41243, // 30-39°
    42125, 42995, 43851, 44695, 45524, 46340, 47142, 47929, 48702, 49460, // 40-49°
    50203, 50930, 51642, 52339, 53019, 53683, 54331, 54962, 55577, 56174, // 50-59°
    56755, 57318, 57864, 58392, 58902, 59395, 59869, 60325, 60763, 61182, // 60-69°
    61583, 61965, 62327, 62671, 62996, 63302, 63588, 63855, 64103, 64331, // 70-79°
    64539, 64728, 64897, 65047, 65176, 65286, 65375, 65445, 65495, 65525, // 80-89°
    65535, // 90°
];

/// Sine on an `i64` angle so `x + 90` never overflows for `i32` callers
fn sin_raw(x: i64) -> i32 {
    let mut positive = x >= 0;
    let mut deg = x.unsigned_abs() % 360;

    if deg > 180 {
        deg -= 180;
        positive = !positive;
    }
    if deg > 90 {
        deg = 180 - deg;
    }

    let value = SIN_TABLE[deg as usize] as i32;
    if positive {
        value
    } else {
        -value
    }
}

/// Fixed-point sine of an integer angle in degrees
///
/// Returns a value in `-65535..=65535` where 65535 represents 1.0.
/// Accepts any sign and magnitude.
pub fn isin_long(x: i32) -> i32 {
    sin_raw(x as i64)
}

/// Fixed-point cosine of an integer angle in degrees, `isin_long(x + 90)`
pub fn icos_long(x: i32) -> i32 {
    sin_raw(x as i64 + 90)
}

/// Sine of an integer angle in degrees as a float in `[-1, 1]`
pub fn isin(x: i32) -> f32 {
    isin_long(x) as f32 * RAW_TO_UNIT
}

/// Cosine of an integer angle in degrees as a float in `[-1, 1]`
pub fn icos(x: i32) -> f32 {
    icos_long(x) as f32 * RAW_TO_UNIT
}

/// Tangent of an integer angle in degrees
///
/// Returns `None` where the cosine is zero (x ≡ 90° mod 180°).
pub fn itan(x: i32) -> Option<f32> {
    let cos = icos_long(x);
    if cos == 0 {
        return None;
    }
    Some(isin_long(x) as f32 / cos as f32)
}

/// Sine of a fractional angle in degrees
///
/// Interpolates linearly between the table values at `floor(d)` and
/// `floor(d) + 1`. Continuous and monotonic within each quarter wave, not
/// more precise than the table. Non-finite input yields 0.
pub fn fsin(d: f32) -> f32 {
    if !d.is_finite() {
        return 0.0;
    }

    let base = libm::floorf(d);
    let frac = d - base;
    let idx = base as i64;

    let a = sin_raw(idx) as f32 * RAW_TO_UNIT;
    let b = sin_raw(idx + 1) as f32 * RAW_TO_UNIT;
    a + frac * (b - a)
}

/// Cosine of a fractional angle in degrees, `fsin(d + 90)`
pub fn fcos(d: f32) -> f32 {
    fsin(d + 90.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_endpoints() {
        assert_eq!(isin_long(0), 0);
        assert_eq!(isin_long(30), 32768);
        assert_eq!(isin_long(90), 65535);
        assert_eq!(isin_long(180), 0);
        assert_eq!(isin_long(270), -65535);
        assert_eq!(isin_long(360), 0);
    }

    #[test]
    fn quadrant_folding() {
        // Second quadrant mirrors the first
        assert_eq!(isin_long(150), isin_long(30));
        // Third and fourth quadrants are negative
        assert_eq!(isin_long(210), -isin_long(30));
        assert_eq!(isin_long(330), -isin_long(30));
        // Large magnitudes reduce modulo 360
        assert_eq!(isin_long(720 + 45), isin_long(45));
        assert_eq!(isin_long(-720 - 45), -isin_long(45));
    }

    #[test]
    fn odd_symmetry() {
        for a in -400..400 {
            assert_eq!(isin_long(-a), -isin_long(a), "angle {}", a);
        }
    }

    #[test]
    fn cosine_is_shifted_sine() {
        assert_eq!(icos_long(0), 65535);
        assert_eq!(icos_long(90), 0);
        assert_eq!(icos_long(180), -65535);
        assert_eq!(icos_long(60), 32768);
        for a in -400..400 {
            assert_eq!(icos_long(a), isin_long(a + 90));
        }
    }

    #[test]
    fn extreme_inputs_do_not_overflow() {
        // 2147483648 mod 360 = 128
        assert_eq!(isin_long(i32::MIN), -isin_long(128));
        // 2147483647 + 90 mod 360 = 217
        assert_eq!(icos_long(i32::MAX), isin_long(217));
    }

    #[test]
    fn float_wrappers_are_unit_scaled() {
        assert!((isin(90) - 1.0).abs() < 1e-6);
        assert!((icos(180) + 1.0).abs() < 1e-6);
        assert!((isin(30) - 0.5).abs() < 1e-4);
    }

    #[test]
    fn tangent() {
        let t45 = itan(45).unwrap();
        assert!((t45 - 1.0).abs() < 1e-3);

        let t135 = itan(135).unwrap();
        assert!((t135 + 1.0).abs() < 1e-3);

        assert!(itan(90).is_none());
        assert!(itan(-90).is_none());
        assert!(itan(270).is_none());
    }

    #[test]
    fn fractional_sine_interpolates() {
        let lo = isin(30);
        let hi = isin(31);
        let mid = fsin(30.5);
        assert!(mid > lo && mid < hi);
        assert!((mid - (lo + hi) / 2.0).abs() < 1e-6);

        // Whole degrees reproduce the table
        assert_eq!(fsin(45.0), isin(45));
    }

    #[test]
    fn fractional_sine_negative_angles() {
        // floor keeps the fraction positive below zero
        let v = fsin(-0.5);
        assert!(v < 0.0 && v > isin(-1));
        assert!((fsin(-30.25) + fsin(30.25)).abs() < 1e-3);
    }

    #[test]
    fn fractional_sine_monotonic_in_quarter_wave() {
        let mut prev = fsin(0.0);
        let mut d = 0.25;
        while d <= 90.0 {
            let v = fsin(d);
            assert!(v >= prev, "not monotonic at {}", d);
            prev = v;
            d += 0.25;
        }
    }

    #[test]
    fn fractional_sine_rejects_non_finite() {
        assert_eq!(fsin(f32::NAN), 0.0);
        assert_eq!(fsin(f32::INFINITY), 0.0);
    }

    #[test]
    fn fractional_cosine() {
        assert!((fcos(0.0) - 1.0).abs() < 1e-6);
        assert!(fcos(90.0).abs() < 1e-6);
    }
}
