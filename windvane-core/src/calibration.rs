//! Pulse Period to Wind Speed
//!
//! The rotor does not turn linearly with wind speed: at low speed bearing
//! friction dominates, at high speed the cups start to stall. The factory
//! fitted one quadratic per regime, and [`SpeedRange`] picks the curve from
//! the rotation rate.
//!
//! ```text
//! rps = 100_000_000 / period_us            (rev/s × 100)
//!
//! Low   rps <  323   r = 10·rps
//!                    (r²/-105 + 25476·r/100 - 12260) / factor / 10
//! Mid   rps < 5436   (rps²/2222 + 19099·rps/100 + 9638) / factor
//! High  otherwise    ((rps²/1042)·100 - 83147·rps/100 + 2866500) / factor
//! ```
//!
//! All arithmetic is `i64` integer maths with multiplication before
//! division inside each term, so the low and mid segments reproduce the
//! factory's fixed-point results exactly. The high segment's linear term is
//! the factory's -8.3147 per unit of rps. Results below zero are floored at
//! zero.

use crate::constants::calibration::*;
use crate::errors::{WindError, WindResult};

/// Calibration segment for a rotation rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpeedRange {
    /// Below ~8 mph, friction-dominated
    Low,
    /// ~8 to ~136 mph
    Mid,
    /// Above ~136 mph
    High,
}

impl SpeedRange {
    /// Segment responsible for `rps` (rev/s × 100)
    pub fn for_rps(rps: i64) -> Self {
        if rps < LOW_RANGE_RPS_LIMIT {
            Self::Low
        } else if rps < MID_RANGE_RPS_LIMIT {
            Self::Mid
        } else {
            Self::High
        }
    }

    /// Evaluate this segment's curve, before the zero floor
    fn evaluate(self, rps: i64, factor: i64) -> i64 {
        match self {
            Self::Low => {
                let r = rps * LOW_RANGE_PRECISION;
                let raw = (r * r) / LOW_SQUARE_DIVISOR
                    + (LOW_LINEAR_NUMERATOR * r) / LOW_LINEAR_DENOMINATOR
                    + LOW_OFFSET;
                raw / factor / LOW_RANGE_PRECISION
            }
            Self::Mid => {
                let raw = (rps * rps) / MID_SQUARE_DIVISOR
                    + (MID_LINEAR_NUMERATOR * rps) / MID_LINEAR_DENOMINATOR
                    + MID_OFFSET;
                raw / factor
            }
            Self::High => {
                let raw = ((rps * rps) / HIGH_SQUARE_DIVISOR) * HIGH_SQUARE_MULTIPLIER
                    + (HIGH_LINEAR_NUMERATOR * rps) / HIGH_LINEAR_DENOMINATOR
                    + HIGH_OFFSET;
                raw / factor
            }
        }
    }
}

/// Rotation rate in rev/s × 100 for a pulse period in microseconds
pub fn rps_from_period(period_us: u32) -> WindResult<i64> {
    if period_us == 0 {
        return Err(WindError::ZeroPeriod);
    }
    Ok(RPS_PERIOD_NUMERATOR / period_us as i64)
}

/// Calibrated speed for a rotation rate
pub fn speed_from_rps(rps: i64, factor: i32) -> WindResult<i32> {
    if factor == 0 {
        return Err(WindError::ZeroCalibrationFactor);
    }
    let speed = SpeedRange::for_rps(rps).evaluate(rps, factor as i64).max(0);
    Ok(speed.min(i32::MAX as i64) as i32)
}

/// Calibrated speed for a pulse period in microseconds
pub fn speed_from_period(period_us: u32, factor: i32) -> WindResult<i32> {
    speed_from_rps(rps_from_period(period_us)?, factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_boundaries() {
        assert_eq!(SpeedRange::for_rps(0), SpeedRange::Low);
        assert_eq!(SpeedRange::for_rps(322), SpeedRange::Low);
        assert_eq!(SpeedRange::for_rps(323), SpeedRange::Mid);
        assert_eq!(SpeedRange::for_rps(5435), SpeedRange::Mid);
        assert_eq!(SpeedRange::for_rps(5436), SpeedRange::High);
    }

    #[test]
    fn period_to_rps() {
        assert_eq!(rps_from_period(333_333), Ok(300));
        assert_eq!(rps_from_period(308_641), Ok(324));
        assert_eq!(rps_from_period(1_000_000), Ok(100));
        assert_eq!(rps_from_period(0), Err(WindError::ZeroPeriod));
    }

    #[test]
    fn low_range_uses_precision_path() {
        // r = 3000: -85714 + 764280 - 12260 = 666306, / 1 / 10
        assert_eq!(speed_from_rps(300, 1), Ok(66_630));
        // The mid curve would give 40 + 57297 + 9638
        assert_ne!(speed_from_rps(300, 1), Ok(66_975));
    }

    #[test]
    fn mid_range_above_boundary() {
        // 47 + 61880 + 9638
        assert_eq!(speed_from_rps(324, 1), Ok(71_565));
        // 46 + 61689 + 9638
        assert_eq!(speed_from_rps(323, 1), Ok(71_373));
    }

    #[test]
    fn high_range() {
        // 28359·100 - 4519870 + 2866500
        assert_eq!(speed_from_rps(5436, 1), Ok(1_182_530));
    }

    #[test]
    fn high_range_linear_term_is_scaled_down() {
        // 29614·100 - 4618815 + 2866500; an unscaled -8314700·rps would go negative
        assert_eq!(speed_from_rps(5555, 1), Ok(1_209_085));
        for rps in [5436, 5555, 6000, 8000] {
            assert!(speed_from_rps(rps, 1).map_or(false, |s| s > 0), "rps {}", rps);
        }
    }

    #[test]
    fn factor_divides_result() {
        assert_eq!(speed_from_rps(324, 10), Ok(7_156));
        assert_eq!(speed_from_rps(300, 2), Ok(33_315));
    }

    #[test]
    fn zero_factor_rejected() {
        assert_eq!(speed_from_rps(300, 0), Err(WindError::ZeroCalibrationFactor));
    }

    #[test]
    fn negative_results_floor_at_zero() {
        // Rotor barely moving: the low curve dips below zero
        assert_eq!(speed_from_rps(1, 1), Ok(0));
    }

    #[test]
    fn end_to_end_from_period() {
        assert_eq!(speed_from_period(333_333, 1), Ok(66_630));
        assert_eq!(speed_from_period(0, 1), Err(WindError::ZeroPeriod));
    }

    #[test]
    fn speed_increases_through_low_and_mid_ranges() {
        let mut prev = 0;
        for rps in 33..5436 {
            let speed = speed_from_rps(rps, 1).unwrap();
            assert!(speed >= prev, "speed dropped at rps {}", rps);
            prev = speed;
        }
    }
}
