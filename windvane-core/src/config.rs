//! Wind Core Configuration
//!
//! Timing windows and limits for one [`Wind`](crate::Wind) instance. The
//! defaults are the values the sensor was characterised with; hosts change
//! them only for sensors with different contact hardware.

use crate::constants::buffers::ALARM_SPEED_LIMIT;
use crate::constants::timing::{DEBOUNCE_MS, DEBOUNCE_US, STALE_AFTER_MS, US_PER_MS};
use crate::errors::{WindError, WindResult};
use crate::time::{Micros, Millis};

/// Timing windows and limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WindConfig {
    /// Minimum spacing of accepted edges on one channel, milliseconds
    pub debounce_ms: Millis,
    /// The same window in microseconds, applied to edge snapshots
    pub debounce_us: Micros,
    /// Time without a speed edge after which the wind is reported calm
    pub stale_after_ms: Millis,
    /// Upper clamp for the operator's alarm speed
    pub alarm_speed_limit: i32,
}

impl WindConfig {
    /// Set both debounce windows from a millisecond value
    pub fn with_debounce_ms(mut self, debounce_ms: Millis) -> Self {
        self.debounce_ms = debounce_ms;
        self.debounce_us = debounce_ms.saturating_mul(US_PER_MS);
        self
    }

    /// Set the staleness window
    pub fn with_stale_after_ms(mut self, stale_after_ms: Millis) -> Self {
        self.stale_after_ms = stale_after_ms;
        self
    }

    /// Set the alarm speed clamp
    pub fn with_alarm_speed_limit(mut self, limit: i32) -> Self {
        self.alarm_speed_limit = limit;
        self
    }

    /// Check the windows are usable together
    pub fn validate(&self) -> WindResult<()> {
        if self.debounce_ms == 0 || self.debounce_us == 0 {
            return Err(WindError::InvalidConfig {
                reason: "debounce window must be non-zero",
            });
        }

        // Both channels must agree on what a bounce is
        let lower = self.debounce_ms.saturating_sub(1).saturating_mul(US_PER_MS);
        let upper = self.debounce_ms.saturating_mul(US_PER_MS);
        if self.debounce_us <= lower || self.debounce_us > upper {
            return Err(WindError::InvalidConfig {
                reason: "microsecond debounce does not match millisecond debounce",
            });
        }

        if self.stale_after_ms <= self.debounce_ms {
            return Err(WindError::InvalidConfig {
                reason: "staleness window must exceed debounce window",
            });
        }

        if self.alarm_speed_limit < 0 {
            return Err(WindError::InvalidConfig {
                reason: "alarm speed limit must not be negative",
            });
        }

        Ok(())
    }
}

impl Default for WindConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEBOUNCE_MS,
            debounce_us: DEBOUNCE_US,
            stale_after_ms: STALE_AFTER_MS,
            alarm_speed_limit: ALARM_SPEED_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = WindConfig::default();
        assert_eq!(config.debounce_ms, 20);
        assert_eq!(config.debounce_us, 20_000);
        assert_eq!(config.stale_after_ms, 3000);
        assert_eq!(config.alarm_speed_limit, 99);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_keeps_windows_consistent() {
        let config = WindConfig::default().with_debounce_ms(5).with_stale_after_ms(1000);
        assert_eq!(config.debounce_us, 5_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_debounce_rejected() {
        let config = WindConfig::default().with_debounce_ms(0);
        assert!(matches!(config.validate(), Err(WindError::InvalidConfig { .. })));
    }

    #[test]
    fn mismatched_windows_rejected() {
        let config = WindConfig { debounce_us: 2_000, ..WindConfig::default() };
        assert!(matches!(config.validate(), Err(WindError::InvalidConfig { .. })));

        let config = WindConfig { debounce_us: 20_001, ..WindConfig::default() };
        assert!(config.validate().is_err());

        // Sub-millisecond refinement of the same window is fine
        let config = WindConfig { debounce_us: 19_500, ..WindConfig::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn staleness_must_exceed_debounce() {
        let config = WindConfig::default().with_stale_after_ms(20);
        assert_eq!(
            config.validate(),
            Err(WindError::InvalidConfig {
                reason: "staleness window must exceed debounce window"
            })
        );
    }

    #[test]
    fn negative_alarm_limit_rejected() {
        let config = WindConfig::default().with_alarm_speed_limit(-1);
        assert!(config.validate().is_err());
    }
}
