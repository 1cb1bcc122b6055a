//! Error Types for the Wind Signal Path
//!
//! ## Design Philosophy
//!
//! Nothing in the signal path is allowed to fail loudly. A bounced reed, a
//! wrapped microsecond counter or a vane edge that arrived out of order all
//! mean the same thing: this cycle contributes no update. The types here
//! exist so that the reason is still visible to logs and tests.
//!
//! - `Rejection`: why the correlator discarded an edge snapshot
//! - `WindError`: configuration faults and arithmetic guards
//!
//! Both are small `Copy` enums with `&'static str` payloads only, so they can
//! be returned from hot paths without allocation.
//!
//! ```rust
//! use windvane_core::{Correlator, EdgeSnapshot, Rejection};
//! use windvane_core::buffer::CircularBuffer;
//!
//! let mut correlator = Correlator::default();
//! let mut samples: CircularBuffer<u16, 3> = CircularBuffer::new();
//!
//! // Speed edges 5 ms apart: contact bounce
//! let snapshot = EdgeSnapshot {
//!     speed_prev_us: 1_000_000,
//!     speed_cur_us: 1_005_000,
//!     dir_prev_us: 1_002_000,
//!     dir_cur_us: 1_102_000,
//! };
//! match correlator.correlate(snapshot, &mut samples) {
//!     Err(Rejection::SpeedBounce { .. }) => {} // dropped, buffer untouched
//!     other => panic!("unexpected {:?}", other),
//! }
//! assert!(samples.is_empty());
//! ```

use thiserror_no_std::Error;

/// Result type for fallible wind operations
pub type WindResult<T> = Result<T, WindError>;

/// Configuration faults and arithmetic guards
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindError {
    /// No pulse period has been measured yet
    #[error("Pulse period is zero")]
    ZeroPeriod,

    /// The external store returned a zero calibration factor
    #[error("Calibration factor is zero")]
    ZeroCalibrationFactor,

    /// A configuration value is unusable
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// What is wrong with the configuration
        reason: &'static str,
    },
}

/// Why an edge snapshot produced no direction sample
///
/// Rejections are expected during normal operation and are never surfaced as
/// faults. Only the speed period survives a [`Rejection::PhaseOutOfRange`] or
/// [`Rejection::AlreadyProcessed`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Speed edges out of order, the microsecond counter wrapped
    #[error("Speed edges out of order (rollover)")]
    SpeedRollover,

    /// Speed edges closer than the debounce window
    #[error("Speed edges {interval_us}us apart (bounce)")]
    SpeedBounce {
        /// Measured spacing of the two speed edges
        interval_us: u32,
    },

    /// Direction edges out of order, the microsecond counter wrapped
    #[error("Direction edges out of order (rollover)")]
    DirectionRollover,

    /// Direction edges closer than the debounce window
    #[error("Direction edges {interval_us}us apart (bounce)")]
    DirectionBounce {
        /// Measured spacing of the two direction edges
        interval_us: u32,
    },

    /// At least one of the four edges has never been captured
    #[error("Edge timestamp missing")]
    MissingEdge,

    /// A direction edge does not follow its speed edge
    #[error("Direction edge precedes speed edge")]
    NonCausal,

    /// Phase lag is zero or longer than a full rotor turn
    #[error("Phase {phase_us}us outside period {period_us}us")]
    PhaseOutOfRange {
        /// Averaged speed-to-direction lag
        phase_us: u32,
        /// Averaged rotor period
        period_us: u32,
    },

    /// The snapshot's direction edge was already turned into a sample
    #[error("Edge pair already processed")]
    AlreadyProcessed,
}

#[cfg(feature = "defmt")]
impl defmt::Format for WindError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::ZeroPeriod => defmt::write!(fmt, "Pulse period is zero"),
            Self::ZeroCalibrationFactor => defmt::write!(fmt, "Calibration factor is zero"),
            Self::InvalidConfig { reason } => defmt::write!(fmt, "Invalid configuration: {}", reason),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Rejection {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::SpeedRollover => defmt::write!(fmt, "Speed rollover"),
            Self::SpeedBounce { interval_us } => defmt::write!(fmt, "Speed bounce {}us", interval_us),
            Self::DirectionRollover => defmt::write!(fmt, "Direction rollover"),
            Self::DirectionBounce { interval_us } => {
                defmt::write!(fmt, "Direction bounce {}us", interval_us)
            }
            Self::MissingEdge => defmt::write!(fmt, "Edge missing"),
            Self::NonCausal => defmt::write!(fmt, "Non-causal edges"),
            Self::PhaseOutOfRange { phase_us, period_us } => {
                defmt::write!(fmt, "Phase {}us outside {}us", phase_us, period_us)
            }
            Self::AlreadyProcessed => defmt::write!(fmt, "Already processed"),
        }
    }
}
