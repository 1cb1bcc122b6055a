//! Buffer Sizes and Table Geometry

/// Default number of direction samples averaged per calculation.
///
/// Three samples smooth vane jitter while still following a tack within
/// a couple of rotor turns.
pub const DIRECTION_BUFFER_SIZE: usize = 3;

/// Entries in the quarter-wave sine table (0° to 90° inclusive).
pub const TRIG_TABLE_SIZE: usize = 91;

/// Full-scale value of the fixed-point sine table (represents 1.0).
pub const TRIG_FULL_SCALE: u16 = u16::MAX;

/// Largest alarm speed the instrument accepts.
pub const ALARM_SPEED_LIMIT: i32 = 99;
