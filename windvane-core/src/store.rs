//! Instrument State Store
//!
//! The wind core does not own calibration settings or published values. It
//! reads the operator's calibration from, and writes its results to, a
//! store shared with the rest of the instrument (display, NMEA output,
//! settings persistence). [`InstrumentStore`] is that seam.
//!
//! [`MemoryStore`] is a plain in-memory implementation, enough for hosts
//! that keep state in RAM and for tests.

/// Calibration inputs and published wind outputs
pub trait InstrumentStore {
    /// Divisor applied to the calibrated speed curve
    fn wind_factor(&self) -> i32;

    /// Degrees added to the vane reading to align it with the bow
    fn wind_zero_offset(&self) -> i32;

    /// Speed at which the wind alarm triggers, 0 for off
    fn wind_alarm_speed(&self) -> i32;

    /// Replace the alarm speed
    fn set_wind_alarm_speed(&mut self, speed: i32);

    /// Last published average speed
    fn wind_average(&self) -> i32;

    /// Publish the average speed
    fn set_wind_average(&mut self, speed: i32);

    /// Highest average seen since the last gust reset
    fn wind_max(&self) -> i32;

    /// Publish the gust maximum
    fn set_wind_max(&mut self, speed: i32);

    /// Last published apparent direction
    fn wind_apparent_dir(&self) -> u16;

    /// Publish the apparent direction, degrees clockwise from the bow
    fn set_wind_apparent_dir(&mut self, degrees: u16);

    /// Millisecond time of the last calculation
    fn wind_last_update(&self) -> u32;

    /// Record the millisecond time of a calculation
    fn set_wind_last_update(&mut self, millis: u32);
}

/// Published wind values at one point in time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WindOutputs {
    /// Apparent speed in calibrated units
    pub average: i32,
    /// Gust maximum in calibrated units
    pub max: i32,
    /// Apparent direction, degrees clockwise from the bow
    pub apparent_dir: u16,
    /// Millisecond time of the calculation that produced these values
    pub last_update: u32,
}

impl WindOutputs {
    /// Read the published values from a store
    pub fn from_store<S: InstrumentStore + ?Sized>(store: &S) -> Self {
        Self {
            average: store.wind_average(),
            max: store.wind_max(),
            apparent_dir: store.wind_apparent_dir(),
            last_update: store.wind_last_update(),
        }
    }
}

/// In-memory instrument state
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemoryStore {
    /// Calibration divisor
    pub factor: i32,
    /// Vane zero offset in degrees
    pub zero_offset: i32,
    /// Alarm speed, 0 for off
    pub alarm_speed: i32,
    /// Published values
    pub outputs: WindOutputs,
}

impl MemoryStore {
    /// Store with the given calibration and empty outputs
    pub fn new(factor: i32, zero_offset: i32) -> Self {
        Self {
            factor,
            zero_offset,
            ..Self::default()
        }
    }

    /// Set the alarm speed
    pub fn with_alarm_speed(mut self, speed: i32) -> Self {
        self.alarm_speed = speed;
        self
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self {
            factor: 1,
            zero_offset: 0,
            alarm_speed: 0,
            outputs: WindOutputs::default(),
        }
    }
}

impl InstrumentStore for MemoryStore {
    fn wind_factor(&self) -> i32 {
        self.factor
    }

    fn wind_zero_offset(&self) -> i32 {
        self.zero_offset
    }

    fn wind_alarm_speed(&self) -> i32 {
        self.alarm_speed
    }

    fn set_wind_alarm_speed(&mut self, speed: i32) {
        self.alarm_speed = speed;
    }

    fn wind_average(&self) -> i32 {
        self.outputs.average
    }

    fn set_wind_average(&mut self, speed: i32) {
        self.outputs.average = speed;
    }

    fn wind_max(&self) -> i32 {
        self.outputs.max
    }

    fn set_wind_max(&mut self, speed: i32) {
        self.outputs.max = speed;
    }

    fn wind_apparent_dir(&self) -> u16 {
        self.outputs.apparent_dir
    }

    fn set_wind_apparent_dir(&mut self, degrees: u16) {
        self.outputs.apparent_dir = degrees;
    }

    fn wind_last_update(&self) -> u32 {
        self.outputs.last_update
    }

    fn set_wind_last_update(&mut self, millis: u32) {
        self.outputs.last_update = millis;
    }
}
