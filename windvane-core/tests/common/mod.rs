//! Shared fixtures for the integration tests
//!
//! - `PulseTrain`: drives an `EdgeCapture` like a spinning masthead unit
//! - `TestRng`: deterministic xorshift for jittered scenarios

#![allow(dead_code)]

use windvane_core::time::{Clock, MockClock};
use windvane_core::{EdgeCapture, MemoryStore, Wind, WindConfig};

/// Pulse period for a rotation rate in rev/s × 100
pub fn period_for_rps(rps: u64) -> u64 {
    100_000_000 / rps
}

/// Anemometer and vane edges at a steady rotor speed
pub struct PulseTrain {
    clock: MockClock,
    period_us: u64,
    angle_deg: u64,
}

impl PulseTrain {
    /// Rotor at one turn per 100 ms with the vane edge a quarter turn behind
    pub fn new(start_ms: u32) -> Self {
        Self {
            clock: MockClock::new(start_ms),
            period_us: 100_000,
            angle_deg: 90,
        }
    }

    /// Change the rotor period, keeping the vane angle
    pub fn with_period_us(mut self, period_us: u64) -> Self {
        self.period_us = period_us;
        self
    }

    /// Place the vane edge `degrees` of a turn after the speed edge
    pub fn with_vane_angle(mut self, degrees: u64) -> Self {
        self.angle_deg = degrees;
        self
    }

    pub fn set_period_us(&mut self, period_us: u64) {
        self.period_us = period_us;
    }

    pub fn set_vane_angle(&mut self, degrees: u64) {
        self.angle_deg = degrees;
    }

    /// Speed-to-direction lag in microseconds
    pub fn lag_us(&self) -> u64 {
        self.period_us * self.angle_deg / 360
    }

    pub fn clock(&self) -> &MockClock {
        &self.clock
    }

    pub fn now_ms(&self) -> u32 {
        self.clock.millis()
    }

    /// One rotor turn: speed edge, then the direction edge
    pub fn turn(&self, capture: &EdgeCapture) {
        let lag_us = self.lag_us();
        self.clock.advance_us(self.period_us - lag_us);
        capture.on_speed_edge(&self.clock);
        self.clock.advance_us(lag_us);
        capture.on_direction_edge(&self.clock);
    }

    pub fn turns(&self, capture: &EdgeCapture, count: usize) {
        for _ in 0..count {
            self.turn(capture);
        }
    }

    /// Let the rotor stand still for `ms`
    pub fn idle_ms(&self, ms: u32) {
        self.clock.advance_ms(ms);
    }

    /// Build a default-configured wind component seeded at the current time
    pub fn wind<'a>(&self, capture: &'a EdgeCapture, store: MemoryStore) -> Wind<'a, MemoryStore> {
        Wind::new(capture, store, WindConfig::default(), &self.clock)
            .expect("default configuration is valid")
    }
}

/// Deterministic xorshift generator
pub struct TestRng {
    state: u32,
}

impl TestRng {
    pub fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        self.state
    }

    /// Uniform in `min..max`
    pub fn range(&mut self, min: u64, max: u64) -> u64 {
        min + self.next_u32() as u64 % (max - min)
    }
}
