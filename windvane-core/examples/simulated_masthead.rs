//! Simulated Masthead Unit
//!
//! Feeds a scripted breeze through the wind core the way a firmware main
//! loop would: edge handlers record pulses, and once per reporting interval
//! the periodic task correlates and publishes.
//!
//! The script builds from light air into a gust, veers the vane, then drops
//! to a flat calm so the staleness window kicks in.
//!
//! ```bash
//! RUST_LOG=windvane_core=debug cargo run --example simulated_masthead
//! ```

use windvane_core::calculator::CycleReport;
use windvane_core::constants::timing::DEFAULT_REPORT_INTERVAL_MS;
use windvane_core::time::{Clock, MockClock};
use windvane_core::{EdgeCapture, MemoryStore, Wind, WindConfig, WindError};

static CAPTURE: EdgeCapture = EdgeCapture::new();

/// Divides the calibrated curve down to whole knots
const KNOTS_FACTOR: i32 = 10_000;
/// Alarm threshold, in the same knots as the published average
const ALARM_KNOTS: i32 = 25;

/// One scripted stretch of weather
struct Phase {
    label: &'static str,
    /// Rotor period in microseconds, `None` for a still rotor
    period_us: Option<u64>,
    /// Vane edge lag as degrees of a turn
    vane_deg: u64,
    seconds: u32,
}

const SCRIPT: &[Phase] = &[
    Phase { label: "light air", period_us: Some(1_000_000), vane_deg: 120, seconds: 3 },
    Phase { label: "building", period_us: Some(300_000), vane_deg: 125, seconds: 3 },
    Phase { label: "gust", period_us: Some(60_000), vane_deg: 135, seconds: 2 },
    Phase { label: "veering", period_us: Some(150_000), vane_deg: 200, seconds: 3 },
    Phase { label: "calm", period_us: None, vane_deg: 0, seconds: 5 },
];

fn main() -> Result<(), WindError> {
    env_logger::init();

    let clock = MockClock::new(1_000);
    let store = MemoryStore::new(KNOTS_FACTOR, 0).with_alarm_speed(ALARM_KNOTS);
    let mut wind: Wind<'_, MemoryStore> = Wind::new(&CAPTURE, store, WindConfig::default(), &clock)?;

    println!("Simulated masthead");
    println!("==================\n");
    println!("{:<12} {:>6} {:>10} {:>10} {:>5} {:>6}", "phase", "t(ms)", "avg(kn)", "gust(kn)", "dir", "alarm");

    for phase in SCRIPT {
        for _ in 0..phase.seconds {
            run_interval(&clock, phase);

            wind.calc_speed_and_dir();
            let report = wind.calc_wind_data(clock.millis());
            let out = wind.outputs();

            let note = match report {
                CycleReport::Calm { idle_ms } => format!("  (still for {} ms)", idle_ms),
                CycleReport::Updated { new_gust: true, .. } => "  new gust".to_string(),
                CycleReport::Updated { .. } => String::new(),
            };

            println!(
                "{:<12} {:>6} {:>10} {:>10} {:>5} {:>6}{}",
                phase.label,
                out.last_update,
                out.average,
                out.max,
                out.apparent_dir,
                if wind.alarm_active() { "ON" } else { "-" },
                note
            );
        }
    }

    wind.reset_gust();
    println!("\nGust reset, max now {}", wind.outputs().max);

    Ok(())
}

/// Advance one reporting interval, firing edges as the rotor turns
fn run_interval(clock: &MockClock, phase: &Phase) {
    let interval_us = DEFAULT_REPORT_INTERVAL_MS as u64 * 1_000;

    let period_us = match phase.period_us {
        Some(period) => period,
        None => {
            clock.advance_us(interval_us);
            return;
        }
    };

    let lag_us = period_us * phase.vane_deg / 360;
    let mut elapsed = 0;
    while elapsed + period_us <= interval_us {
        clock.advance_us(period_us - lag_us);
        CAPTURE.on_speed_edge(clock);
        clock.advance_us(lag_us);
        CAPTURE.on_direction_edge(clock);
        elapsed += period_us;
    }
    clock.advance_us(interval_us - elapsed);
}
