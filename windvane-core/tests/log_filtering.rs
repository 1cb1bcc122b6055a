//! Crate log records through `env_logger` with per-target `RUST_LOG`-style filters

#![cfg(feature = "log")]

mod common;

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use env_logger::Target;
use windvane_core::calculator::CycleReport;
use windvane_core::{EdgeCapture, MemoryStore};

use common::PulseTrain;

/// Collects formatted log lines for inspection
#[derive(Clone, Default)]
struct SharedSink(Arc<Mutex<Vec<u8>>>);

impl SharedSink {
    fn contents(&self) -> String {
        let bytes = self.0.lock().map(|b| b.clone()).unwrap_or_default();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl Write for SharedSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Ok(mut bytes) = self.0.lock() {
            bytes.extend_from_slice(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn module_target_filter_selects_calculator_debug() {
    let sink = SharedSink::default();
    env_logger::Builder::new()
        .parse_filters("warn,windvane_core::calculator=debug")
        .target(Target::Pipe(Box::new(sink.clone())))
        .try_init()
        .expect("only logger in this test binary");

    assert!(log::log_enabled!(target: "windvane_core::calculator", log::Level::Debug));
    assert!(!log::log_enabled!(target: "windvane_core::calculator", log::Level::Trace));
    assert!(!log::log_enabled!(target: "windvane_core::wind", log::Level::Debug));
    assert!(log::log_enabled!(target: "windvane_core::wind", log::Level::Warn));

    let capture = EdgeCapture::new();
    let train = PulseTrain::new(1_000);
    // Clamped alarm logs at debug under the wind module
    let mut wind = train.wind(&capture, MemoryStore::default().with_alarm_speed(250));

    // First turn after seeding is dropped, logged at trace
    train.turn(&capture);
    assert!(wind.calc_speed_and_dir().is_none());

    train.idle_ms(5_000);
    let report = wind.calc_wind_data(train.now_ms());
    assert!(matches!(report, CycleReport::Calm { .. }));

    let logged = sink.contents();
    assert!(logged.contains("reporting calm"), "captured: {:?}", logged);
    assert!(logged.contains("windvane_core::calculator"), "captured: {:?}", logged);
    assert!(!logged.contains("Alarm speed"), "captured: {:?}", logged);
    assert!(!logged.contains("Edge snapshot dropped"), "captured: {:?}", logged);
}
