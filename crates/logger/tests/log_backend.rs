//! Tests for the `log` crate backend

use log::{Level, LevelFilter, Log, Metadata, Record as LogRecord};
use persistence_logger::*;
use pretty_assertions::assert_eq;
use serial_test::serial;
use std::sync::{LazyLock, Mutex, Once};

/// Global `log` implementation that filters per target and captures writes
struct TargetCapture {
    levels: Mutex<Vec<(String, LevelFilter)>>,
    records: Mutex<Vec<Record>>,
}

impl TargetCapture {
    fn level_for(&self, target: &str) -> LevelFilter {
        self.levels
            .lock()
            .unwrap()
            .iter()
            .find(|(name, _)| name == target)
            .map(|(_, level)| *level)
            .unwrap_or(LevelFilter::Off)
    }

    fn reset(&self, levels: &[(&str, LevelFilter)]) {
        *self.levels.lock().unwrap() = levels
            .iter()
            .map(|(name, level)| (name.to_string(), *level))
            .collect();
        self.records.lock().unwrap().clear();
    }

    fn records(&self) -> Vec<Record> {
        self.records.lock().unwrap().clone()
    }
}

impl Log for TargetCapture {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level_for(metadata.target())
    }

    fn log(&self, record: &LogRecord) {
        self.records.lock().unwrap().push(Record::new(
            record.target(),
            record.level(),
            record.args().to_string(),
        ));
    }

    fn flush(&self) {}
}

static CAPTURE: LazyLock<TargetCapture> = LazyLock::new(|| TargetCapture {
    levels: Mutex::new(Vec::new()),
    records: Mutex::new(Vec::new()),
});

fn install(levels: &[(&str, LevelFilter)]) -> &'static TargetCapture {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        log::set_logger(&*CAPTURE).expect("no other logger installed");
        log::set_max_level(LevelFilter::Trace);
    });

    CAPTURE.reset(levels);
    &CAPTURE
}

#[test]
#[serial]
fn test_enabled_queries_use_target() {
    install(&[("backend.sql", LevelFilter::Warn)]);

    let sql = LogCrateFactory.get_logger("backend.sql").unwrap();
    let cache = LogCrateFactory.get_logger("backend.cache").unwrap();

    assert!(sql.is_error_enabled());
    assert!(sql.is_warn_enabled());
    assert!(!sql.is_info_enabled());
    assert!(!cache.is_error_enabled());
}

#[test]
#[serial]
fn test_writes_carry_target_and_level() {
    let capture = install(&[("backend.query", LevelFilter::Trace)]);

    let query = LogCrateFactory.get_logger("backend.query").unwrap();
    query.debug("SELECT ID FROM EMPLOYEE");
    query.error("connection reset");

    assert_eq!(
        capture.records(),
        vec![
            Record::new("backend.query", Level::Debug, "SELECT ID FROM EMPLOYEE"),
            Record::new("backend.query", Level::Error, "connection reset"),
        ]
    );
}

#[test]
#[serial]
fn test_message_braces_are_not_reformatted() {
    let capture = install(&[("backend.misc", LevelFilter::Info)]);

    let misc = LogCrateFactory.get_logger("backend.misc").unwrap();
    misc.info("bind => [{0}, {1}]");

    assert_eq!(capture.records()[0].message, "bind => [{0}, {1}]");
}
