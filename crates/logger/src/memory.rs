//! In-memory logger backend
//!
//! Captures every acquisition and every write so callers can assert on exactly
//! what reached the backend. Levels are configurable per logger name, before
//! or after the handle was acquired.

use crate::{Error, Logger, LoggerFactory, Record, Result};
use log::{Level, LevelFilter};
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

#[derive(Debug)]
struct State {
    acquisitions: Vec<String>,
    levels: HashMap<String, LevelFilter>,
    default_level: LevelFilter,
    records: Vec<Record>,
    flushes: HashMap<String, usize>,
    failing: HashSet<String>,
}

impl State {
    fn level_for(&self, name: &str) -> LevelFilter {
        self.levels.get(name).copied().unwrap_or(self.default_level)
    }
}

/// A factory whose loggers capture all writes in memory
#[derive(Debug, Clone)]
pub struct MemoryLoggerFactory {
    state: Arc<Mutex<State>>,
}

impl MemoryLoggerFactory {
    /// Create a factory with every level enabled on every logger
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(State {
                acquisitions: Vec::new(),
                levels: HashMap::new(),
                default_level: LevelFilter::Trace,
                records: Vec::new(),
                flushes: HashMap::new(),
                failing: HashSet::new(),
            })),
        }
    }

    /// Set the level used for loggers without an explicit level
    pub fn with_default_level(self, level: LevelFilter) -> Self {
        self.state.lock().default_level = level;
        self
    }

    /// Make acquisition of `name` fail
    pub fn fail_on(self, name: impl Into<String>) -> Self {
        self.state.lock().failing.insert(name.into());
        self
    }

    /// Set the enabled level for a single logger name
    pub fn set_level(&self, name: impl Into<String>, level: LevelFilter) {
        self.state.lock().levels.insert(name.into(), level);
    }

    /// Names passed to [`LoggerFactory::get_logger`], in call order
    pub fn acquisitions(&self) -> Vec<String> {
        self.state.lock().acquisitions.clone()
    }

    /// How many times `name` was acquired
    pub fn acquisition_count(&self, name: &str) -> usize {
        self.state
            .lock()
            .acquisitions
            .iter()
            .filter(|acquired| acquired.as_str() == name)
            .count()
    }

    /// All captured records, in write order
    pub fn records(&self) -> Vec<Record> {
        self.state.lock().records.clone()
    }

    /// Captured records written to a single logger
    pub fn records_for(&self, name: &str) -> Vec<Record> {
        self.state
            .lock()
            .records
            .iter()
            .filter(|record| record.logger == name)
            .cloned()
            .collect()
    }

    /// Check if any captured message contains `text`
    pub fn contains(&self, text: &str) -> bool {
        self.state
            .lock()
            .records
            .iter()
            .any(|record| record.message.contains(text))
    }

    /// How many times the handle for `name` was flushed
    pub fn flush_count(&self, name: &str) -> usize {
        self.state.lock().flushes.get(name).copied().unwrap_or(0)
    }

    /// Flushes across every handle
    pub fn total_flushes(&self) -> usize {
        self.state.lock().flushes.values().sum()
    }

    /// Clear captured records and flush counts (acquisitions are kept)
    pub fn clear(&self) {
        let mut state = self.state.lock();
        state.records.clear();
        state.flushes.clear();
    }
}

impl Default for MemoryLoggerFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerFactory for MemoryLoggerFactory {
    fn get_logger(&self, name: &str) -> Result<Arc<dyn Logger>> {
        if name.is_empty() {
            return Err(Error::InvalidName);
        }

        let mut state = self.state.lock();
        state.acquisitions.push(name.to_string());

        if state.failing.contains(name) {
            return Err(Error::Acquisition {
                name: name.to_string(),
                reason: "configured to fail".to_string(),
            });
        }

        Ok(Arc::new(MemoryLogger {
            name: name.to_string(),
            state: self.state.clone(),
        }))
    }
}

/// A logger handle produced by [`MemoryLoggerFactory`]
#[derive(Debug, Clone)]
pub struct MemoryLogger {
    name: String,
    state: Arc<Mutex<State>>,
}

impl Logger for MemoryLogger {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_enabled(&self, level: Level) -> bool {
        level <= self.state.lock().level_for(&self.name)
    }

    fn log(&self, level: Level, message: &str) {
        self.state
            .lock()
            .records
            .push(Record::new(self.name.as_str(), level, message));
    }

    fn flush(&self) {
        let mut state = self.state.lock();
        *state.flushes.entry(self.name.clone()).or_default() += 1;
    }
}
