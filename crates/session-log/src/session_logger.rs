//! Category-aware session logger
//!
//! Forwards host session log entries to named backend loggers, one per
//! category, translating the session level scale onto the backend scale.

use crate::Result;
use crate::category::DEFAULT_CATEGORY;
use crate::config::SessionLoggerConfig;
use crate::entry::{DefaultEntryFormatter, EntryFormatter, SessionLogEntry};
use crate::level::BackendLevel;
use crate::registry::CategoryLoggers;
use persistence_logger::{LogCrateFactory, Logger, LoggerExt, LoggerFactory};
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

/// Host-facing session log contract
pub trait SessionLog: Send + Sync {
    /// Forward an entry if its level is enabled for its category
    fn log(&self, entry: &SessionLogEntry);

    /// Whether a raw session level is enabled for a category.
    ///
    /// Levels that translate to nothing on the backend scale report `true`.
    fn should_log(&self, level: i32, category: Option<&str>) -> bool;

    /// [`SessionLog::should_log`] for the default category
    fn should_log_level(&self, level: i32) -> bool {
        self.should_log(level, Some(DEFAULT_CATEGORY))
    }

    /// Whether bound parameter values may be written to the log
    fn should_display_data(&self) -> bool;
}

const DISPLAY_UNSET: u8 = 0;
const DISPLAY_HIDE: u8 = 1;
const DISPLAY_SHOW: u8 = 2;

const fn encode_display(value: Option<bool>) -> u8 {
    match value {
        None => DISPLAY_UNSET,
        Some(false) => DISPLAY_HIDE,
        Some(true) => DISPLAY_SHOW,
    }
}

/// Session log that writes to one backend logger per category
///
/// # Example
/// ```no_run
/// use persistence_session_log::{CategorySessionLogger, SessionLevel, SessionLog, SessionLogEntry};
///
/// let session_log = CategorySessionLogger::new().unwrap();
/// session_log.log(&SessionLogEntry::new(SessionLevel::Fine, "SELECT 1").with_category("sql"));
/// ```
pub struct CategorySessionLogger {
    loggers: CategoryLoggers,
    formatter: Box<dyn EntryFormatter>,
    display_data: AtomicU8,
}

impl CategorySessionLogger {
    /// Create a session logger backed by the `log` crate with default settings
    pub fn new() -> Result<Self> {
        Self::with_config(SessionLoggerConfig::default())
    }

    /// Create a session logger backed by the `log` crate
    pub fn with_config(config: SessionLoggerConfig) -> Result<Self> {
        Self::with_factory(&LogCrateFactory, config)
    }

    /// Create a session logger, acquiring every category logger from `factory`
    pub fn with_factory(factory: &dyn LoggerFactory, config: SessionLoggerConfig) -> Result<Self> {
        let loggers = CategoryLoggers::build(factory, &config.namespace, &config.categories)?;

        Ok(Self {
            loggers,
            formatter: Box::new(DefaultEntryFormatter::new(config.print)),
            display_data: AtomicU8::new(encode_display(config.should_display_data)),
        })
    }

    /// Replace the entry formatter
    pub fn with_formatter(mut self, formatter: impl EntryFormatter + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// The backend logger an entry in `category` is written to
    pub fn logger_for(&self, category: Option<&str>) -> &Arc<dyn Logger> {
        self.loggers.resolve(category)
    }

    /// Number of category loggers, including the default
    pub fn category_count(&self) -> usize {
        self.loggers.len()
    }

    /// Set or clear the display-data flag
    pub fn set_should_display_data(&self, value: Option<bool>) {
        self.display_data.store(encode_display(value), Ordering::Release);
    }

    /// Flush every backend logger once.
    ///
    /// The default logger is flushed once even though it is also reachable
    /// through unknown categories.
    pub fn flush(&self) {
        for logger in self.loggers.handles() {
            logger.flush();
        }
    }
}

impl SessionLog for CategorySessionLogger {
    fn log(&self, entry: &SessionLogEntry) {
        if !self.should_log(entry.level, entry.category.as_deref()) {
            return;
        }

        let logger = self.loggers.resolve(entry.category.as_deref());
        let level = BackendLevel::translate(entry.level);

        // The gate passes unmapped levels, but there is no backend call for them
        if level == BackendLevel::Off {
            return;
        }

        let mut message = self.formatter.supplement_detail(entry);
        message.push_str(&self.formatter.format_message(entry));

        match level {
            BackendLevel::Trace => logger.trace(&message),
            BackendLevel::Debug => logger.debug(&message),
            BackendLevel::Info => logger.info(&message),
            BackendLevel::Warn => logger.warn(&message),
            BackendLevel::Error => logger.error(&message),
            BackendLevel::Off => {}
        }
    }

    fn should_log(&self, level: i32, category: Option<&str>) -> bool {
        let logger = self.loggers.resolve(category);

        match BackendLevel::translate(level) {
            BackendLevel::Trace => logger.is_trace_enabled(),
            BackendLevel::Debug => logger.is_debug_enabled(),
            BackendLevel::Info => logger.is_info_enabled(),
            BackendLevel::Warn => logger.is_warn_enabled(),
            BackendLevel::Error => logger.is_error_enabled(),
            BackendLevel::Off => true,
        }
    }

    fn should_display_data(&self) -> bool {
        self.display_data.load(Ordering::Acquire) == DISPLAY_SHOW
    }
}
