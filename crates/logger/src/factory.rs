//! Logger acquisition by name, and the `log` crate backend

use crate::{Error, Logger, Result};
use log::Level;
use std::sync::Arc;

/// Acquires named logger handles from a backend
pub trait LoggerFactory: Send + Sync {
    /// Get (or create) the logger registered under `name`
    fn get_logger(&self, name: &str) -> Result<Arc<dyn Logger>>;
}

/// Factory for handles that forward to the global `log` logger
///
/// The handle name becomes the record target, so the installed `log`
/// implementation filters on it the same way it filters module paths.
///
/// # Example
/// ```no_run
/// use persistence_logger::{LogCrateFactory, LoggerExt, LoggerFactory};
///
/// let logger = LogCrateFactory.get_logger("org.eclipse.persistence.logging.sql").unwrap();
/// if logger.is_debug_enabled() {
///     logger.debug("SELECT 1");
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LogCrateFactory;

impl LoggerFactory for LogCrateFactory {
    fn get_logger(&self, name: &str) -> Result<Arc<dyn Logger>> {
        if name.is_empty() {
            return Err(Error::InvalidName);
        }

        Ok(Arc::new(LogCrateLogger::new(name)))
    }
}

/// A handle that writes to the `log` crate under a fixed target
#[derive(Debug, Clone)]
pub struct LogCrateLogger {
    target: String,
}

impl LogCrateLogger {
    /// Create a handle for the given target
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }
}

impl Logger for LogCrateLogger {
    fn name(&self) -> &str {
        &self.target
    }

    #[inline]
    fn is_enabled(&self, level: Level) -> bool {
        log::log_enabled!(target: self.target.as_str(), level)
    }

    fn log(&self, level: Level, message: &str) {
        log::log!(target: self.target.as_str(), level, "{message}");
    }

    /// Flush the global `log` logger.
    ///
    /// Every handle shares that one sink, so flushing several handles flushes
    /// it once per handle.
    fn flush(&self) {
        log::logger().flush();
    }
}
