//! Captured log record type

use log::Level;
use std::fmt;

/// A record written to an in-memory logger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Name of the logger the record was written to
    pub logger: String,
    /// Log level
    pub level: Level,
    /// The log message
    pub message: String,
}

impl Record {
    /// Create a new record
    pub fn new(logger: impl Into<String>, level: Level, message: impl Into<String>) -> Self {
        Self {
            logger: logger.into(),
            level,
            message: message.into(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] {}", self.level, self.logger, self.message)
    }
}
