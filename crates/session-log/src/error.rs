//! Error types for the session log adapter

use thiserror::Error;

/// Errors that can occur in the session log adapter
#[derive(Debug, Error)]
pub enum Error {
    /// A category logger could not be acquired during construction
    #[error("Logger error: {0}")]
    Logger(#[from] persistence_logger::Error),

    /// A level name did not match any session level
    #[error("Unknown session log level: {0}")]
    UnknownLevel(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
