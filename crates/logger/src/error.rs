//! Error types for logger acquisition

use thiserror::Error;

/// Errors that can occur while acquiring a logger handle
#[derive(Debug, Error)]
pub enum Error {
    /// The backend could not produce a handle for the name
    #[error("Failed to acquire logger '{name}': {reason}")]
    Acquisition {
        /// The requested logger name
        name: String,
        /// Why the backend refused
        reason: String,
    },

    /// Logger names must not be empty
    #[error("Logger name must not be empty")]
    InvalidName,
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
