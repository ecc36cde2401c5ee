//! Category-aware session log adapter
//!
//! Receives entries from a persistence framework's session log and forwards
//! them to named backend loggers:
//! - one logger per known category, named `<namespace>.<category>`, acquired
//!   eagerly at construction
//! - unknown or missing categories go to `<namespace>.default`
//! - session levels (ALL..SEVERE) are translated onto TRACE..ERROR
//! - the backend's own enabled queries decide whether an entry is written

#![warn(missing_docs, unreachable_pub)]
#![forbid(unsafe_code)]

mod category;
mod config;
mod entry;
mod error;
mod level;
mod registry;
mod session_logger;

pub use category::{DEFAULT_CATEGORY, KNOWN_CATEGORIES, NAMESPACE, logger_name};
pub use config::{PrintOptions, SessionLoggerConfig};
pub use entry::{DefaultEntryFormatter, EntryFormatter, SessionLogEntry};
pub use error::{Error, Result};
pub use level::{BackendLevel, SessionLevel};
pub use session_logger::{CategorySessionLogger, SessionLog};
