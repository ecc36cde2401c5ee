//! Named logger handles for the session log adapter
//!
//! This crate defines the backend side of the adapter:
//! - [`Logger`] handles with per-level enabled queries and writes
//! - [`LoggerFactory`] for acquiring handles by name
//! - a `log` crate backend, where the handle name is the record target
//! - an in-memory backend that captures acquisitions and writes

#![warn(missing_docs, unreachable_pub)]
#![forbid(unsafe_code)]

mod error;
mod factory;
mod logger;
mod memory;
mod record;

pub use error::{Error, Result};
pub use factory::{LogCrateFactory, LogCrateLogger, LoggerFactory};
pub use logger::{Logger, LoggerExt};
pub use memory::{MemoryLogger, MemoryLoggerFactory};
pub use record::Record;

// Backend level types, re-exported so callers need not depend on `log` directly
pub use log::{Level, LevelFilter};
