//! Core logger handle traits

use log::Level;

/// A named backend logger handle
///
/// Handles are acquired once through a [`LoggerFactory`](crate::LoggerFactory)
/// and then shared for the lifetime of the process, so implementations must be
/// safe to call from any thread.
pub trait Logger: Send + Sync + 'static {
    /// The name this handle was acquired under
    fn name(&self) -> &str;

    /// Check if a level is currently enabled for this logger
    fn is_enabled(&self, level: Level) -> bool;

    /// Write a message at the given level.
    ///
    /// Callers gate on [`Logger::is_enabled`] first; this method performs no
    /// filtering of its own.
    fn log(&self, level: Level, message: &str);

    /// Flush any buffered logs
    fn flush(&self) {}
}

/// The five write-at-level operations and their matching enabled queries
pub trait LoggerExt: Logger {
    /// Log an error
    #[inline(always)]
    fn error(&self, msg: &str) {
        self.log(Level::Error, msg);
    }

    /// Log a warning
    #[inline(always)]
    fn warn(&self, msg: &str) {
        self.log(Level::Warn, msg);
    }

    /// Log info
    #[inline(always)]
    fn info(&self, msg: &str) {
        self.log(Level::Info, msg);
    }

    /// Log debug
    #[inline(always)]
    fn debug(&self, msg: &str) {
        self.log(Level::Debug, msg);
    }

    /// Log trace
    #[inline(always)]
    fn trace(&self, msg: &str) {
        self.log(Level::Trace, msg);
    }

    /// Whether error output is enabled
    #[inline(always)]
    fn is_error_enabled(&self) -> bool {
        self.is_enabled(Level::Error)
    }

    /// Whether warning output is enabled
    #[inline(always)]
    fn is_warn_enabled(&self) -> bool {
        self.is_enabled(Level::Warn)
    }

    /// Whether info output is enabled
    #[inline(always)]
    fn is_info_enabled(&self) -> bool {
        self.is_enabled(Level::Info)
    }

    /// Whether debug output is enabled
    #[inline(always)]
    fn is_debug_enabled(&self) -> bool {
        self.is_enabled(Level::Debug)
    }

    /// Whether trace output is enabled
    #[inline(always)]
    fn is_trace_enabled(&self) -> bool {
        self.is_enabled(Level::Trace)
    }
}

// Implement for all loggers
impl<T: Logger + ?Sized> LoggerExt for T {}
