//! Session log entries and their rendering

use crate::config::PrintOptions;
use chrono::{DateTime, Utc};
use std::fmt::Write;

/// A single entry handed to the adapter by the host framework
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionLogEntry {
    /// Raw session level (see [`SessionLevel`](crate::SessionLevel))
    pub level: i32,
    /// Category name; `None` means the default category
    pub category: Option<String>,
    /// Primary message
    pub message: String,
    /// When the entry was created
    pub date: Option<DateTime<Utc>>,
    /// Identifier of the session that produced the entry
    pub session_id: Option<String>,
    /// Identifier of the connection in use
    pub connection_id: Option<u64>,
    /// Name of the thread that produced the entry
    pub thread: Option<String>,
    /// Description of an attached error
    pub exception: Option<String>,
}

impl SessionLogEntry {
    /// Create an entry stamped with the current time and thread
    pub fn new(level: impl Into<i32>, message: impl Into<String>) -> Self {
        let thread = std::thread::current();
        let thread = thread
            .name()
            .map_or_else(|| format!("{:?}", thread.id()), str::to_string);

        Self {
            level: level.into(),
            category: None,
            message: message.into(),
            date: Some(Utc::now()),
            session_id: None,
            connection_id: None,
            thread: Some(thread),
            exception: None,
        }
    }

    /// Builder-style method for setting the category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Builder-style method for setting the session id
    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    /// Builder-style method for setting the connection id
    pub fn with_connection_id(mut self, connection_id: u64) -> Self {
        self.connection_id = Some(connection_id);
        self
    }

    /// Builder-style method for setting the thread name
    pub fn with_thread(mut self, thread: impl Into<String>) -> Self {
        self.thread = Some(thread.into());
        self
    }

    /// Builder-style method for setting the date
    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    /// Builder-style method for attaching an error description
    pub fn with_exception(mut self, exception: impl Into<String>) -> Self {
        self.exception = Some(exception.into());
        self
    }

    /// Drop the date and thread stamps
    pub fn unstamped(mut self) -> Self {
        self.date = None;
        self.thread = None;
        self
    }
}

/// Renders the two halves of a forwarded message
///
/// The adapter concatenates `supplement_detail` and `format_message` with no
/// separator, so any separator belongs at the end of the supplement.
pub trait EntryFormatter: Send + Sync {
    /// Prefix describing where the entry came from
    fn supplement_detail(&self, entry: &SessionLogEntry) -> String;

    /// The primary message
    fn format_message(&self, entry: &SessionLogEntry) -> String;
}

/// Formatter that renders date, session, connection and thread, each
/// followed by `--`
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultEntryFormatter {
    print: PrintOptions,
}

impl DefaultEntryFormatter {
    /// Create a formatter with the given print options
    pub fn new(print: PrintOptions) -> Self {
        Self { print }
    }
}

impl EntryFormatter for DefaultEntryFormatter {
    fn supplement_detail(&self, entry: &SessionLogEntry) -> String {
        let mut detail = String::new();

        if self.print.date
            && let Some(date) = &entry.date
        {
            let _ = write!(detail, "{}--", date.format("%Y-%m-%d %H:%M:%S%.3f"));
        }

        if self.print.session
            && let Some(session_id) = &entry.session_id
        {
            let _ = write!(detail, "Session({session_id})--");
        }

        if self.print.connection
            && let Some(connection_id) = entry.connection_id
        {
            let _ = write!(detail, "Connection({connection_id})--");
        }

        if self.print.thread
            && let Some(thread) = &entry.thread
        {
            let _ = write!(detail, "Thread({thread})--");
        }

        detail
    }

    fn format_message(&self, entry: &SessionLogEntry) -> String {
        match &entry.exception {
            Some(exception) => format!("{}\n{exception}", entry.message),
            None => entry.message.clone(),
        }
    }
}
