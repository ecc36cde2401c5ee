//! Session logger configuration

use crate::category::{KNOWN_CATEGORIES, NAMESPACE};
use serde::{Deserialize, Serialize};

/// Configuration for a [`CategorySessionLogger`](crate::CategorySessionLogger)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionLoggerConfig {
    /// Prefix for every backend logger name
    pub namespace: String,
    /// Categories that get their own logger
    pub categories: Vec<String>,
    /// Whether bound parameter values may be logged; unset means hidden
    pub should_display_data: Option<bool>,
    /// Which parts of the supplement detail are printed
    pub print: PrintOptions,
}

impl Default for SessionLoggerConfig {
    fn default() -> Self {
        Self {
            namespace: NAMESPACE.to_string(),
            categories: KNOWN_CATEGORIES.iter().map(ToString::to_string).collect(),
            should_display_data: None,
            print: PrintOptions::default(),
        }
    }
}

impl SessionLoggerConfig {
    /// Builder-style method for setting the namespace
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Builder-style method for replacing the category list
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Builder-style method for setting the display-data flag
    pub fn with_display_data(mut self, display: bool) -> Self {
        self.should_display_data = Some(display);
        self
    }

    /// Builder-style method for setting print options
    pub fn with_print(mut self, print: PrintOptions) -> Self {
        self.print = print;
        self
    }
}

/// Parts of the supplement detail to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrintOptions {
    /// Print the entry date
    pub date: bool,
    /// Print the session id
    pub session: bool,
    /// Print the connection id
    pub connection: bool,
    /// Print the thread name
    pub thread: bool,
}

impl PrintOptions {
    /// Print nothing
    pub const fn none() -> Self {
        Self {
            date: false,
            session: false,
            connection: false,
            thread: false,
        }
    }
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            date: true,
            session: true,
            connection: true,
            thread: true,
        }
    }
}
