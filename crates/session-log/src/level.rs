//! Session and backend severity scales
//!
//! Session entries carry the host's raw integer level so that values outside
//! the named scale can still reach the adapter. [`BackendLevel::translate`]
//! maps any raw value onto the backend scale through a fixed table; values the
//! table does not cover become [`BackendLevel::Off`].

use crate::{Error, Result};
use persistence_logger::Level;
use std::fmt;
use std::str::FromStr;

/// Host session log levels, most to least verbose
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i32)]
pub enum SessionLevel {
    /// Log everything
    All = 0,
    /// Most detailed tracing
    Finest = 1,
    /// Fairly detailed tracing
    Finer = 2,
    /// General tracing
    Fine = 3,
    /// Configuration messages
    Config = 4,
    /// Informational messages
    Info = 5,
    /// Potential problems
    Warning = 6,
    /// Serious failures
    Severe = 7,
    /// Log nothing
    Off = 8,
}

impl SessionLevel {
    /// Every level, in ascending order
    pub const LEVELS: [Self; 9] = [
        Self::All,
        Self::Finest,
        Self::Finer,
        Self::Fine,
        Self::Config,
        Self::Info,
        Self::Warning,
        Self::Severe,
        Self::Off,
    ];

    /// The raw integer value carried by log entries
    #[inline]
    pub const fn as_raw(self) -> i32 {
        self as i32
    }

    /// Look up the level for a raw value
    pub fn from_raw(raw: i32) -> Option<Self> {
        usize::try_from(raw)
            .ok()
            .and_then(|index| Self::LEVELS.get(index))
            .copied()
    }

    /// Upper-case level name
    pub const fn name(self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Finest => "FINEST",
            Self::Finer => "FINER",
            Self::Fine => "FINE",
            Self::Config => "CONFIG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Severe => "SEVERE",
            Self::Off => "OFF",
        }
    }
}

impl From<SessionLevel> for i32 {
    fn from(level: SessionLevel) -> Self {
        level.as_raw()
    }
}

impl fmt::Display for SessionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SessionLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        Self::LEVELS
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnknownLevel(s.to_string()))
    }
}

/// Backend severity scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendLevel {
    /// Trace level
    Trace,
    /// Debug level
    Debug,
    /// Info level
    Info,
    /// Warn level
    Warn,
    /// Error level
    Error,
    /// Never emitted
    Off,
}

/// Backend level for each raw session level, indexed by the raw value
const TRANSLATION: [BackendLevel; 8] = [
    BackendLevel::Trace, // ALL
    BackendLevel::Trace, // FINEST
    BackendLevel::Trace, // FINER
    BackendLevel::Debug, // FINE
    BackendLevel::Debug, // CONFIG
    BackendLevel::Info,  // INFO
    BackendLevel::Warn,  // WARNING
    BackendLevel::Error, // SEVERE
];

impl BackendLevel {
    /// Translate a raw session level. Anything outside the table is `Off`.
    #[inline]
    pub fn translate(raw: i32) -> Self {
        usize::try_from(raw)
            .ok()
            .and_then(|index| TRANSLATION.get(index))
            .copied()
            .unwrap_or(Self::Off)
    }

    /// The matching `log` level, or `None` for `Off`
    pub const fn as_level(self) -> Option<Level> {
        match self {
            Self::Trace => Some(Level::Trace),
            Self::Debug => Some(Level::Debug),
            Self::Info => Some(Level::Info),
            Self::Warn => Some(Level::Warn),
            Self::Error => Some(Level::Error),
            Self::Off => None,
        }
    }
}

impl From<SessionLevel> for BackendLevel {
    fn from(level: SessionLevel) -> Self {
        Self::translate(level.as_raw())
    }
}

impl fmt::Display for BackendLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Off => "OFF",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_translation_table() {
        use BackendLevel::*;

        let expected = [
            (SessionLevel::All, Trace),
            (SessionLevel::Finest, Trace),
            (SessionLevel::Finer, Trace),
            (SessionLevel::Fine, Debug),
            (SessionLevel::Config, Debug),
            (SessionLevel::Info, Info),
            (SessionLevel::Warning, Warn),
            (SessionLevel::Severe, Error),
            (SessionLevel::Off, Off),
        ];

        for (session, backend) in expected {
            assert_eq!(BackendLevel::from(session), backend, "{session}");
        }
    }

    #[test]
    fn test_unrecognized_values_translate_to_off() {
        for raw in [-1, 8, 9, 42, i32::MIN, i32::MAX] {
            assert_eq!(BackendLevel::translate(raw), BackendLevel::Off, "{raw}");
        }
    }

    #[test]
    fn test_raw_round_trip() {
        for level in SessionLevel::LEVELS {
            assert_eq!(SessionLevel::from_raw(level.as_raw()), Some(level));
        }
        assert_eq!(SessionLevel::from_raw(9), None);
        assert_eq!(SessionLevel::from_raw(-1), None);
    }

    #[test]
    fn test_parse_level_names() {
        let cases = [
            ("finest", SessionLevel::Finest),
            ("WARNING", SessionLevel::Warning),
            (" Config ", SessionLevel::Config),
        ];
        for (name, level) in cases {
            assert_eq!(name.parse::<SessionLevel>().unwrap(), level);
        }
        assert_matches!(
            "verbose".parse::<SessionLevel>(),
            Err(Error::UnknownLevel(name)) if name == "verbose"
        );
    }

    #[test]
    fn test_backend_level_conversion() {
        assert_eq!(BackendLevel::Warn.as_level(), Some(Level::Warn));
        assert_eq!(BackendLevel::Off.as_level(), None);
        assert_eq!(BackendLevel::Error.to_string(), "ERROR");
        assert_eq!(SessionLevel::Severe.to_string(), "SEVERE");
    }
}
