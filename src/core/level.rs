//! Severity level definitions and the threshold gate

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordinal severity levels, ascending from `Off` (admits nothing as a
/// threshold) to `Debug` (admits everything).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum Level {
    Off = 0,
    Fatal = 1,
    Error = 2,
    Warning = 3,
    Info = 4,
    Notice = 5,
    #[default]
    Debug = 6,
}

impl Level {
    /// All message levels, most to least severe. `Off` is a threshold
    /// sentinel, not a message level, so it is excluded here.
    pub const MESSAGE_LEVELS: [Level; 6] = [
        Level::Fatal,
        Level::Error,
        Level::Warning,
        Level::Info,
        Level::Notice,
        Level::Debug,
    ];

    /// The admission gate: a message at `level` passes a threshold of
    /// `self` iff the threshold is at least as permissive.
    ///
    /// `Off` is never admitted as a message level, and an `Off` threshold
    /// admits nothing.
    #[inline]
    pub fn admits(self, level: Level) -> bool {
        level != Level::Off && self >= level
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            Level::Off => "OFF",
            Level::Fatal => "FATAL",
            Level::Error => "ERROR",
            Level::Warning => "WARNING",
            Level::Info => "INFO",
            Level::Notice => "NOTICE",
            Level::Debug => "DEBUG",
        }
    }

    /// The ANSI escape sequence that opens this level's message body.
    /// `Info` (and the `Off` sentinel) carry no color.
    pub fn color_format(&self) -> &'static str {
        match self {
            Level::Off => "",
            Level::Fatal => "\x1b[1;34m",   // blue
            Level::Error => "\x1b[2;31m",   // dim red
            Level::Warning => "\x1b[1;33m", // bold yellow
            Level::Info => "",
            Level::Notice => "\x1b[2;32m",  // dim green
            Level::Debug => "\x1b[1;36m",   // bold cyan
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "OFF" => Ok(Level::Off),
            "FATAL" => Ok(Level::Fatal),
            "ERROR" => Ok(Level::Error),
            "WARN" | "WARNING" => Ok(Level::Warning),
            "INFO" => Ok(Level::Info),
            "NOTICE" => Ok(Level::Notice),
            "DEBUG" => Ok(Level::Debug),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}
