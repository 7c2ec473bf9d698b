//! Severity level definitions

use super::error::LoggerError;
use super::method::ConsoleMethod;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity threshold of a [`LeveledSink`](super::LeveledSink), most verbose first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    #[default]
    Log = 3,
    Warn = 4,
    Error = 5,
    None = 6,
}

impl LogLevel {
    /// Every level, most verbose to fully silent.
    pub const ALL: [LogLevel; 7] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Log,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::None,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Log => "LOG",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::None => "NONE",
        }
    }

    /// The sink method a message at this level is emitted through.
    ///
    /// `None` has no method: anything emitted at `None` is dropped.
    pub fn method(&self) -> Option<ConsoleMethod> {
        match self {
            LogLevel::Trace => Some(ConsoleMethod::Trace),
            LogLevel::Debug => Some(ConsoleMethod::Debug),
            LogLevel::Info => Some(ConsoleMethod::Info),
            LogLevel::Log => Some(ConsoleMethod::Log),
            LogLevel::Warn => Some(ConsoleMethod::Warn),
            LogLevel::Error => Some(ConsoleMethod::Error),
            LogLevel::None => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "TRACE" => Ok(LogLevel::Trace),
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "LOG" => Ok(LogLevel::Log),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            "NONE" => Ok(LogLevel::None),
            _ => Err(LoggerError::unknown_level(s)),
        }
    }
}

impl TryFrom<String> for LogLevel {
    type Error = LoggerError;

    fn try_from(value: String) -> Result<Self, LoggerError> {
        value.parse()
    }
}
