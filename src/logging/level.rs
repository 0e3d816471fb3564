use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::Deserialize;
use std::str::FromStr;
use strum_macros::{Display, IntoStaticStr};
use thiserror::Error;

/// Record severity, ordered `Debug < Info < Warn < Error`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, IntoStaticStr, Deserialize,
    TryFromPrimitive, IntoPrimitive,
)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Level {
    Debug = 0,
    Info = 1,
    #[serde(alias = "warning")]
    Warn = 2,
    Error = 3,
}

// num_enum treats a #[default] variant as the try_from catch-all
#[allow(clippy::derivable_impls)]
impl Default for Level {
    fn default() -> Self {
        Level::Info
    }
}

impl Level {
    /// Label used in emitted records (`DEBUG`, `INFO`, ...).
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown log level {0:?}, expected one of debug, info, warn, error")]
pub struct ParseLevelError(String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

impl From<Level> for tracing::Level {
    fn from(level: Level) -> Self {
        match level {
            Level::Debug => tracing::Level::DEBUG,
            Level::Info => tracing::Level::INFO,
            Level::Warn => tracing::Level::WARN,
            Level::Error => tracing::Level::ERROR,
        }
    }
}

impl From<tracing::Level> for Level {
    fn from(level: tracing::Level) -> Self {
        // TRACE has no counterpart and folds into debug.
        if level == tracing::Level::ERROR {
            Level::Error
        } else if level == tracing::Level::WARN {
            Level::Warn
        } else if level == tracing::Level::INFO {
            Level::Info
        } else {
            Level::Debug
        }
    }
}
