use super::level::Level;
use super::value::{Value, pairs};
use chrono::{DateTime, Local};
use serde::Deserialize;
use std::fmt;
use std::io;
use std::sync::Arc;

/// One log event as handed to a [`Sink`].
#[derive(Debug, Clone)]
pub struct Record<'a> {
    pub time: DateTime<Local>,
    pub level: Level,
    pub message: &'a str,
    pub fields: Vec<(&'a str, &'a Value)>,
}

impl<'a> Record<'a> {
    pub fn new(level: Level, message: &'a str, fields: Vec<(&'a str, &'a Value)>) -> Self {
        Self {
            time: Local::now(),
            level,
            message,
            fields,
        }
    }
}

/// A formatting destination for records.
///
/// Implementations must tolerate concurrent calls from many threads.
pub trait Sink: Send + Sync {
    fn enabled(&self, level: Level) -> bool;

    fn emit(&self, record: &Record<'_>) -> io::Result<()>;
}

/// Options shared by the built-in sinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Fixed threshold. `None` follows the process-wide level on every call.
    pub level: Option<Level>,
    /// Emit the `time` field.
    pub with_time: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: None,
            with_time: true,
        }
    }
}

impl LoggerConfig {
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    pub fn without_time(mut self) -> Self {
        self.with_time = false;
        self
    }

    pub(crate) fn threshold(&self) -> Threshold {
        match self.level {
            Some(level) => Threshold::Fixed(level),
            None => Threshold::Global,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Threshold {
    Fixed(Level),
    Global,
}

impl Threshold {
    pub(crate) fn allows(self, level: Level) -> bool {
        let min = match self {
            Threshold::Fixed(min) => min,
            Threshold::Global => super::get_level(),
        };
        level >= min
    }
}

/// Cheaply cloneable handle to a sink; what [`set_logger`](super::set_logger) installs.
#[derive(Clone)]
pub struct Logger {
    sink: Arc<dyn Sink>,
}

impl Logger {
    pub fn new(sink: impl Sink + 'static) -> Self {
        Self { sink: Arc::new(sink) }
    }

    pub fn enabled(&self, level: Level) -> bool {
        self.sink.enabled(level)
    }

    /// Logs without a component tag. `kv` follows the same pairing rules as the facade.
    pub fn log(&self, level: Level, message: &str, kv: &[Value]) {
        if !self.enabled(level) {
            return;
        }
        self.emit(&Record::new(level, message, pairs(kv)));
    }

    pub(crate) fn emit(&self, record: &Record<'_>) {
        if let Err(err) = self.sink.emit(record) {
            tracing::warn!(%err, level = %record.level, "log sink write failed");
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").finish_non_exhaustive()
    }
}
