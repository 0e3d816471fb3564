use super::level::Level;
use super::sink::{Logger, LoggerConfig, Record, Sink, Threshold};
use super::text::push_fields;
use std::io;

/// Target of events forwarded into `tracing`.
pub const TARGET: &str = "usbcore";

/// Forwards facade records to the current `tracing` dispatcher.
///
/// The message is followed by the record fields in text form, so an fmt
/// subscriber prints `info message component=host ep=1`.
pub struct TracingSink {
    threshold: Threshold,
}

impl TracingSink {
    pub fn new(config: LoggerConfig) -> Self {
        Self {
            threshold: config.threshold(),
        }
    }
}

impl Sink for TracingSink {
    fn enabled(&self, level: Level) -> bool {
        self.threshold.allows(level)
    }

    fn emit(&self, record: &Record<'_>) -> io::Result<()> {
        // push_fields only inserts a separator after existing text
        let mut line = record.message.to_string();
        push_fields(&mut line, &record.fields);
        match record.level {
            Level::Debug => tracing::debug!(target: TARGET, "{line}"),
            Level::Info => tracing::info!(target: TARGET, "{line}"),
            Level::Warn => tracing::warn!(target: TARGET, "{line}"),
            Level::Error => tracing::error!(target: TARGET, "{line}"),
        }
        Ok(())
    }
}

/// Logger that hands records to whatever `tracing` subscriber is installed.
/// `with_time` is ignored; the subscriber stamps its own events.
pub fn new_tracing_logger(config: Option<LoggerConfig>) -> Logger {
    Logger::new(TracingSink::new(config.unwrap_or_default()))
}
