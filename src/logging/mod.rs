//! Process-wide, component-tagged logging facade.
//!
//! A single configuration record (threshold plus active [`Logger`]) lives
//! behind a reader/writer lock. `log_*` calls take the read lock only long
//! enough to clone the logger handle; formatting and the destination write
//! happen after the lock is released.
//!
//! ```
//! use usbcore::{component, kv};
//! use usbcore::logging::{self, Level, LoggerConfig, MemoryWriter};
//!
//! let buf = MemoryWriter::new();
//! let config = LoggerConfig::default().without_time();
//! logging::set_logger(logging::new_text_logger(buf.clone(), Some(config)));
//! logging::log_warn(component::ENDPOINT, "stalled", &kv!["ep", 0x81u8]);
//! assert_eq!(buf.contents(), "level=WARN msg=stalled component=endpoint ep=129\n");
//! ```

mod bridge;
mod json;
mod level;
mod sink;
mod text;
mod value;
mod writer;

pub use bridge::{TARGET, TracingSink, new_tracing_logger};
pub use json::{JsonSink, new_structured_logger};
pub use level::{Level, ParseLevelError};
pub use sink::{Logger, LoggerConfig, Record, Sink};
pub use text::{TextSink, new_text_logger};
pub use value::{BAD_KEY, Value, pairs};
pub use writer::MemoryWriter;

use crate::component::KEY as COMPONENT_KEY;
use std::sync::{LazyLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

struct Config {
    level: Level,
    logger: Logger,
}

static CONFIG: LazyLock<RwLock<Config>> = LazyLock::new(|| {
    RwLock::new(Config {
        level: Level::Info,
        logger: new_text_logger(std::io::stderr, None),
    })
});

// Config holds plain values that are never left half-updated, so a poisoned
// lock is still safe to use.
fn read_config() -> RwLockReadGuard<'static, Config> {
    CONFIG.read().unwrap_or_else(PoisonError::into_inner)
}

fn write_config() -> RwLockWriteGuard<'static, Config> {
    CONFIG.write().unwrap_or_else(PoisonError::into_inner)
}

/// Replaces the process-wide threshold.
pub fn set_level(level: Level) {
    let previous = std::mem::replace(&mut write_config().level, level);
    if previous != level {
        tracing::debug!(from = %previous, to = %level, "log threshold changed");
    }
}

pub fn get_level() -> Level {
    read_config().level
}

/// Installs `logger` for all subsequent `log_*` calls.
pub fn set_logger(logger: Logger) {
    let previous = std::mem::replace(&mut write_config().logger, logger);
    // Dropped outside the lock; writes already holding a clone finish on it.
    drop(previous);
    tracing::trace!("active log sink replaced");
}

/// Handle to the active logger.
pub fn logger() -> Logger {
    read_config().logger.clone()
}

/// Emits `message` at `level` tagged with `component`.
///
/// `kv` alternates keys and values; see [`pairs`] for how malformed slices
/// are flagged.
pub fn log(level: Level, component: &str, message: &str, kv: &[Value]) {
    let logger = logger();
    if !logger.enabled(level) {
        return;
    }
    let tag = Value::from(component);
    let mut fields = Vec::with_capacity(kv.len() / 2 + 1);
    fields.push((COMPONENT_KEY, &tag));
    fields.extend(pairs(kv));
    logger.emit(&Record::new(level, message, fields));
}

pub fn log_debug(component: &str, message: &str, kv: &[Value]) {
    log(Level::Debug, component, message, kv);
}

pub fn log_info(component: &str, message: &str, kv: &[Value]) {
    log(Level::Info, component, message, kv);
}

pub fn log_warn(component: &str, message: &str, kv: &[Value]) {
    log(Level::Warn, component, message, kv);
}

pub fn log_error(component: &str, message: &str, kv: &[Value]) {
    log(Level::Error, component, message, kv);
}
