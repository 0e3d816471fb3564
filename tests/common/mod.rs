//! Common test utilities and shared imports

// Allow unused imports and dead code since this is a shared module
// used across multiple test files - not all items are used in every test file
#[allow(unused_imports)]
pub use usbcore::component;
#[allow(unused_imports)]
pub use usbcore::kv;
#[allow(unused_imports)]
pub use usbcore::logging::{self, Level, Logger, LoggerConfig, MemoryWriter, Value};
#[allow(unused_imports)]
pub use usbcore::{ErrorKind, FailsWith, TransferStatus, UsbError, is_kind};

use std::sync::{Mutex, MutexGuard, PoisonError};

static GLOBAL_LOGGING: Mutex<()> = Mutex::new(());

/// Serializes tests that touch the process-wide level or logger.
#[allow(dead_code)]
pub fn serial() -> MutexGuard<'static, ()> {
    GLOBAL_LOGGING.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Installs a text logger on a fresh buffer, without timestamps, and resets the level.
#[allow(dead_code)]
pub fn capture_text(level: Level) -> MemoryWriter {
    let buf = MemoryWriter::new();
    logging::set_level(level);
    logging::set_logger(logging::new_text_logger(
        buf.clone(),
        Some(LoggerConfig::default().without_time()),
    ));
    buf
}

/// Same as [`capture_text`] but with the JSON lines sink.
#[allow(dead_code)]
pub fn capture_json(level: Level) -> MemoryWriter {
    let buf = MemoryWriter::new();
    logging::set_level(level);
    logging::set_logger(logging::new_structured_logger(buf.clone(), None));
    buf
}
