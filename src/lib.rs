pub mod component;
pub mod error;
pub mod logging;
pub mod status;

// Re-export the types every protocol layer touches
pub use error::{ErrorKind, FailsWith, Result, UsbError, is_kind};
pub use logging::{Level, Value, log_debug, log_error, log_info, log_warn};
pub use status::TransferStatus;
