use crate::error::ErrorKind;
use num_enum::{FromPrimitive, IntoPrimitive};
use std::ops::RangeInclusive;
use strum_macros::{Display, IntoStaticStr};

/// Completion status of a USB transfer, as reported by the controller.
///
/// Raw codes outside `0..=7` land in `Unknown` instead of failing conversion.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr, FromPrimitive, IntoPrimitive,
)]
#[strum(serialize_all = "lowercase")]
#[repr(i32)]
pub enum TransferStatus {
    Success = 0,
    Error = 1,
    Stall = 2,
    Nak = 3,
    Timeout = 4,
    Cancelled = 5,
    Overrun = 6,
    Underrun = 7,

    #[num_enum(catch_all)]
    Unknown(i32),
}

impl TransferStatus {
    /// Raw codes with a named variant.
    pub const DEFINED: RangeInclusive<i32> = 0..=7;

    pub const ALL: [TransferStatus; 8] = [
        TransferStatus::Success,
        TransferStatus::Error,
        TransferStatus::Stall,
        TransferStatus::Nak,
        TransferStatus::Timeout,
        TransferStatus::Cancelled,
        TransferStatus::Overrun,
        TransferStatus::Underrun,
    ];

    pub fn code(self) -> i32 {
        self.into()
    }

    pub fn is_defined(self) -> bool {
        Self::DEFINED.contains(&self.code())
    }

    /// Re-classifies the raw code, so a hand-built `Unknown(2)` reads as `Stall`.
    fn normalized(self) -> Self {
        Self::from_primitive(self.code())
    }

    /// Canonical lowercase name; `"unknown"` for anything out of range.
    pub fn name(self) -> &'static str {
        self.normalized().into()
    }

    /// Maps the status onto the error taxonomy.
    ///
    /// `Success` is the only status without an error. `Error` and every
    /// out-of-range code map to [`ErrorKind::Protocol`].
    pub fn as_error(self) -> Option<ErrorKind> {
        match self.normalized() {
            TransferStatus::Success => None,
            TransferStatus::Stall => Some(ErrorKind::Stall),
            TransferStatus::Nak => Some(ErrorKind::Nak),
            TransferStatus::Timeout => Some(ErrorKind::Timeout),
            TransferStatus::Cancelled => Some(ErrorKind::Cancelled),
            TransferStatus::Overrun => Some(ErrorKind::Overrun),
            TransferStatus::Underrun => Some(ErrorKind::Underrun),
            TransferStatus::Error | TransferStatus::Unknown(_) => Some(ErrorKind::Protocol),
        }
    }

    pub fn into_result(self) -> Result<(), ErrorKind> {
        match self.as_error() {
            Some(kind) => Err(kind),
            None => Ok(()),
        }
    }
}
