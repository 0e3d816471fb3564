// src/error.rs

use std::borrow::Cow;
use std::error::Error as StdError;
use thiserror::Error;

/// Sentinel error conditions shared by the whole USB stack.
///
/// Each variant is a process-wide constant. Two errors are the same kind iff
/// they are the same variant; the message text plays no part in identity.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    #[error("endpoint stalled")]
    Stall,

    #[error("NAK received")]
    Nak,

    #[error("transfer timeout")]
    Timeout,

    #[error("transfer cancelled")]
    Cancelled,

    #[error("data overrun")]
    Overrun,

    #[error("data underrun")]
    Underrun,

    #[error("CRC error")]
    Crc,

    #[error("bit stuffing error")]
    BitStuff,

    #[error("protocol error")]
    Protocol,

    #[error("no device")]
    NoDevice,

    #[error("device not configured")]
    NotConfigured,

    #[error("invalid endpoint")]
    InvalidEndpoint,

    #[error("invalid state")]
    InvalidState,

    #[error("invalid request")]
    InvalidRequest,

    #[error("buffer too small")]
    BufferTooSmall,

    #[error("not supported")]
    NotSupported,

    #[error("resource busy")]
    Busy,

    #[error("out of memory")]
    NoMemory,

    #[error("insufficient bandwidth")]
    InsufficientBandwidth,

    #[error("frame overrun")]
    FrameOverrun,

    #[error("descriptor too short")]
    DescriptorTooShort,

    #[error("descriptor type mismatch")]
    DescriptorTypeMismatch,

    #[error("setup packet too short")]
    SetupPacketTooShort,

    #[error("already running")]
    AlreadyRunning,

    #[error("not running")]
    NotRunning,

    #[error("invalid parameter")]
    InvalidParameter,

    #[error("no resources available")]
    NoResources,

    #[error("bus reset")]
    Reset,
}

impl ErrorKind {
    /// Every sentinel, in declaration order.
    pub const ALL: [ErrorKind; 28] = [
        ErrorKind::Stall,
        ErrorKind::Nak,
        ErrorKind::Timeout,
        ErrorKind::Cancelled,
        ErrorKind::Overrun,
        ErrorKind::Underrun,
        ErrorKind::Crc,
        ErrorKind::BitStuff,
        ErrorKind::Protocol,
        ErrorKind::NoDevice,
        ErrorKind::NotConfigured,
        ErrorKind::InvalidEndpoint,
        ErrorKind::InvalidState,
        ErrorKind::InvalidRequest,
        ErrorKind::BufferTooSmall,
        ErrorKind::NotSupported,
        ErrorKind::Busy,
        ErrorKind::NoMemory,
        ErrorKind::InsufficientBandwidth,
        ErrorKind::FrameOverrun,
        ErrorKind::DescriptorTooShort,
        ErrorKind::DescriptorTypeMismatch,
        ErrorKind::SetupPacketTooShort,
        ErrorKind::AlreadyRunning,
        ErrorKind::NotRunning,
        ErrorKind::InvalidParameter,
        ErrorKind::NoResources,
        ErrorKind::Reset,
    ];

    /// Returns true if `err` or anything in its source chain is this kind.
    pub fn matches(self, err: &(dyn StdError + 'static)) -> bool {
        is_kind(err, self)
    }
}

/// An [`ErrorKind`] with a description of what the stack was doing.
///
/// The kind is reported as the error source, so [`is_kind`] still finds it
/// after further wrapping.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{context}")]
pub struct UsbError {
    context: Cow<'static, str>,
    #[source]
    kind: ErrorKind,
}

impl UsbError {
    pub fn new(kind: ErrorKind, context: impl Into<Cow<'static, str>>) -> Self {
        Self {
            context: context.into(),
            kind,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }
}

impl From<ErrorKind> for UsbError {
    fn from(kind: ErrorKind) -> Self {
        // Context defaults to the kind's own message so Display stays useful.
        Self::new(kind, kind.to_string())
    }
}

pub type Result<T, E = UsbError> = std::result::Result<T, E>;

/// Identity-aware "fails with" predicate.
///
/// Walks `err` and its `source()` chain and compares by variant, never by
/// message text.
pub fn is_kind(err: &(dyn StdError + 'static), kind: ErrorKind) -> bool {
    std::iter::successors(Some(err), |&e| e.source())
        .any(|e| e.downcast_ref::<ErrorKind>() == Some(&kind))
}

/// Extension for checking a result against a sentinel.
pub trait FailsWith {
    fn fails_with(&self, kind: ErrorKind) -> bool;
}

impl<T, E> FailsWith for std::result::Result<T, E>
where
    E: StdError + 'static,
{
    fn fails_with(&self, kind: ErrorKind) -> bool {
        self.as_ref().err().is_some_and(|e| is_kind(e, kind))
    }
}

#[cfg(feature = "nusb")]
impl From<nusb::transfer::TransferError> for ErrorKind {
    fn from(err: nusb::transfer::TransferError) -> Self {
        use nusb::transfer::TransferError;

        match err {
            TransferError::Cancelled => ErrorKind::Cancelled,
            TransferError::Stall => ErrorKind::Stall,
            TransferError::Disconnected => ErrorKind::NoDevice,
            _ => ErrorKind::Protocol,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_kinds_distinct() {
        let set: HashSet<ErrorKind> = ErrorKind::ALL.iter().copied().collect();
        assert_eq!(set.len(), 28);
    }

    #[test]
    fn test_usb_error_display_and_source() {
        let err = UsbError::new(ErrorKind::Stall, "clear halt on ep 0x81");
        assert_eq!(err.to_string(), "clear halt on ep 0x81");
        assert_eq!(err.kind(), ErrorKind::Stall);

        let source = err.source().expect("kind should be the source");
        assert_eq!(source.to_string(), "endpoint stalled");
    }

    #[test]
    fn test_from_kind_keeps_message() {
        let err = UsbError::from(ErrorKind::Busy);
        assert_eq!(err.context(), "resource busy");
        assert!(err.is(ErrorKind::Busy));
        assert!(!err.is(ErrorKind::NoResources));
    }

    #[test]
    fn test_fails_with_on_result() {
        let res: Result<()> = Err(UsbError::new(ErrorKind::Timeout, "control read"));
        assert!(res.fails_with(ErrorKind::Timeout));
        assert!(!res.fails_with(ErrorKind::Nak));

        let ok: Result<u8> = Ok(3);
        assert!(!ok.fails_with(ErrorKind::Timeout));

        let bare: std::result::Result<(), ErrorKind> = Err(ErrorKind::Nak);
        assert!(bare.fails_with(ErrorKind::Nak));
    }

    #[derive(Error, Debug)]
    #[error("enumeration failed")]
    struct Enumeration(#[source] UsbError);

    #[test]
    fn test_is_kind_walks_nested_sources() {
        let inner = UsbError::new(ErrorKind::DescriptorTooShort, "config descriptor");
        let err = Enumeration(inner);
        assert!(is_kind(&err, ErrorKind::DescriptorTooShort));
        assert!(ErrorKind::DescriptorTooShort.matches(&err));
        assert!(!is_kind(&err, ErrorKind::DescriptorTypeMismatch));

        let res: std::result::Result<(), Enumeration> = Err(err);
        assert!(res.fails_with(ErrorKind::DescriptorTooShort));
    }

    #[cfg(feature = "nusb")]
    #[test]
    fn test_nusb_transfer_error_mapping() {
        use nusb::transfer::TransferError;

        let cases = [
            (TransferError::Stall, ErrorKind::Stall),
            (TransferError::Cancelled, ErrorKind::Cancelled),
            (TransferError::Disconnected, ErrorKind::NoDevice),
            (TransferError::Fault, ErrorKind::Protocol),
        ];
        for (err, kind) in cases {
            assert_eq!(ErrorKind::from(err), kind, "{:?}", err);
        }
    }
}
