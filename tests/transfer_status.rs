//! Tests for TransferStatus names and error mapping

mod common;

use common::*;

const NAMES: [&str; 8] = [
    "success",
    "error",
    "stall",
    "nak",
    "timeout",
    "cancelled",
    "overrun",
    "underrun",
];

#[test]
fn test_defined_names() {
    for (code, expected) in NAMES.iter().enumerate() {
        let status = TransferStatus::from(code as i32);
        assert!(status.is_defined());
        assert_eq!(status.name(), *expected);
        assert_ne!(status.name(), "unknown");
    }
}

#[test]
fn test_out_of_range_codes() {
    for code in [-1, -100, 8, 9, 255, 1 << 20, i32::MIN, i32::MAX] {
        let status = TransferStatus::from(code);
        assert!(!status.is_defined(), "code {}", code);
        assert_eq!(status.name(), "unknown", "code {}", code);
        assert_eq!(status.as_error(), Some(ErrorKind::Protocol), "code {}", code);
    }
}

#[test]
fn test_error_mapping() {
    assert_eq!(TransferStatus::Success.as_error(), None);
    assert_eq!(TransferStatus::Error.as_error(), Some(ErrorKind::Protocol));

    let cases = [
        (TransferStatus::Stall, ErrorKind::Stall),
        (TransferStatus::Nak, ErrorKind::Nak),
        (TransferStatus::Timeout, ErrorKind::Timeout),
        (TransferStatus::Cancelled, ErrorKind::Cancelled),
        (TransferStatus::Overrun, ErrorKind::Overrun),
        (TransferStatus::Underrun, ErrorKind::Underrun),
    ];
    for (status, kind) in cases {
        let err = status.as_error().expect("status should map to an error");
        assert!(is_kind(&err, kind), "{:?} should map to {:?}", status, kind);
        for other in ErrorKind::ALL.into_iter().filter(|k| *k != kind) {
            assert!(!is_kind(&err, other));
        }
    }
}
