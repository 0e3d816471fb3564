use crate::error::{ErrorKind, UsbError};
use crate::status::TransferStatus;
use serde::Serialize;
use std::fmt;

/// Field name used for a key slot that is not a string, or a key with no value.
pub const BAD_KEY: &str = "!BADKEY";

/// A log field value. Keys travel as `Value::Str` in the same slice.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Str(String),
    I64(i64),
    U64(u64),
    F64(f64),
    Bool(bool),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::I64(v) => write!(f, "{v}"),
            Value::U64(v) => write!(f, "{v}"),
            Value::F64(v) => write!(f, "{v}"),
            Value::Bool(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::Str(s.clone())
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $wide:ty: $($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::$variant(v as $wide)
                }
            }
        )*
    };
}

impl_from_int!(I64, i64: i8, i16, i32, i64, isize);
impl_from_int!(U64, u64: u8, u16, u32, u64, usize);

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::F64(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::F64(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<ErrorKind> for Value {
    fn from(kind: ErrorKind) -> Self {
        Value::Str(kind.to_string())
    }
}

impl From<&UsbError> for Value {
    fn from(err: &UsbError) -> Self {
        Value::Str(format!("{}: {}", err.context(), err.kind()))
    }
}

impl From<TransferStatus> for Value {
    fn from(status: TransferStatus) -> Self {
        Value::Str(status.name().to_string())
    }
}

/// Splits an alternating key/value slice into fields.
///
/// A string followed by another element forms a pair. Anything else (a
/// non-string in key position, or a trailing key) becomes a `!BADKEY` field
/// holding that element, and pairing resumes at the next element.
pub fn pairs(kv: &[Value]) -> Vec<(&str, &Value)> {
    let mut fields = Vec::with_capacity(kv.len() / 2 + 1);
    let mut rest = kv;
    while let Some((first, tail)) = rest.split_first() {
        match (first, tail.split_first()) {
            (Value::Str(key), Some((value, tail))) => {
                fields.push((key.as_str(), value));
                rest = tail;
            }
            _ => {
                fields.push((BAD_KEY, first));
                rest = tail;
            }
        }
    }
    fields
}

/// Builds a `[Value; N]` from mixed literals for the `log_*` calls.
///
/// ```
/// use usbcore::kv;
/// let fields = kv!["endpoint", 0x81u8, "len", 64, "short", false];
/// assert_eq!(fields.len(), 6);
/// ```
#[macro_export]
macro_rules! kv {
    ($($v:expr),* $(,)?) => {
        [$($crate::logging::Value::from($v)),*]
    };
}
