//! Database scan and bind contract.
//!
//! Drivers hand over loosely typed values; [`DriverValue`] models the shapes
//! a UUID column can arrive in. [`Scan`] converts such a value into a typed
//! one. `Uuid` carries the base conversion and [`NullUuid`] layers its
//! validity rule on top of it.

use uuid::Uuid;

use crate::{NullUuid, ScanError};

/// A raw value as returned by a database driver.
#[derive(Debug, Clone, PartialEq)]
pub enum DriverValue {
    /// SQL NULL.
    Null,
    Text(String),
    Bytes(Vec<u8>),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl DriverValue {
    /// Name of the value's type, used in error messages.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            DriverValue::Null => "null",
            DriverValue::Text(_) => "text",
            DriverValue::Bytes(_) => "bytes",
            DriverValue::Int(_) => "int64",
            DriverValue::Float(_) => "float64",
            DriverValue::Bool(_) => "bool",
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, DriverValue::Null)
    }
}

impl From<&str> for DriverValue {
    fn from(text: &str) -> Self {
        DriverValue::Text(text.to_owned())
    }
}

impl From<String> for DriverValue {
    fn from(text: String) -> Self {
        DriverValue::Text(text)
    }
}

impl From<&[u8]> for DriverValue {
    fn from(bytes: &[u8]) -> Self {
        DriverValue::Bytes(bytes.to_vec())
    }
}

impl From<Vec<u8>> for DriverValue {
    fn from(bytes: Vec<u8>) -> Self {
        DriverValue::Bytes(bytes)
    }
}

impl From<i64> for DriverValue {
    fn from(value: i64) -> Self {
        DriverValue::Int(value)
    }
}

impl From<f64> for DriverValue {
    fn from(value: f64) -> Self {
        DriverValue::Float(value)
    }
}

impl From<bool> for DriverValue {
    fn from(value: bool) -> Self {
        DriverValue::Bool(value)
    }
}

/// Conversion from a raw driver value.
pub trait Scan: Sized {
    /// Converts `src` into `Self`.
    fn scan(src: &DriverValue) -> Result<Self, ScanError>;
}

/// Base identifier scan.
///
/// NULL and empty text scan to the nil UUID. Text is parsed in any form
/// [`Uuid::try_parse`] accepts. Sixteen bytes are taken as the raw UUID;
/// other byte lengths are parsed as text, and only non-UTF-8 bytes are
/// reported as [`ScanError::InvalidBytes`].
impl Scan for Uuid {
    fn scan(src: &DriverValue) -> Result<Self, ScanError> {
        match src {
            DriverValue::Null => Ok(Uuid::nil()),
            DriverValue::Text(text) => scan_text(text.as_bytes()),
            DriverValue::Bytes(bytes) => match <[u8; 16]>::try_from(bytes.as_slice()) {
                Ok(raw) => Ok(Uuid::from_bytes(raw)),
                Err(_) => match std::str::from_utf8(bytes) {
                    Ok(text) => scan_text(text.as_bytes()),
                    Err(_) => Err(ScanError::InvalidBytes { len: bytes.len() }),
                },
            },
            other => Err(ScanError::UnsupportedType(other.type_name())),
        }
    }
}

fn scan_text(text: &[u8]) -> Result<Uuid, ScanError> {
    if text.is_empty() {
        return Ok(Uuid::nil());
    }

    Uuid::try_parse_ascii(text).map_err(|err| ScanError::InvalidText {
        payload: String::from_utf8_lossy(text).into_owned(),
        message: err.to_string(),
    })
}

/// Scans through the base identifier scan; the value is valid iff the
/// scanned UUID is not nil. Base scan errors are returned as-is.
impl Scan for NullUuid {
    fn scan(src: &DriverValue) -> Result<Self, ScanError> {
        let uuid = Uuid::scan(src)?;
        Ok(NullUuid::from_scanned(uuid))
    }
}

impl NullUuid {
    /// Scans `src` into `self`. On error `self` is left untouched.
    pub fn scan_in_place(&mut self, src: &DriverValue) -> Result<(), ScanError> {
        *self = Self::scan(src)?;
        Ok(())
    }

    /// Returns the bind parameter form: NULL when null, otherwise the
    /// identifier's own text encoding.
    #[must_use]
    pub fn to_driver_value(&self) -> DriverValue {
        match self.as_option() {
            Some(uuid) => DriverValue::Text(uuid.hyphenated().to_string()),
            None => DriverValue::Null,
        }
    }
}
