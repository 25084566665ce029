//! Error types for decoding and scanning nullable UUIDs.

use thiserror::Error;

/// Errors that can occur when decoding a [`NullUuid`](crate::NullUuid) from
/// JSON or plain text.
#[derive(Debug, Error)]
pub enum NullUuidError {
    /// The JSON payload was not `null`, the zero sentinel, or a UUID string.
    #[cfg(feature = "serde")]
    #[error("null: couldn't unmarshal uuid from json {payload:?}: {source}")]
    Json {
        payload: String,
        #[source]
        source: serde_json::Error,
    },

    /// The text payload could not be parsed as a UUID.
    #[error("null: couldn't unmarshal text {payload:?}: {source}")]
    Text {
        payload: String,
        #[source]
        source: uuid::Error,
    },
}

impl NullUuidError {
    /// Returns true if the error came from the JSON decode path.
    pub fn is_json(&self) -> bool {
        match self {
            #[cfg(feature = "serde")]
            NullUuidError::Json { .. } => true,
            _ => false,
        }
    }

    /// Returns true if the error came from the plain-text decode path.
    pub fn is_text(&self) -> bool {
        matches!(self, NullUuidError::Text { .. })
    }

    /// The raw payload that failed to decode, lossily converted to UTF-8.
    pub fn payload(&self) -> &str {
        match self {
            #[cfg(feature = "serde")]
            NullUuidError::Json { payload, .. } => payload,
            NullUuidError::Text { payload, .. } => payload,
        }
    }
}

/// Errors returned by [`Scan`](crate::Scan) implementations when a driver
/// value cannot be converted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// The driver handed over a type that has no UUID representation.
    #[error("uuid: cannot convert {0} to uuid")]
    UnsupportedType(&'static str),

    /// Textual driver value failed to parse.
    #[error("uuid: invalid text {payload:?}: {message}")]
    InvalidText { payload: String, message: String },

    /// Binary driver value was neither 16 raw bytes nor UTF-8 text.
    #[error("uuid: invalid binary value of length {len}")]
    InvalidBytes { len: usize },
}

impl ScanError {
    /// Returns true if the driver value had a type scan does not accept.
    pub fn is_unsupported_type(&self) -> bool {
        matches!(self, ScanError::UnsupportedType(_))
    }
}
