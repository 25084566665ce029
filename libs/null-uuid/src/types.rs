//! The nullable UUID value type.
//!
//! [`NullUuid`] pairs a [`Uuid`] with a validity flag. The stored identifier
//! is only observable while the flag is set; every accessor, comparison, and
//! encoder treats an invalid instance as "no value" regardless of its bits.

#[cfg(feature = "serde")]
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use uuid::Uuid;

use crate::NullUuidError;

/// Text spelling of an absent value accepted on decode.
const NULL_LITERAL: &[u8] = b"null";

/// Canonical spelling of the nil UUID, read as an absent value by the JSON
/// and text decoders. Other spellings of nil decode as valid.
const ZERO_LITERAL: &str = "00000000-0000-0000-0000-000000000000";

/// Length of the hyphenated form, the only layout accepted inside JSON.
#[cfg(feature = "serde")]
const HYPHENATED_LEN: usize = 36;

/// Returns true if `text` is blank, `null`, or the canonical nil UUID.
fn is_null_spelling(text: &[u8]) -> bool {
    text.is_empty() || text == NULL_LITERAL || text == ZERO_LITERAL.as_bytes()
}

/// Returns true if `uuid` is the all-zero identifier, which the scan path
/// reads as an absent value.
#[must_use]
pub fn is_zero_sentinel(uuid: &Uuid) -> bool {
    uuid.is_nil()
}

/// A UUID that may be null.
///
/// Marshals to JSON `null` or a quoted hyphenated string, and to an empty
/// string or a hyphenated string as plain text. Blank, `null`, and
/// `00000000-0000-0000-0000-000000000000` decode as null.
///
/// # Example
///
/// ```
/// use null_uuid::{NullUuid, Uuid};
///
/// let id: NullUuid = "14070757-48e6-4b4b-9cd8-98fbf065cf31".parse()?;
/// assert!(id.is_valid());
///
/// let missing: NullUuid = "".parse()?;
/// assert_eq!(missing, NullUuid::NULL);
/// assert_eq!(missing.value_or_zero(), Uuid::nil());
/// # Ok::<(), null_uuid::NullUuidError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NullUuid {
    uuid: Uuid,
    valid: bool,
}

impl NullUuid {
    /// The null value.
    pub const NULL: Self = Self {
        uuid: Uuid::nil(),
        valid: false,
    };

    /// Creates a value from its raw parts.
    #[must_use]
    pub const fn new(uuid: Uuid, valid: bool) -> Self {
        Self { uuid, valid }
    }

    /// Creates a value that is never null, even for the nil UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self::new(uuid, true)
    }

    /// Creates a value that is null when `uuid` is `None`.
    #[must_use]
    pub fn from_option(uuid: Option<&Uuid>) -> Self {
        match uuid {
            Some(uuid) => Self::from_uuid(*uuid),
            None => Self::NULL,
        }
    }

    /// Returns the null value.
    #[must_use]
    pub const fn null() -> Self {
        Self::NULL
    }

    /// Maps a scanned identifier onto a value; nil scans as null.
    pub(crate) fn from_scanned(uuid: Uuid) -> Self {
        Self::new(uuid, !is_zero_sentinel(&uuid))
    }

    /// Returns the inner UUID if valid, otherwise the nil UUID.
    #[must_use]
    pub const fn value_or_zero(&self) -> Uuid {
        if self.valid {
            self.uuid
        } else {
            Uuid::nil()
        }
    }

    /// Returns a reference to the inner UUID, or `None` if null.
    #[must_use]
    pub const fn as_option(&self) -> Option<&Uuid> {
        if self.valid {
            Some(&self.uuid)
        } else {
            None
        }
    }

    /// Consumes the value, returning the inner UUID or `None` if null.
    #[must_use]
    pub const fn into_option(self) -> Option<Uuid> {
        if self.valid {
            Some(self.uuid)
        } else {
            None
        }
    }

    /// Returns true if this value is null.
    ///
    /// Usable as `#[serde(skip_serializing_if = "NullUuid::is_null")]`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        !self.valid
    }

    /// Returns true if this value holds a UUID.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Replaces the inner UUID and marks the value as non-null.
    pub fn set_valid(&mut self, uuid: Uuid) {
        self.uuid = uuid;
        self.valid = true;
    }

    /// Decodes plain text.
    ///
    /// Empty text, `null`, and the hyphenated nil UUID decode as null.
    /// Anything else must parse as a UUID in one of the forms
    /// [`Uuid::try_parse`] accepts, and decodes as valid.
    pub fn from_text(text: &[u8]) -> Result<Self, NullUuidError> {
        if is_null_spelling(text) {
            return Ok(Self::NULL);
        }

        let uuid = Uuid::try_parse_ascii(text).map_err(|source| NullUuidError::Text {
            payload: String::from_utf8_lossy(text).into_owned(),
            source,
        })?;

        Ok(Self::from_uuid(uuid))
    }

    /// Decodes plain text into `self`. On error `self` is left untouched.
    pub fn decode_text_in_place(&mut self, text: &[u8]) -> Result<(), NullUuidError> {
        *self = Self::from_text(text)?;
        Ok(())
    }

    /// Encodes as plain text: empty when null, otherwise the hyphenated
    /// lower-case form.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// Decodes a JSON value.
    ///
    /// Empty input, `null`, and `"00000000-0000-0000-0000-000000000000"`
    /// decode as null. Any other input must be a JSON string holding a
    /// hyphenated UUID.
    #[cfg(feature = "serde")]
    pub fn from_json(data: &[u8]) -> Result<Self, NullUuidError> {
        if data.is_empty() {
            return Ok(Self::NULL);
        }

        serde_json::from_slice(data).map_err(|source| NullUuidError::Json {
            payload: String::from_utf8_lossy(data).into_owned(),
            source,
        })
    }

    /// Decodes a JSON value into `self`. On error `self` is left untouched.
    #[cfg(feature = "serde")]
    pub fn decode_json_in_place(&mut self, data: &[u8]) -> Result<(), NullUuidError> {
        *self = Self::from_json(data)?;
        Ok(())
    }

    /// Encodes as JSON: `null` when null, otherwise a quoted hyphenated
    /// string. A valid nil UUID is emitted as the zero string.
    #[must_use]
    pub fn to_json(&self) -> Vec<u8> {
        match self.as_option() {
            Some(uuid) => format!("\"{}\"", uuid.hyphenated()).into_bytes(),
            None => NULL_LITERAL.to_vec(),
        }
    }
}

impl PartialEq for NullUuid {
    fn eq(&self, other: &Self) -> bool {
        self.as_option() == other.as_option()
    }
}

impl Eq for NullUuid {}

impl Hash for NullUuid {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_option().hash(state);
    }
}

impl fmt::Display for NullUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_option() {
            Some(uuid) => write!(f, "{}", uuid.hyphenated()),
            None => Ok(()),
        }
    }
}

impl FromStr for NullUuid {
    type Err = NullUuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(s.as_bytes())
    }
}

impl From<Uuid> for NullUuid {
    fn from(uuid: Uuid) -> Self {
        Self::from_uuid(uuid)
    }
}

impl From<Option<Uuid>> for NullUuid {
    fn from(uuid: Option<Uuid>) -> Self {
        Self::from_option(uuid.as_ref())
    }
}

impl From<Option<&Uuid>> for NullUuid {
    fn from(uuid: Option<&Uuid>) -> Self {
        Self::from_option(uuid)
    }
}

impl From<NullUuid> for Option<Uuid> {
    fn from(value: NullUuid) -> Self {
        value.into_option()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for NullUuid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self.as_option() {
            Some(uuid) => serializer.serialize_some(uuid),
            None => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for NullUuid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        let Some(text) = Option::<Cow<'de, str>>::deserialize(deserializer)? else {
            return Ok(Self::NULL);
        };
        if text == ZERO_LITERAL {
            return Ok(Self::NULL);
        }
        if text.len() != HYPHENATED_LEN {
            return Err(D::Error::invalid_length(
                text.len(),
                &"a 36-character hyphenated UUID",
            ));
        }

        Uuid::try_parse(&text)
            .map(Self::from_uuid)
            .map_err(D::Error::custom)
    }
}
