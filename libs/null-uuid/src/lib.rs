//! # null-uuid
//!
//! A nullable UUID value type for optional identifier fields, such as a
//! foreign key that may be unset.
//!
//! ## Design Principles
//!
//! - A value is either null or holds a UUID; the stored bits of a null value
//!   are never observable
//! - Null is spelled `null` in JSON and as an empty string in plain text
//! - Blank input, `null`, and the canonical nil UUID string decode as null;
//!   other nil spellings decode as a real nil value
//! - Encode is exact: a non-null nil UUID is written out as the zero string
//! - The database scan path treats NULL and the nil UUID alike
//!
//! ## Wire Forms
//!
//! | Path  | Null        | Non-null                                   |
//! |-------|-------------|--------------------------------------------|
//! | JSON  | `null`      | `"14070757-48e6-4b4b-9cd8-98fbf065cf31"`   |
//! | Text  | empty       | `14070757-48e6-4b4b-9cd8-98fbf065cf31`     |
//! | Bind  | SQL NULL    | hyphenated text                            |
//!
//! ## Features
//!
//! - `serde` (default): `Serialize`/`Deserialize` and [`NullUuid::from_json`]
//! - `sqlx`: Postgres `Type`, `Encode`, and `Decode`

mod error;
mod scan;
#[cfg(feature = "sqlx")]
mod postgres;
mod types;

pub use error::{NullUuidError, ScanError};
pub use scan::{DriverValue, Scan};
pub use types::*;

/// Re-export uuid for consumers that need to build raw identifiers
pub use uuid::Uuid;
