//! Postgres bind and decode support.
//!
//! Both directions delegate to `uuid::Uuid`'s own sqlx implementations. A
//! NULL column or a nil UUID decodes as null, matching [`Scan`](crate::Scan).

use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::postgres::{PgArgumentBuffer, PgTypeInfo, PgValueRef, Postgres};
use sqlx::{Decode, Encode, Type, ValueRef};
use uuid::Uuid;

use crate::NullUuid;

impl Type<Postgres> for NullUuid {
    fn type_info() -> PgTypeInfo {
        <Uuid as Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <Uuid as Type<Postgres>>::compatible(ty)
    }
}

impl<'q> Encode<'q, Postgres> for NullUuid {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        match self.as_option() {
            Some(uuid) => <Uuid as Encode<'q, Postgres>>::encode_by_ref(uuid, buf),
            None => Ok(IsNull::Yes),
        }
    }
}

impl<'r> Decode<'r, Postgres> for NullUuid {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        if value.is_null() {
            return Ok(NullUuid::NULL);
        }

        let uuid = <Uuid as Decode<'r, Postgres>>::decode(value)?;
        Ok(NullUuid::from_scanned(uuid))
    }
}
