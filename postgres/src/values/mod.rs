//! PostgreSQL bound-value type and conversions

mod conversions;
mod drivers;

use crate::prelude::*;

#[cfg(feature = "uuid")]
use uuid::Uuid;

#[cfg(feature = "chrono")]
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};

//------------------------------------------------------------------------------
// PostgresValue Definition
//------------------------------------------------------------------------------

/// Represents a PostgreSQL value bound to a numbered placeholder.
///
/// # Examples
///
/// ```
/// use sqlbatch_postgres::values::PostgresValue;
///
/// // Integer conversion
/// let int_val: PostgresValue<'_> = 42i32.into();
/// assert!(matches!(int_val, PostgresValue::Integer(42)));
///
/// // String conversion
/// let str_val: PostgresValue<'_> = "hello".into();
/// assert!(matches!(str_val, PostgresValue::Text(_)));
///
/// // Missing optional values bind as NULL
/// let null_val: PostgresValue<'_> = Option::<i64>::None.into();
/// assert!(matches!(null_val, PostgresValue::Null));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PostgresValue<'a> {
    /// SMALLINT values (16-bit signed integer)
    Smallint(i16),
    /// INTEGER values (32-bit signed integer)
    Integer(i32),
    /// BIGINT values (64-bit signed integer)
    Bigint(i64),
    /// REAL values (32-bit floating point)
    Real(f32),
    /// DOUBLE PRECISION values (64-bit floating point)
    DoublePrecision(f64),
    /// TEXT, VARCHAR, CHAR values
    Text(Cow<'a, str>),
    /// BYTEA values (binary data)
    Bytea(Cow<'a, [u8]>),
    /// BOOLEAN values
    Boolean(bool),
    /// UUID values
    #[cfg(feature = "uuid")]
    Uuid(Uuid),
    /// JSON values
    #[cfg(feature = "serde")]
    Json(serde_json::Value),
    /// JSONB values
    #[cfg(feature = "serde")]
    Jsonb(serde_json::Value),

    // Date and time types
    /// DATE values
    #[cfg(feature = "chrono")]
    Date(NaiveDate),
    /// TIME values
    #[cfg(feature = "chrono")]
    Time(NaiveTime),
    /// TIMESTAMP values (without timezone)
    #[cfg(feature = "chrono")]
    Timestamp(NaiveDateTime),
    /// TIMESTAMPTZ values (with timezone)
    #[cfg(feature = "chrono")]
    TimestampTz(DateTime<FixedOffset>),

    /// Array of any PostgreSQL type
    Array(Vec<PostgresValue<'a>>),

    /// NULL value
    #[default]
    Null,
}

/// Values extracted from records own their data.
pub type BoundValue = PostgresValue<'static>;

impl<'a> PostgresValue<'a> {
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, PostgresValue::Null)
    }

    /// Detaches the value from any borrowed data.
    pub fn into_owned(self) -> PostgresValue<'static> {
        match self {
            PostgresValue::Smallint(i) => PostgresValue::Smallint(i),
            PostgresValue::Integer(i) => PostgresValue::Integer(i),
            PostgresValue::Bigint(i) => PostgresValue::Bigint(i),
            PostgresValue::Real(r) => PostgresValue::Real(r),
            PostgresValue::DoublePrecision(r) => PostgresValue::DoublePrecision(r),
            PostgresValue::Text(cow) => PostgresValue::Text(Cow::Owned(cow.into_owned())),
            PostgresValue::Bytea(cow) => PostgresValue::Bytea(Cow::Owned(cow.into_owned())),
            PostgresValue::Boolean(b) => PostgresValue::Boolean(b),
            #[cfg(feature = "uuid")]
            PostgresValue::Uuid(uuid) => PostgresValue::Uuid(uuid),
            #[cfg(feature = "serde")]
            PostgresValue::Json(json) => PostgresValue::Json(json),
            #[cfg(feature = "serde")]
            PostgresValue::Jsonb(json) => PostgresValue::Jsonb(json),
            #[cfg(feature = "chrono")]
            PostgresValue::Date(date) => PostgresValue::Date(date),
            #[cfg(feature = "chrono")]
            PostgresValue::Time(time) => PostgresValue::Time(time),
            #[cfg(feature = "chrono")]
            PostgresValue::Timestamp(ts) => PostgresValue::Timestamp(ts),
            #[cfg(feature = "chrono")]
            PostgresValue::TimestampTz(ts) => PostgresValue::TimestampTz(ts),
            PostgresValue::Array(arr) => {
                PostgresValue::Array(arr.into_iter().map(PostgresValue::into_owned).collect())
            }
            PostgresValue::Null => PostgresValue::Null,
        }
    }
}

impl<'a> core::fmt::Display for PostgresValue<'a> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let value = match self {
            PostgresValue::Smallint(i) => i.to_string(),
            PostgresValue::Integer(i) => i.to_string(),
            PostgresValue::Bigint(i) => i.to_string(),
            PostgresValue::Real(r) => r.to_string(),
            PostgresValue::DoublePrecision(r) => r.to_string(),
            PostgresValue::Text(cow) => cow.to_string(),
            PostgresValue::Bytea(cow) => format!(
                "\\x{}",
                cow.iter().map(|b| format!("{:02x}", b)).collect::<String>()
            ),
            PostgresValue::Boolean(b) => b.to_string(),
            #[cfg(feature = "uuid")]
            PostgresValue::Uuid(uuid) => uuid.to_string(),
            #[cfg(feature = "serde")]
            PostgresValue::Json(json) => json.to_string(),
            #[cfg(feature = "serde")]
            PostgresValue::Jsonb(json) => json.to_string(),

            // Date and time types
            #[cfg(feature = "chrono")]
            PostgresValue::Date(date) => date.format("%Y-%m-%d").to_string(),
            #[cfg(feature = "chrono")]
            PostgresValue::Time(time) => time.format("%H:%M:%S%.f").to_string(),
            #[cfg(feature = "chrono")]
            PostgresValue::Timestamp(ts) => ts.format("%Y-%m-%d %H:%M:%S%.f").to_string(),
            #[cfg(feature = "chrono")]
            PostgresValue::TimestampTz(ts) => ts.format("%Y-%m-%d %H:%M:%S%.f %:z").to_string(),

            // Array types
            PostgresValue::Array(arr) => {
                let elements: Vec<String> = arr.iter().map(|v| v.to_string()).collect();
                format!("{{{}}}", elements.join(","))
            }

            PostgresValue::Null => String::new(),
        };
        write!(f, "{value}")
    }
}
