//! From<T> implementations

use super::PostgresValue;
use crate::prelude::*;
use sqlbatch_core::BatchError;

#[cfg(feature = "uuid")]
use uuid::Uuid;

#[cfg(feature = "chrono")]
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};

//------------------------------------------------------------------------------
// From<T> implementations
//------------------------------------------------------------------------------

/// Implements `From<T>` and `From<&T>` for copyable scalars, widening into the
/// given variant.
macro_rules! impl_from_scalar {
    ($($ty:ty => $variant:ident as $target:ty),* $(,)?) => {
        $(
            impl<'a> From<$ty> for PostgresValue<'a> {
                fn from(value: $ty) -> Self {
                    PostgresValue::$variant(value as $target)
                }
            }

            impl<'a> From<&'a $ty> for PostgresValue<'a> {
                fn from(value: &'a $ty) -> Self {
                    PostgresValue::$variant(*value as $target)
                }
            }
        )*
    };
}

// --- Integer Types ---
// PostgreSQL has no unsigned or 8-bit types; values widen to the next signed
// type that holds them.
impl_from_scalar! {
    i8 => Smallint as i16,
    i16 => Smallint as i16,
    i32 => Integer as i32,
    i64 => Bigint as i64,
    isize => Bigint as i64,
    u8 => Smallint as i16,
    u16 => Integer as i32,
    u32 => Bigint as i64,
}

/// Unsigned 64-bit values only bind when they fit BIGINT.
macro_rules! impl_try_from_unsigned {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<'a> TryFrom<$ty> for PostgresValue<'a> {
                type Error = BatchError;

                fn try_from(value: $ty) -> Result<Self, Self::Error> {
                    i64::try_from(value)
                        .map(PostgresValue::Bigint)
                        .map_err(|_| BatchError::Mapping(format!("{value} is out of range for BIGINT")))
                }
            }

            impl<'a> TryFrom<&'a $ty> for PostgresValue<'a> {
                type Error = BatchError;

                fn try_from(value: &'a $ty) -> Result<Self, Self::Error> {
                    PostgresValue::try_from(*value)
                }
            }
        )*
    };
}

impl_try_from_unsigned!(u64, usize);

// --- Floating Point Types ---
impl_from_scalar! {
    f32 => Real as f32,
    f64 => DoublePrecision as f64,
}

// --- Boolean ---

impl<'a> From<bool> for PostgresValue<'a> {
    fn from(value: bool) -> Self {
        PostgresValue::Boolean(value)
    }
}

impl<'a> From<&'a bool> for PostgresValue<'a> {
    fn from(value: &'a bool) -> Self {
        PostgresValue::Boolean(*value)
    }
}

// --- String Types ---

impl<'a> From<&'a str> for PostgresValue<'a> {
    fn from(value: &'a str) -> Self {
        PostgresValue::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<Cow<'a, str>> for PostgresValue<'a> {
    fn from(value: Cow<'a, str>) -> Self {
        PostgresValue::Text(value)
    }
}

impl<'a> From<String> for PostgresValue<'a> {
    fn from(value: String) -> Self {
        PostgresValue::Text(Cow::Owned(value))
    }
}

impl<'a> From<&'a String> for PostgresValue<'a> {
    fn from(value: &'a String) -> Self {
        PostgresValue::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<char> for PostgresValue<'a> {
    fn from(value: char) -> Self {
        PostgresValue::Text(Cow::Owned(value.to_string()))
    }
}

impl<'a> From<Box<str>> for PostgresValue<'a> {
    fn from(value: Box<str>) -> Self {
        PostgresValue::Text(Cow::Owned(value.into()))
    }
}

impl<'a> From<Arc<str>> for PostgresValue<'a> {
    fn from(value: Arc<str>) -> Self {
        PostgresValue::Text(Cow::Owned(value.as_ref().to_string()))
    }
}

impl<'a> From<Rc<str>> for PostgresValue<'a> {
    fn from(value: Rc<str>) -> Self {
        PostgresValue::Text(Cow::Owned(value.as_ref().to_string()))
    }
}

// --- Binary Data ---

impl<'a> From<&'a [u8]> for PostgresValue<'a> {
    fn from(value: &'a [u8]) -> Self {
        PostgresValue::Bytea(Cow::Borrowed(value))
    }
}

impl<'a> From<Cow<'a, [u8]>> for PostgresValue<'a> {
    fn from(value: Cow<'a, [u8]>) -> Self {
        PostgresValue::Bytea(value)
    }
}

impl<'a> From<Vec<u8>> for PostgresValue<'a> {
    fn from(value: Vec<u8>) -> Self {
        PostgresValue::Bytea(Cow::Owned(value))
    }
}

// --- UUID ---

#[cfg(feature = "uuid")]
impl<'a> From<Uuid> for PostgresValue<'a> {
    fn from(value: Uuid) -> Self {
        PostgresValue::Uuid(value)
    }
}

#[cfg(feature = "uuid")]
impl<'a> From<&'a Uuid> for PostgresValue<'a> {
    fn from(value: &'a Uuid) -> Self {
        PostgresValue::Uuid(*value)
    }
}

// --- JSON ---

#[cfg(feature = "serde")]
impl<'a> From<serde_json::Value> for PostgresValue<'a> {
    fn from(value: serde_json::Value) -> Self {
        PostgresValue::Jsonb(value)
    }
}

#[cfg(feature = "serde")]
impl<'a> From<&'a serde_json::Value> for PostgresValue<'a> {
    fn from(value: &'a serde_json::Value) -> Self {
        PostgresValue::Jsonb(value.clone())
    }
}

// --- Date/Time Types ---

#[cfg(feature = "chrono")]
impl<'a> From<NaiveDate> for PostgresValue<'a> {
    fn from(value: NaiveDate) -> Self {
        PostgresValue::Date(value)
    }
}

#[cfg(feature = "chrono")]
impl<'a> From<NaiveTime> for PostgresValue<'a> {
    fn from(value: NaiveTime) -> Self {
        PostgresValue::Time(value)
    }
}

#[cfg(feature = "chrono")]
impl<'a> From<NaiveDateTime> for PostgresValue<'a> {
    fn from(value: NaiveDateTime) -> Self {
        PostgresValue::Timestamp(value)
    }
}

#[cfg(feature = "chrono")]
impl<'a> From<DateTime<FixedOffset>> for PostgresValue<'a> {
    fn from(value: DateTime<FixedOffset>) -> Self {
        PostgresValue::TimestampTz(value)
    }
}

#[cfg(feature = "chrono")]
impl<'a> From<DateTime<Utc>> for PostgresValue<'a> {
    fn from(value: DateTime<Utc>) -> Self {
        PostgresValue::TimestampTz(value.into())
    }
}

// --- Array Types ---

macro_rules! impl_from_vec {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<'a> From<Vec<$ty>> for PostgresValue<'a> {
                fn from(value: Vec<$ty>) -> Self {
                    PostgresValue::Array(value.into_iter().map(PostgresValue::from).collect())
                }
            }
        )*
    };
}

impl_from_vec!(i16, i32, i64, f32, f64, bool, String);

// --- Option Types ---

impl<'a, T> From<Option<T>> for PostgresValue<'a>
where
    T: Into<PostgresValue<'a>>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => PostgresValue::Null,
        }
    }
}
