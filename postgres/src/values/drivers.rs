//! Binary parameter encoding for [`PostgresValue`]
//!
//! Numeric variants follow the parameter type the server reports for their
//! placeholder: integers narrow or widen when the value fits, `REAL` widens to
//! `DOUBLE PRECISION`. Arrays are encoded element by element against the
//! array's member type, so an element of another kind fails the bind.

#[cfg(any(feature = "postgres-sync", feature = "tokio-postgres"))]
mod encode {
    use super::super::PostgresValue;
    use crate::prelude::*;
    use bytes::BytesMut;

    #[cfg(feature = "postgres-sync")]
    use postgres::types::{IsNull, Kind, ToSql, Type, WrongType};

    #[cfg(all(feature = "tokio-postgres", not(feature = "postgres-sync")))]
    use tokio_postgres::types::{IsNull, Kind, ToSql, Type, WrongType};

    type Encoded = Result<IsNull, Box<dyn std::error::Error + Sync + Send>>;

    fn wrong_type<T>(ty: &Type) -> Encoded {
        Err(Box::new(WrongType::new::<T>(ty.clone())))
    }

    fn encode_integer(value: i64, ty: &Type, out: &mut BytesMut) -> Encoded {
        match *ty {
            Type::INT2 => i16::try_from(value)?.to_sql(ty, out),
            Type::INT4 => i32::try_from(value)?.to_sql(ty, out),
            Type::INT8 => value.to_sql(ty, out),
            _ => wrong_type::<i64>(ty),
        }
    }

    /// Scalar parameter types some variant can encode.
    fn accepts_scalar(ty: &Type) -> bool {
        match *ty {
            Type::INT2
            | Type::INT4
            | Type::INT8
            | Type::FLOAT4
            | Type::FLOAT8
            | Type::BOOL
            | Type::BYTEA => true,
            #[cfg(feature = "uuid")]
            Type::UUID => true,
            #[cfg(feature = "serde")]
            Type::JSON | Type::JSONB => true,
            #[cfg(feature = "chrono")]
            Type::DATE | Type::TIME | Type::TIMESTAMP | Type::TIMESTAMPTZ => true,
            _ => <&str as ToSql>::accepts(ty),
        }
    }

    impl<'a> ToSql for PostgresValue<'a> {
        fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Encoded {
            match self {
                PostgresValue::Null => Ok(IsNull::Yes),
                PostgresValue::Smallint(i) => encode_integer(i64::from(*i), ty, out),
                PostgresValue::Integer(i) => encode_integer(i64::from(*i), ty, out),
                PostgresValue::Bigint(i) => encode_integer(*i, ty, out),
                PostgresValue::Real(f) if *ty == Type::FLOAT8 => f64::from(*f).to_sql(ty, out),
                PostgresValue::Real(f) => f.to_sql_checked(ty, out),
                PostgresValue::DoublePrecision(f) => f.to_sql_checked(ty, out),
                PostgresValue::Text(text) => {
                    let text: &str = text;
                    text.to_sql_checked(ty, out)
                }
                PostgresValue::Bytea(bytes) => {
                    let bytes: &[u8] = bytes;
                    bytes.to_sql_checked(ty, out)
                }
                PostgresValue::Boolean(b) => b.to_sql_checked(ty, out),
                #[cfg(feature = "uuid")]
                PostgresValue::Uuid(uuid) => uuid.to_sql_checked(ty, out),
                #[cfg(feature = "serde")]
                PostgresValue::Json(json) | PostgresValue::Jsonb(json) => {
                    json.to_sql_checked(ty, out)
                }
                #[cfg(feature = "chrono")]
                PostgresValue::Date(date) => date.to_sql_checked(ty, out),
                #[cfg(feature = "chrono")]
                PostgresValue::Time(time) => time.to_sql_checked(ty, out),
                #[cfg(feature = "chrono")]
                PostgresValue::Timestamp(ts) => ts.to_sql_checked(ty, out),
                #[cfg(feature = "chrono")]
                PostgresValue::TimestampTz(ts) => ts.to_sql_checked(ty, out),
                PostgresValue::Array(items) => match ty.kind() {
                    Kind::Array(_) => <&[PostgresValue<'a>] as ToSql>::to_sql(
                        &items.as_slice(),
                        ty,
                        out,
                    ),
                    _ => wrong_type::<Vec<PostgresValue<'a>>>(ty),
                },
            }
        }

        fn accepts(ty: &Type) -> bool {
            match ty.kind() {
                Kind::Array(member) => accepts_scalar(member),
                _ => accepts_scalar(ty),
            }
        }

        #[cfg(feature = "postgres-sync")]
        postgres::types::to_sql_checked!();

        #[cfg(all(feature = "tokio-postgres", not(feature = "postgres-sync")))]
        tokio_postgres::types::to_sql_checked!();
    }

}
