//! Driver bindings for running query groups.
//!
//! The blocking `postgres` client is available with the `postgres-sync`
//! feature, the async `tokio-postgres` client with `tokio-postgres`. Both bind
//! [`PostgresValue`] arguments through its `ToSql` impl and return the driver's
//! own `Row` type for the caller to decode.

#[cfg(any(feature = "postgres-sync", feature = "tokio-postgres"))]
use crate::values::PostgresValue;
#[cfg(any(feature = "postgres-sync", feature = "tokio-postgres"))]
use sqlbatch_core::{BatchError, RawQuery, Result};

#[cfg(any(feature = "postgres-sync", feature = "tokio-postgres"))]
fn execution_error(err: impl core::fmt::Display) -> BatchError {
    BatchError::Execution(err.to_string())
}

#[cfg(feature = "postgres-sync")]
mod postgres_sync {
    use super::{PostgresValue, RawQuery, Result, execution_error};
    use crate::prelude::*;
    use postgres::types::ToSql;
    use sqlbatch_core::Executor;

    fn param_refs<'q>(params: &'q [PostgresValue<'_>]) -> Vec<&'q (dyn ToSql + Sync)> {
        params.iter().map(|p| p as &(dyn ToSql + Sync)).collect()
    }

    impl<'a> Executor<PostgresValue<'a>> for postgres::Client {
        type Row = postgres::Row;

        fn execute(&mut self, query: RawQuery<'_, PostgresValue<'a>>) -> Result<u64> {
            let params = param_refs(query.params);
            postgres::Client::execute(self, query.sql, &params[..]).map_err(execution_error)
        }

        fn fetch(&mut self, query: RawQuery<'_, PostgresValue<'a>>) -> Result<Vec<postgres::Row>> {
            let params = param_refs(query.params);
            self.query(query.sql, &params[..]).map_err(execution_error)
        }
    }

    impl<'a> Executor<PostgresValue<'a>> for postgres::Transaction<'_> {
        type Row = postgres::Row;

        fn execute(&mut self, query: RawQuery<'_, PostgresValue<'a>>) -> Result<u64> {
            let params = param_refs(query.params);
            postgres::Transaction::execute(self, query.sql, &params[..]).map_err(execution_error)
        }

        fn fetch(&mut self, query: RawQuery<'_, PostgresValue<'a>>) -> Result<Vec<postgres::Row>> {
            let params = param_refs(query.params);
            self.query(query.sql, &params[..]).map_err(execution_error)
        }
    }
}

#[cfg(feature = "tokio-postgres")]
mod tokio_postgres_async {
    use super::{PostgresValue, RawQuery, Result, execution_error};
    use crate::prelude::*;
    use sqlbatch_core::AsyncExecutor;
    use tokio_postgres::types::ToSql;

    fn param_refs<'q>(params: &'q [PostgresValue<'_>]) -> Vec<&'q (dyn ToSql + Sync)> {
        params.iter().map(|p| p as &(dyn ToSql + Sync)).collect()
    }

    impl<'a> AsyncExecutor<PostgresValue<'a>> for tokio_postgres::Client {
        type Row = tokio_postgres::Row;

        async fn execute(&mut self, query: RawQuery<'_, PostgresValue<'a>>) -> Result<u64> {
            let params = param_refs(query.params);
            tokio_postgres::Client::execute(self, query.sql, &params[..])
                .await
                .map_err(execution_error)
        }

        async fn fetch(
            &mut self,
            query: RawQuery<'_, PostgresValue<'a>>,
        ) -> Result<Vec<tokio_postgres::Row>> {
            let params = param_refs(query.params);
            self.query(query.sql, &params[..])
                .await
                .map_err(execution_error)
        }
    }

    impl<'a> AsyncExecutor<PostgresValue<'a>> for tokio_postgres::Transaction<'_> {
        type Row = tokio_postgres::Row;

        async fn execute(&mut self, query: RawQuery<'_, PostgresValue<'a>>) -> Result<u64> {
            let params = param_refs(query.params);
            tokio_postgres::Transaction::execute(self, query.sql, &params[..])
                .await
                .map_err(execution_error)
        }

        async fn fetch(
            &mut self,
            query: RawQuery<'_, PostgresValue<'a>>,
        ) -> Result<Vec<tokio_postgres::Row>> {
            let params = param_refs(query.params);
            self.query(query.sql, &params[..])
                .await
                .map_err(execution_error)
        }
    }
}

#[cfg(all(test, any(feature = "postgres-sync", feature = "tokio-postgres")))]
mod tests {
    use super::*;

    #[test]
    fn test_driver_errors_become_execution_errors() {
        let err = execution_error("connection closed");
        assert!(matches!(&err, BatchError::Execution(msg) if msg == "connection closed"));
        assert_eq!(err.to_string(), "Execution error: connection closed");
    }
}
