//! PostgreSQL support for sqlbatch
//!
//! This crate renders batched bulk `INSERT` and `INSERT ... ON CONFLICT`
//! statements with PostgreSQL's numbered placeholders, converts record fields
//! into bindable [`PostgresValue`]s and, behind the driver features, runs the
//! resulting query groups on `postgres` or `tokio-postgres` clients.

#![allow(unexpected_cfgs)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub(crate) mod prelude {
    #[cfg(feature = "std")]
    pub use std::{
        borrow::Cow,
        boxed::Box,
        format,
        rc::Rc,
        string::{String, ToString},
        sync::Arc,
        vec::Vec,
    };

    #[cfg(not(feature = "std"))]
    pub use alloc::{
        borrow::Cow,
        boxed::Box,
        format,
        rc::Rc,
        string::{String, ToString},
        sync::Arc,
        vec::Vec,
    };
}

pub mod builder;
pub mod executor;
pub mod values;

#[cfg(all(feature = "postgres-sync", not(feature = "tokio-postgres")))]
pub use postgres::Row;
#[cfg(feature = "tokio-postgres")]
pub use tokio_postgres::Row;

pub use builder::{BulkInsert, BulkUpsert};
pub use values::{BoundValue, PostgresValue};

pub use sqlbatch_core::{BatchError, POSTGRES_MAX_PARAMS, QueryGroup, RawQuery, Result};
