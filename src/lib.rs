//! # sqlbatch
//!
//! Batched bulk `INSERT` and `INSERT ... ON CONFLICT DO UPDATE` statements for
//! PostgreSQL, split so no statement exceeds the server's bind-parameter limit.
//!
//! ## Quick Start
//!
//! ```rust
//! use sqlbatch::Record;
//! use sqlbatch::postgres::BulkInsert;
//!
//! #[derive(Record, Clone)]
//! struct Substation {
//!     #[column("id")]
//!     id: i64,
//!     #[column("asset_id")]
//!     asset_id: String,
//! }
//!
//! # fn main() -> sqlbatch::Result<()> {
//! let rows = vec![
//!     Substation { id: 1, asset_id: "SUB-001".into() },
//!     Substation { id: 2, asset_id: "SUB-002".into() },
//! ];
//!
//! let op = BulkInsert::new(&rows, "substations", ["id", "asset_id"])?;
//! let groups = op.queries()?;
//!
//! assert_eq!(groups.len(), 1);
//! assert_eq!(groups[0].rows, ["($1,$2)", "($3,$4)"]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Drivers
//!
//! | Database   | Driver         | Feature Flag     |
//! |------------|----------------|------------------|
//! | PostgreSQL | postgres       | `postgres-sync`  |
//! | PostgreSQL | tokio-postgres | `tokio-postgres` |
//!
//! Without a driver feature the crate only assembles SQL and arguments; any
//! type implementing [`core::Executor`] or [`core::AsyncExecutor`] can run them.

#![cfg_attr(docsrs, feature(doc_cfg))]

// =============================================================================
// Root-level exports
// =============================================================================

/// Result type for bulk statement assembly
pub use sqlbatch_core::error::Result;

/// Derive macro publishing struct fields as insertable columns
#[cfg(feature = "derive")]
pub use sqlbatch_macros::Record;

/// Error types
pub mod error {
    pub use sqlbatch_core::error::BatchError;
}

// =============================================================================
// Core module - dialect-agnostic engine
// =============================================================================

/// Record metadata, collection inspection, batch planning and query groups.
///
/// Generated `#[derive(Record)]` code refers to the traits through this module.
pub mod core {
    /// Record and collection traits (`Record`, `Element`, `Dataset`, ...)
    pub use sqlbatch_core::traits::*;

    /// Type inspection
    pub use sqlbatch_core::inspect::{
        Collection, ElementType, normalize, resolve_columns, validate_collection,
    };

    /// Batch planning
    pub use sqlbatch_core::plan::{BatchPlan, POSTGRES_MAX_PARAMS};

    /// Rendered batches and the driver seam
    pub use sqlbatch_core::executor::{AsyncExecutor, Executor};
    pub use sqlbatch_core::group::{QueryGroup, RawQuery};

    /// SQL text helpers
    pub use sqlbatch_core::helpers::{placeholders, quote_name, quote_names};

    #[cfg(all(feature = "chrono", feature = "std"))]
    #[cfg_attr(docsrs, doc(cfg(feature = "chrono")))]
    pub use sqlbatch_core::helpers::current_time_in;
}

// =============================================================================
// PostgreSQL module
// =============================================================================

/// PostgreSQL statement builders, bound values and driver executors.
pub mod postgres {
    pub use sqlbatch_postgres::builder::{BulkInsert, BulkUpsert};
    pub use sqlbatch_postgres::values::{BoundValue, PostgresValue};

    #[cfg(any(feature = "postgres-sync", feature = "tokio-postgres"))]
    #[cfg_attr(
        docsrs,
        doc(cfg(any(feature = "postgres-sync", feature = "tokio-postgres")))
    )]
    pub use sqlbatch_postgres::Row;
}

/// Everything needed to describe records and assemble bulk statements.
pub mod prelude {
    #[cfg(feature = "derive")]
    pub use crate::Record;

    pub use crate::core::{AsyncExecutor, Element, Executor, QueryGroup, Record as RecordTrait};
    pub use crate::error::BatchError;
    pub use crate::postgres::{BoundValue, BulkInsert, BulkUpsert, PostgresValue};
}
