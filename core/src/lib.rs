//! Dialect-agnostic engine for batched bulk-write statements.
//!
//! Inspects a record collection, plans how many rows fit into one statement
//! under a parameter ceiling, and exposes the pieces a dialect crate needs to
//! render each batch.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub(crate) mod prelude {
    pub use alloc::{
        borrow::Cow,
        boxed::Box,
        format,
        rc::Rc,
        string::{String, ToString},
        sync::Arc,
        vec,
        vec::Vec,
    };
}

pub mod error;
pub mod executor;
pub mod group;
pub mod helpers;
pub mod inspect;
pub mod plan;
pub mod traits;
pub mod tracing;

// Re-export key types and traits
pub use error::{BatchError, Result};
pub use executor::{AsyncExecutor, Executor};
pub use group::{QueryGroup, RawQuery};
pub use helpers::{placeholders, quote_name, quote_names};
pub use inspect::{Collection, ElementType, normalize, resolve_columns, validate_collection};
pub use plan::{BatchPlan, POSTGRES_MAX_PARAMS};
pub use traits::*;
