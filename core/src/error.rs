use crate::prelude::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BatchError {
    /// The collection is not an array or slice, even after one dereference
    #[error("must be an array or slice")]
    NotAnArray,

    /// The collection is array-shaped but holds no elements
    #[error("must be a non-empty array")]
    EmptyData,

    /// An element does not resolve to an attribute-bearing record
    #[error("object must be a struct or pointer to a struct")]
    NotAStruct,

    /// The parameter ceiling cannot hold a single row
    #[error("parameter limit {limit} cannot fit a row of {columns} columns")]
    ParamLimit { limit: usize, columns: usize },

    /// Error executing a rendered statement
    #[error("Execution error: {0}")]
    Execution(String),

    /// A value could not be mapped between a record and a row
    #[error("Mapping error: {0}")]
    Mapping(String),
}

/// Result type for bulk statement assembly
pub type Result<T> = core::result::Result<T, BatchError>;
