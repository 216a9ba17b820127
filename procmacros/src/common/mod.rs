//! Common utilities shared by the derive implementations.

pub(crate) mod diagnostics;
mod helpers;

pub(crate) use helpers::{ColumnTag, extract_struct_fields, parse_column_tag};
