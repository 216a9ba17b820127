#![recursion_limit = "128"]

extern crate proc_macro;

mod common;
mod paths;
mod record;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derives `Record` and `Element` so a struct can be bulk-inserted.
///
/// Only fields carrying a `#[column]` attribute are published. A column is
/// named with a string literal or `name = "..."`; `#[column(skip)]`,
/// `#[column("-")]` and an empty name exclude the field explicitly. Every
/// published field must be `Clone` and convert into the dialect's value type.
///
/// # Example
///
/// ```ignore
/// use sqlbatch::Record;
///
/// #[derive(Record, Clone)]
/// struct Substation {
///     #[column("id")]
///     id: i64,
///     #[column("asset_id")]
///     asset_id: String,
///     #[column(skip)]
///     notes: String,
///     // not published
///     cache: Vec<u8>,
/// }
/// ```
///
/// # Errors
///
/// Fails to compile for enums, unions, tuple structs and unit structs, for an
/// unrecognized `#[column(...)]` form, and when two fields publish the same
/// column name.
#[proc_macro_derive(Record, attributes(column))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match record::generate_record_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
