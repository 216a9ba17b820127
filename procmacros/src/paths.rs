//! Centralized path definitions for generated code.
//!
//! Using the `sqlbatch::` prefix (without leading `::`) allows doc tests and
//! tests in subcrates to provide a `mod sqlbatch { ... }` shim that re-exports
//! from the current crate.

use proc_macro2::TokenStream;
use quote::quote;

pub mod std {
    use super::*;

    pub fn option() -> TokenStream {
        quote!(::core::option::Option)
    }

    pub fn clone() -> TokenStream {
        quote!(::core::clone::Clone)
    }

    pub fn into() -> TokenStream {
        quote!(::core::convert::Into)
    }
}

/// Traits and types from sqlbatch::core
pub mod core {
    use super::*;

    pub fn record() -> TokenStream {
        quote!(sqlbatch::core::Record)
    }

    pub fn element() -> TokenStream {
        quote!(sqlbatch::core::Element)
    }

    pub fn shape() -> TokenStream {
        quote!(sqlbatch::core::Shape)
    }

    pub fn attribute() -> TokenStream {
        quote!(sqlbatch::core::Attribute)
    }
}
