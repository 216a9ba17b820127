//! `#[derive(Record)]`: publishes a struct's fields as insertable columns.
//!
//! Generates `Record<V>` and `Element<V>` impls that are generic over the bound
//! value type, so the same struct works with any dialect whose value type every
//! mapped field converts into.

use crate::common::{ColumnTag, diagnostics, extract_struct_fields, parse_column_tag};
use crate::paths::{core as core_paths, std as std_paths};
use proc_macro2::TokenStream;
use quote::quote;
use std::collections::HashMap;
use syn::{DeriveInput, Error, Ident, Result, parse_quote};

struct RecordField<'a> {
    ident: &'a Ident,
    ty: &'a syn::Type,
    tag: ColumnTag,
}

pub(crate) fn generate_record_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;
    let named = extract_struct_fields(&input)?;

    let mut fields = Vec::with_capacity(named.len());
    let mut seen: HashMap<String, &Ident> = HashMap::new();
    for field in named {
        let Some(ident) = field.ident.as_ref() else {
            return Err(Error::new_spanned(field, diagnostics::NAMED_FIELDS_ONLY));
        };
        let tag = parse_column_tag(field)?;
        if let Some(column) = tag.column()
            && seen.insert(column.to_string(), ident).is_some()
        {
            return Err(Error::new_spanned(
                field,
                diagnostics::duplicate_column_message(column),
            ));
        }
        fields.push(RecordField {
            ident,
            ty: &field.ty,
            tag,
        });
    }

    let record = core_paths::record();
    let element = core_paths::element();
    let shape = core_paths::shape();
    let attribute = core_paths::attribute();
    let option = std_paths::option();
    let clone = std_paths::clone();
    let into = std_paths::into();

    let attributes = fields.iter().map(|field| {
        let name = field.ident.to_string();
        match field.tag.tag() {
            Some(tag) => quote! { #attribute::new(#name, #tag) },
            None => quote! { #attribute::untagged(#name) },
        }
    });

    let mapped: Vec<&RecordField> = fields.iter().filter(|f| f.tag.column().is_some()).collect();

    let value_arms = mapped.iter().map(|field| {
        let ident = field.ident;
        let name = ident.to_string();
        quote! {
            #name => #option::Some(#into::into(#clone::clone(&self.#ident))),
        }
    });

    let mut generics = input.generics.clone();
    generics.params.push(parse_quote!(__V));
    {
        let where_clause = generics.make_where_clause();
        for field in &mapped {
            let ty = field.ty;
            where_clause
                .predicates
                .push(parse_quote!(#ty: #clone + #into<__V>));
        }
    }
    let (impl_generics, _, where_clause) = generics.split_for_impl();
    let (_, ty_generics, _) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #record<__V> for #struct_name #ty_generics #where_clause {
            fn attributes(&self) -> &'static [#attribute] {
                const ATTRIBUTES: &[#attribute] = &[#(#attributes),*];
                ATTRIBUTES
            }

            fn value(&self, attribute: &str) -> #option<__V> {
                match attribute {
                    #(#value_arms)*
                    _ => #option::None,
                }
            }
        }

        impl #impl_generics #element<__V> for #struct_name #ty_generics #where_clause {
            fn shape(&self) -> #shape<'_, __V> {
                #shape::Struct(self)
            }
        }
    })
}
