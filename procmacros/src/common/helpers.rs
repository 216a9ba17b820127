//! Shared helper functions for procedural macro code generation.

use syn::{Attribute, Data, DeriveInput, Error, Expr, ExprLit, Field, Fields, Lit, Meta, Result};

use super::diagnostics;

/// How a struct field is exposed to the bulk statement builders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ColumnTag {
    /// No `#[column]` attribute: the field is never written
    Untagged,
    /// `#[column(skip)]`, `#[column("-")]` or an empty name
    Ignored,
    /// `#[column("name")]` or `#[column(name = "name")]`
    Named(String),
}

impl ColumnTag {
    /// The column the field publishes, if any.
    pub(crate) fn column(&self) -> Option<&str> {
        match self {
            ColumnTag::Named(name) => Some(name),
            ColumnTag::Untagged | ColumnTag::Ignored => None,
        }
    }

    /// Raw tag text recorded on the attribute metadata.
    pub(crate) fn tag(&self) -> Option<&str> {
        match self {
            ColumnTag::Untagged => None,
            ColumnTag::Ignored => Some(IGNORE_MARKER),
            ColumnTag::Named(name) => Some(name),
        }
    }
}

pub(crate) const IGNORE_MARKER: &str = "-";

/// Extract the named fields of a struct.
///
/// # Errors
///
/// Returns an error if:
/// - The input is a tuple or unit struct (fields have no names to publish)
/// - The input is not a struct (enum or union)
pub(crate) fn extract_struct_fields(
    input: &DeriveInput,
) -> Result<&syn::punctuated::Punctuated<Field, syn::token::Comma>> {
    let struct_name = &input.ident;
    match &input.data {
        Data::Struct(data_struct) => match &data_struct.fields {
            Fields::Named(fields) => Ok(&fields.named),
            Fields::Unnamed(_) | Fields::Unit => Err(Error::new_spanned(
                struct_name,
                diagnostics::NAMED_FIELDS_ONLY,
            )),
        },
        _ => Err(Error::new_spanned(struct_name, diagnostics::STRUCTS_ONLY)),
    }
}

/// Parse the `#[column(...)]` attribute of a field.
///
/// ```ignore
/// #[column("asset_id")]        // Named("asset_id")
/// #[column(name = "asset_id")] // Named("asset_id")
/// #[column(skip)]              // Ignored
/// #[column("-")]               // Ignored
/// ```
pub(crate) fn parse_column_tag(field: &Field) -> Result<ColumnTag> {
    let mut found: Option<(&Attribute, ColumnTag)> = None;

    for attr in &field.attrs {
        if !attr.path().is_ident("column") {
            continue;
        }
        if let Some((first, _)) = &found {
            let mut err = Error::new_spanned(attr, diagnostics::DUPLICATE_COLUMN_ATTRIBUTE);
            err.combine(Error::new_spanned(first, "first `column` attribute here"));
            return Err(err);
        }
        found = Some((attr, parse_column_meta(attr)?));
    }

    Ok(found.map_or(ColumnTag::Untagged, |(_, tag)| tag))
}

fn parse_column_meta(attr: &Attribute) -> Result<ColumnTag> {
    let Meta::List(list) = &attr.meta else {
        return Err(Error::new_spanned(attr, diagnostics::COLUMN_USAGE));
    };

    let expr: Expr = syn::parse2(list.tokens.clone())
        .map_err(|_| Error::new_spanned(attr, diagnostics::COLUMN_USAGE))?;

    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Str(name),
            ..
        }) => Ok(named(name.value())),
        Expr::Path(path) if path.path.is_ident("skip") => Ok(ColumnTag::Ignored),
        Expr::Assign(assign) => match (&*assign.left, &*assign.right) {
            (
                Expr::Path(key),
                Expr::Lit(ExprLit {
                    lit: Lit::Str(name),
                    ..
                }),
            ) if key.path.is_ident("name") => Ok(named(name.value())),
            _ => Err(Error::new_spanned(assign, diagnostics::COLUMN_USAGE)),
        },
        other => Err(Error::new_spanned(other, diagnostics::COLUMN_USAGE)),
    }
}

fn named(name: String) -> ColumnTag {
    if name.is_empty() || name == IGNORE_MARKER {
        ColumnTag::Ignored
    } else {
        ColumnTag::Named(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn first_field(input: &DeriveInput) -> Field {
        extract_struct_fields(input).unwrap()[0].clone()
    }

    #[test]
    fn test_parse_column_forms() {
        let input: DeriveInput = parse_quote! {
            struct Line {
                #[column("asset_id")]
                a: i64,
            }
        };
        assert_eq!(
            parse_column_tag(&first_field(&input)).unwrap(),
            ColumnTag::Named("asset_id".into())
        );

        let input: DeriveInput = parse_quote! {
            struct Line {
                #[column(name = "voltage_kv")]
                a: f64,
            }
        };
        assert_eq!(
            parse_column_tag(&first_field(&input)).unwrap().column(),
            Some("voltage_kv")
        );

        let ignored: [DeriveInput; 3] = [
            parse_quote! { struct Line { #[column(skip)] a: i64 } },
            parse_quote! { struct Line { #[column("-")] a: i64 } },
            parse_quote! { struct Line { #[column("")] a: i64 } },
        ];
        for input in &ignored {
            let tag = parse_column_tag(&first_field(input)).unwrap();
            assert_eq!(tag, ColumnTag::Ignored);
            assert_eq!(tag.column(), None);
        }

        let input: DeriveInput = parse_quote! { struct Line { a: i64 } };
        assert_eq!(
            parse_column_tag(&first_field(&input)).unwrap(),
            ColumnTag::Untagged
        );
    }

    #[test]
    fn test_parse_column_rejects_bad_forms() {
        let input: DeriveInput = parse_quote! {
            struct Line {
                #[column(primary)]
                a: i64,
            }
        };
        assert!(parse_column_tag(&first_field(&input)).is_err());

        let input: DeriveInput = parse_quote! {
            struct Line {
                #[column("a")]
                #[column("b")]
                a: i64,
            }
        };
        assert!(parse_column_tag(&first_field(&input)).is_err());
    }

    #[test]
    fn test_extract_rejects_non_structs() {
        let tuple: DeriveInput = parse_quote! { struct Pair(i64, i64); };
        assert!(extract_struct_fields(&tuple).is_err());

        let unit: DeriveInput = parse_quote! { struct Marker; };
        assert!(extract_struct_fields(&unit).is_err());

        let enumeration: DeriveInput = parse_quote! { enum Phase { A, B } };
        assert!(extract_struct_fields(&enumeration).is_err());
    }
}
