//! Type inspection: validating the shape of a record collection and mapping
//! whitelisted columns onto record attributes.

use crate::error::{BatchError, Result};
use crate::prelude::*;
use crate::traits::{Dataset, Element, Record, Shape};
use hashbrown::HashMap;

/// Describes the element type of a validated collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementType {
    pub name: &'static str,
}

impl ElementType {
    pub fn of<T>() -> Self {
        Self {
            name: core::any::type_name::<T>(),
        }
    }
}

/// A collection that passed shape validation.
#[derive(Debug)]
pub struct Collection<'d, T> {
    pub element_type: ElementType,
    pub items: &'d [T],
}

// Manual impls: deriving would require `T: Clone`
impl<T> Clone for Collection<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Collection<'_, T> {}

/// Accepts only array- or sequence-shaped values, dereferencing one level of
/// reference. An empty sequence is accepted here; emptiness is rejected when
/// an operation is constructed.
pub fn validate_collection<D>(data: &D) -> Result<Collection<'_, D::Item>>
where
    D: Dataset + ?Sized,
{
    let items = data.as_sequence().ok_or(BatchError::NotAnArray)?;
    Ok(Collection {
        element_type: ElementType::of::<D::Item>(),
        items,
    })
}

/// Dereferences an element once if it is a reference, then requires a record.
pub fn normalize<'r, V>(element: &'r dyn Element<V>) -> Result<&'r dyn Record<V>> {
    match element.shape() {
        Shape::Struct(record) => Ok(record),
        Shape::Reference(inner) => match inner.shape() {
            Shape::Struct(record) => Ok(record),
            Shape::Reference(_) | Shape::Scalar(_) => Err(BatchError::NotAStruct),
        },
        Shape::Scalar(_) => Err(BatchError::NotAStruct),
    }
}

/// Maps each whitelisted column to the attribute that publishes it, in
/// whitelist order.
///
/// The mapping is rebuilt on every call. Columns with no matching attribute are
/// dropped from the output rather than reported.
pub fn resolve_columns<'r, V, C>(
    sample: &'r dyn Element<V>,
    whitelist: &[C],
) -> Result<Vec<&'static str>>
where
    C: AsRef<str>,
{
    let record = normalize(sample)?;
    let attributes = record.attributes();

    let mut mapping: HashMap<&'static str, &'static str> = HashMap::with_capacity(attributes.len());
    for attribute in attributes {
        if let Some(column) = attribute.column() {
            mapping.insert(column, attribute.name);
        }
    }

    let mut fields = Vec::with_capacity(whitelist.len());
    for column in whitelist {
        let column = column.as_ref();
        match mapping.get(column) {
            Some(field) => fields.push(*field),
            None => {
                crate::sqlbatch_trace_drop!(column);
            }
        }
    }

    Ok(fields)
}
