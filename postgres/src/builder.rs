//! Bulk statement builders for PostgreSQL.
//!
//! Both builders share the same pipeline: validate the collection when the
//! operation is constructed, then on every render resolve the column mapping,
//! plan the batches and emit one [`QueryGroup`] per batch. Only the final SQL
//! text differs between INSERT and INSERT ... ON CONFLICT.

pub mod insert;
pub mod upsert;

pub use insert::BulkInsert;
pub use upsert::BulkUpsert;

use crate::prelude::*;
use crate::values::BoundValue;
use sqlbatch_core::{
    BatchError, BatchPlan, Collection, Dataset, Element, QueryGroup, Result, normalize,
    placeholders, quote_names, resolve_columns, validate_collection,
};

/// Construction steps shared by every bulk operation: the collection must be
/// a sequence, non-empty, and its first element must resolve to a record.
pub(crate) fn checked_collection<D>(data: &D) -> Result<Collection<'_, D::Item>>
where
    D: Dataset + ?Sized,
    D::Item: Element<BoundValue>,
{
    let collection = validate_collection(data)?;
    let first = collection.items.first().ok_or(BatchError::EmptyData)?;
    normalize::<BoundValue>(first)?;
    Ok(collection)
}

/// Record attributes backing the whitelisted columns, in whitelist order.
pub(crate) fn fields<T>(items: &[T], columns: &[String]) -> Result<Vec<&'static str>>
where
    T: Element<BoundValue>,
{
    let sample = items.first().ok_or(BatchError::EmptyData)?;
    resolve_columns::<BoundValue, _>(sample, columns)
}

/// Comma-joined, individually quoted name list.
pub(crate) fn column_list(names: &[String]) -> String {
    quote_names(names).join(",")
}

/// Splits `items` into parameter-bounded batches and renders each one.
///
/// `render` receives the placeholder fragments of one batch and returns the
/// complete statement text.
pub(crate) fn build_groups<T, F>(
    items: &[T],
    columns: &[String],
    param_limit: usize,
    render: F,
) -> Result<Vec<QueryGroup<BoundValue>>>
where
    T: Element<BoundValue>,
    F: Fn(&[String]) -> String,
{
    let fields = fields(items, columns)?;
    let fields_count = fields.len();
    let total = items.len();

    let plan = BatchPlan::checked(total, fields_count, param_limit)?;
    sqlbatch_core::sqlbatch_trace_plan!(total, fields_count, plan);

    let mut groups = Vec::with_capacity(plan.batch_count);
    for range in plan.batches(total) {
        let mut rows = Vec::with_capacity(range.len());
        let mut args = Vec::with_capacity(range.len() * fields_count);

        for (offset, item) in items[range.clone()].iter().enumerate() {
            let record = normalize::<BoundValue>(item)?;
            for field in &fields {
                let value = record.value(field).ok_or_else(|| {
                    BatchError::Mapping(format!("record has no value for attribute `{field}`"))
                })?;
                args.push(value);
            }

            // Numbering restarts at $1 for every statement
            rows.push(placeholders(fields_count, fields_count * offset + 1));
        }

        let sql = render(&rows);
        sqlbatch_core::sqlbatch_trace_query!(&sql, args.len(), range.start, range.end);

        groups.push(QueryGroup {
            sql,
            rows,
            args,
            start: range.start,
            end: range.end,
        });
    }

    Ok(groups)
}
