use super::{build_groups, checked_collection, column_list};
use crate::prelude::*;
use crate::values::BoundValue;
use sqlbatch_core::{Dataset, Element, ElementType, POSTGRES_MAX_PARAMS, QueryGroup, Result};

/// Assembles a bulk `INSERT ... RETURNING` for PostgreSQL.
///
/// The operation is immutable: every call to [`BulkInsert::queries`] resolves
/// the column mapping and plans the batches afresh.
///
/// # Examples
///
/// ```ignore
/// let op = BulkInsert::new(&substations, "substations", ["id", "asset_id"])?;
/// for group in op.queries()? {
///     group.bind(&mut client, &mut substations, decode_substation)?;
/// }
/// ```
#[derive(Debug)]
pub struct BulkInsert<'d, T> {
    pub(crate) data: &'d [T],
    pub(crate) element_type: ElementType,
    pub(crate) table: String,
    pub(crate) columns: Vec<String>,
    pub(crate) param_limit: usize,
}

impl<T> Clone for BulkInsert<'_, T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data,
            element_type: self.element_type,
            table: self.table.clone(),
            columns: self.columns.clone(),
            param_limit: self.param_limit,
        }
    }
}

impl<'d, T> BulkInsert<'d, T>
where
    T: Element<BoundValue>,
{
    /// Validates `data` and captures the table and column whitelist.
    ///
    /// Fails with `NotAnArray` if `data` is not a sequence, `EmptyData` if it
    /// has no elements, and `NotAStruct` if its first element is not a record.
    pub fn new<D, C>(data: &'d D, table: impl Into<String>, columns: C) -> Result<Self>
    where
        D: Dataset<Item = T> + ?Sized,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        let collection = checked_collection(data)?;
        Ok(Self {
            data: collection.items,
            element_type: collection.element_type,
            table: table.into(),
            columns: columns.into_iter().map(Into::into).collect(),
            param_limit: POSTGRES_MAX_PARAMS,
        })
    }

    /// Uses a different parameter ceiling per statement.
    pub fn with_param_limit(mut self, limit: usize) -> Self {
        self.param_limit = limit;
        self
    }

    /// Record attributes backing the whitelisted columns, in whitelist order.
    pub fn fields(&self) -> Result<Vec<&'static str>> {
        super::fields(self.data, &self.columns)
    }

    /// One query group per batch, in ascending batch order.
    pub fn queries(&self) -> Result<Vec<QueryGroup<BoundValue>>> {
        build_groups(self.data, &self.columns, self.param_limit, |rows| {
            self.statement(rows)
        })
    }

    /// Renders the INSERT for one batch of placeholder rows.
    pub(crate) fn statement(&self, rows: &[String]) -> String {
        let cols = column_list(&self.columns);
        format!(
            "INSERT INTO \"{}\" ({})\nVALUES\n{}\nRETURNING ({})",
            self.table,
            cols,
            rows.join(",\n"),
            cols
        )
    }
}

impl<'d, T> BulkInsert<'d, T> {
    #[inline]
    pub fn table(&self) -> &str {
        &self.table
    }

    #[inline]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[inline]
    pub fn element_type(&self) -> ElementType {
        self.element_type
    }

    #[inline]
    pub fn param_limit(&self) -> usize {
        self.param_limit
    }

    #[inline]
    pub fn data(&self) -> &'d [T] {
        self.data
    }

    /// Number of records in the collection.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
