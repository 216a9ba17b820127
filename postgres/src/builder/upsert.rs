use super::{BulkInsert, build_groups, column_list};
use crate::prelude::*;
use crate::values::BoundValue;
use sqlbatch_core::{Dataset, Element, ElementType, QueryGroup, Result, quote_name};

/// Assembles a bulk `INSERT ... ON CONFLICT ... DO UPDATE SET ... RETURNING`.
///
/// Conflicting rows take the incoming values of the update columns via the
/// `excluded` pseudo-table. When no update columns are given, every inserted
/// column is updated.
#[derive(Debug)]
pub struct BulkUpsert<'d, T> {
    insert: BulkInsert<'d, T>,
    conflict_targets: Vec<String>,
    update_columns: Vec<String>,
}

impl<T> Clone for BulkUpsert<'_, T> {
    fn clone(&self) -> Self {
        Self {
            insert: self.insert.clone(),
            conflict_targets: self.conflict_targets.clone(),
            update_columns: self.update_columns.clone(),
        }
    }
}

impl<'d, T> BulkUpsert<'d, T>
where
    T: Element<BoundValue>,
{
    /// Validates `data` exactly like [`BulkInsert::new`], then records the
    /// conflict target and update lists.
    pub fn new<D, K, C, U>(
        data: &'d D,
        table: impl Into<String>,
        conflict_targets: K,
        insert_columns: C,
        update_columns: Option<U>,
    ) -> Result<Self>
    where
        D: Dataset<Item = T> + ?Sized,
        K: IntoIterator,
        K::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
        U: IntoIterator,
        U::Item: Into<String>,
    {
        let insert = BulkInsert::new(data, table, insert_columns)?;
        let conflict_targets = conflict_targets.into_iter().map(Into::into).collect();

        let update_columns = update_columns
            .map(|columns| columns.into_iter().map(Into::into).collect::<Vec<String>>())
            .filter(|columns| !columns.is_empty())
            .unwrap_or_else(|| insert.columns.clone());

        Ok(Self {
            insert,
            conflict_targets,
            update_columns,
        })
    }

    /// Uses a different parameter ceiling per statement.
    pub fn with_param_limit(mut self, limit: usize) -> Self {
        self.insert.param_limit = limit;
        self
    }

    /// Record attributes backing the inserted columns, in whitelist order.
    pub fn fields(&self) -> Result<Vec<&'static str>> {
        self.insert.fields()
    }

    /// One query group per batch, in ascending batch order.
    pub fn queries(&self) -> Result<Vec<QueryGroup<BoundValue>>> {
        build_groups(
            self.insert.data,
            &self.insert.columns,
            self.insert.param_limit,
            |rows| self.statement(rows),
        )
    }

    pub(crate) fn statement(&self, rows: &[String]) -> String {
        let cols = column_list(&self.insert.columns);
        let assignments: Vec<String> = self
            .update_columns
            .iter()
            .map(|column| {
                let quoted = quote_name(column);
                format!("    {quoted} = \"excluded\".{quoted}")
            })
            .collect();

        format!(
            "INSERT INTO \"{}\" ({})\nVALUES\n{}\nON CONFLICT ({})\nDO UPDATE SET\n{}\nRETURNING ({})",
            self.insert.table,
            cols,
            rows.join(",\n"),
            column_list(&self.conflict_targets),
            assignments.join(",\n"),
            cols
        )
    }
}

impl<'d, T> BulkUpsert<'d, T> {
    #[inline]
    pub fn table(&self) -> &str {
        self.insert.table()
    }

    #[inline]
    pub fn columns(&self) -> &[String] {
        self.insert.columns()
    }

    #[inline]
    pub fn conflict_targets(&self) -> &[String] {
        &self.conflict_targets
    }

    /// Columns overwritten on conflict; defaults to the inserted columns.
    #[inline]
    pub fn update_columns(&self) -> &[String] {
        &self.update_columns
    }

    #[inline]
    pub fn element_type(&self) -> ElementType {
        self.insert.element_type()
    }

    #[inline]
    pub fn param_limit(&self) -> usize {
        self.insert.param_limit()
    }

    #[inline]
    pub fn data(&self) -> &'d [T] {
        self.insert.data()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.insert.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.insert.is_empty()
    }
}
