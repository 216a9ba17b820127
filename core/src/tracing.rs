//! Tracing utilities for batch planning and statement rendering.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]` boilerplate
//! at every call site.

/// Emit a debug-level tracing event describing a computed batch plan.
///
/// ```ignore
/// sqlbatch_trace_plan!(rows, columns, plan);
/// ```
#[macro_export]
macro_rules! sqlbatch_trace_plan {
    ($rows:expr, $columns:expr, $plan:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            rows = $rows,
            columns = $columns,
            rows_per_batch = $plan.rows_per_batch,
            batch_count = $plan.batch_count,
            "sqlbatch.plan"
        );
    };
}

/// Emit a debug-level tracing event with the rendered SQL text, parameter count
/// and the covered row range.
///
/// ```ignore
/// sqlbatch_trace_query!(&group.sql, group.args.len(), group.start, group.end);
/// ```
#[macro_export]
macro_rules! sqlbatch_trace_query {
    ($sql:expr, $param_count:expr, $start:expr, $end:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            sql = %$sql,
            params = $param_count,
            start = $start,
            end = $end,
            "sqlbatch.query"
        );
    };
}

/// Emit a debug-level tracing event for a whitelisted column that has no
/// matching record attribute.
///
/// ```ignore
/// sqlbatch_trace_drop!(column);
/// ```
#[macro_export]
macro_rules! sqlbatch_trace_drop {
    ($column:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(column = %$column, "sqlbatch.column.dropped");
    };
}
