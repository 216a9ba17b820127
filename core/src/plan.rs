//! Batch planning: how many rows go into each statement so no statement binds
//! more parameters than the driver can address.

use crate::error::{BatchError, Result};
use core::ops::Range;

/// The most positional parameters one PostgreSQL statement can reference.
/// Parameter numbers travel as unsigned 16-bit integers on the wire.
pub const POSTGRES_MAX_PARAMS: usize = u16::MAX as usize;

/// Rows per batch and number of batches for one collection.
///
/// The plan does not record the length of the last batch; use
/// [`BatchPlan::batch_len`] or [`BatchPlan::batch_range`] with the total row
/// count for that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BatchPlan {
    pub rows_per_batch: usize,
    pub batch_count: usize,
}

impl BatchPlan {
    /// Plans `total_rows` rows of `columns` bound values each under a ceiling of
    /// `limit` parameters per statement.
    ///
    /// `columns` must be at least one whenever a split is needed.
    pub const fn new(total_rows: usize, columns: usize, limit: usize) -> Self {
        if total_rows.saturating_mul(columns) <= limit {
            return Self {
                rows_per_batch: total_rows,
                batch_count: 1,
            };
        }

        let rows_per_batch = limit / columns;
        Self {
            rows_per_batch,
            batch_count: total_rows.div_ceil(rows_per_batch),
        }
    }

    /// Like [`BatchPlan::new`], but rejects a ceiling that cannot hold a single
    /// row instead of dividing by zero.
    pub fn checked(total_rows: usize, columns: usize, limit: usize) -> Result<Self> {
        if total_rows.saturating_mul(columns) > limit && limit < columns {
            return Err(BatchError::ParamLimit { limit, columns });
        }
        Ok(Self::new(total_rows, columns, limit))
    }

    /// Number of rows in batch `index`. Every batch is full except possibly
    /// the last.
    pub fn batch_len(&self, total_rows: usize, index: usize) -> usize {
        let start = self.rows_per_batch * index;
        self.rows_per_batch.min(total_rows.saturating_sub(start))
    }

    /// Half-open range of the original collection covered by batch `index`.
    pub fn batch_range(&self, total_rows: usize, index: usize) -> Range<usize> {
        let start = self.rows_per_batch * index;
        start..start + self.batch_len(total_rows, index)
    }

    /// Ranges of every batch in ascending order.
    pub fn batches(&self, total_rows: usize) -> impl Iterator<Item = Range<usize>> + '_ {
        (0..self.batch_count).map(move |index| self.batch_range(total_rows, index))
    }
}
