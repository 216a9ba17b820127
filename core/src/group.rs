//! Query groups: one rendered statement per batch, with its bound arguments and
//! the slice of the original collection it covers.

use crate::error::{BatchError, Result};
use crate::executor::{AsyncExecutor, Executor};
use crate::prelude::*;
use core::ops::Range;

/// A runnable statement: SQL text plus the arguments bound to its numbered
/// placeholders, in placeholder order.
#[derive(Debug)]
pub struct RawQuery<'q, V> {
    pub sql: &'q str,
    pub params: &'q [V],
}

impl<V> Clone for RawQuery<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for RawQuery<'_, V> {}

/// One batch of a bulk statement.
///
/// `rows` holds one placeholder fragment per record, `args` the flattened bound
/// values in row-major, column order, and `start..end` the half-open range of
/// the original collection this batch covers.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryGroup<V> {
    pub sql: String,
    pub rows: Vec<String>,
    pub args: Vec<V>,
    pub start: usize,
    pub end: usize,
}

impl<V> QueryGroup<V> {
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Number of records in this batch.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The runnable handle for this batch.
    #[inline]
    pub fn query(&self) -> RawQuery<'_, V> {
        RawQuery {
            sql: &self.sql,
            params: &self.args,
        }
    }

    /// Copies records returned for this batch back into `dest[start..end]`.
    ///
    /// At most `len()` records are written; extra records are ignored and a
    /// short batch leaves the remaining slots untouched. Returns the number of
    /// records written.
    pub fn scatter<T, I>(&self, dest: &mut [T], batch: I) -> Result<usize>
    where
        I: IntoIterator<Item = T>,
    {
        let total = dest.len();
        let slots = dest.get_mut(self.range()).ok_or_else(|| {
            BatchError::Mapping(format!(
                "destination holds {} records, batch covers {}..{}",
                total, self.start, self.end
            ))
        })?;

        let mut written = 0;
        for (slot, record) in slots.iter_mut().zip(batch) {
            *slot = record;
            written += 1;
        }
        Ok(written)
    }

    /// Runs this batch on `executor`, decodes every returned row and scatters
    /// the results into `dest`.
    pub fn bind<E, R, F>(&self, executor: &mut E, dest: &mut [R], decode: F) -> Result<usize>
    where
        E: Executor<V>,
        F: FnMut(&E::Row) -> Result<R>,
    {
        let rows = executor.fetch(self.query())?;
        let batch = rows.iter().map(decode).collect::<Result<Vec<R>>>()?;
        self.scatter(dest, batch)
    }

    /// Async counterpart of [`QueryGroup::bind`].
    pub async fn bind_async<E, R, F>(
        &self,
        executor: &mut E,
        dest: &mut [R],
        decode: F,
    ) -> Result<usize>
    where
        E: AsyncExecutor<V>,
        F: FnMut(&E::Row) -> Result<R>,
    {
        let rows = executor.fetch(self.query()).await?;
        let batch = rows.iter().map(decode).collect::<Result<Vec<R>>>()?;
        self.scatter(dest, batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(start: usize, end: usize) -> QueryGroup<i64> {
        QueryGroup {
            sql: String::from("INSERT"),
            rows: Vec::new(),
            args: vec![1, 2],
            start,
            end,
        }
    }

    struct Recorder {
        seen: Vec<(String, usize)>,
        rows: Vec<i64>,
    }

    impl Executor<i64> for Recorder {
        type Row = i64;

        fn execute(&mut self, query: RawQuery<'_, i64>) -> Result<u64> {
            self.seen.push((query.sql.to_string(), query.params.len()));
            Ok(self.rows.len() as u64)
        }

        fn fetch(&mut self, query: RawQuery<'_, i64>) -> Result<Vec<i64>> {
            self.seen.push((query.sql.to_string(), query.params.len()));
            Ok(self.rows.clone())
        }
    }

    #[test]
    fn test_range_and_len() {
        let group = group(4, 9);
        assert_eq!(group.range(), 4..9);
        assert_eq!(group.len(), 5);
        assert!(!group.is_empty());
    }

    #[test]
    fn test_query_borrows_sql_and_args() {
        let group = group(0, 2);
        let query = group.query();
        assert_eq!(query.sql, "INSERT");
        assert_eq!(query.params, &[1, 2]);
    }

    #[test]
    fn test_scatter_writes_covered_range_only() {
        let mut dest = vec![0; 6];
        let written = group(2, 5).scatter(&mut dest, [7, 8, 9, 10]).unwrap();
        assert_eq!(written, 3);
        assert_eq!(dest, vec![0, 0, 7, 8, 9, 0]);
    }

    #[test]
    fn test_scatter_short_batch_leaves_tail() {
        let mut dest = vec![0; 4];
        let written = group(0, 4).scatter(&mut dest, [1]).unwrap();
        assert_eq!(written, 1);
        assert_eq!(dest, vec![1, 0, 0, 0]);
    }

    #[test]
    fn test_scatter_rejects_short_destination() {
        let mut dest = vec![0; 3];
        let err = group(2, 5).scatter(&mut dest, [1, 2, 3]).unwrap_err();
        assert!(matches!(err, BatchError::Mapping(_)));
    }

    #[test]
    fn test_bind_fetches_decodes_and_scatters() {
        let mut executor = Recorder {
            seen: Vec::new(),
            rows: vec![10, 20],
        };
        let mut dest = vec![0i64; 4];

        let written = group(1, 3)
            .bind(&mut executor, &mut dest, |row| Ok(row * 2))
            .unwrap();

        assert_eq!(written, 2);
        assert_eq!(dest, vec![0, 20, 40, 0]);
        assert_eq!(executor.seen, vec![(String::from("INSERT"), 2)]);
    }

    #[test]
    fn test_bind_propagates_decode_errors() {
        let mut executor = Recorder {
            seen: Vec::new(),
            rows: vec![1],
        };
        let mut dest = vec![0i64; 1];

        let err = group(0, 1)
            .bind(&mut executor, &mut dest, |_| {
                Err(BatchError::Mapping(String::from("bad row")))
            })
            .unwrap_err();

        assert!(matches!(err, BatchError::Mapping(_)));
        assert_eq!(dest, vec![0]);
    }
}
