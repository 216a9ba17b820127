//! The seam to a database driver. The engine never executes SQL itself; drivers
//! implement these traits so a [`QueryGroup`](crate::group::QueryGroup) can be
//! run and its results bound back into the caller's collection.

use crate::error::Result;
use crate::group::RawQuery;
use crate::prelude::*;
use core::future::Future;

/// A blocking connection or transaction that can run rendered statements.
pub trait Executor<V> {
    /// Row type returned by the driver.
    type Row;

    /// Runs the statement and returns the number of affected rows.
    fn execute(&mut self, query: RawQuery<'_, V>) -> Result<u64>;

    /// Runs the statement and returns every row it produced.
    fn fetch(&mut self, query: RawQuery<'_, V>) -> Result<Vec<Self::Row>>;
}

/// A non-blocking connection or transaction that can run rendered statements.
pub trait AsyncExecutor<V> {
    /// Row type returned by the driver.
    type Row;

    /// Runs the statement and returns the number of affected rows.
    fn execute(&mut self, query: RawQuery<'_, V>) -> impl Future<Output = Result<u64>>;

    /// Runs the statement and returns every row it produced.
    fn fetch(&mut self, query: RawQuery<'_, V>) -> impl Future<Output = Result<Vec<Self::Row>>>;
}
