//! Pull-based iterator infrastructure for query execution
//!
//! The core trait is [`RowIterator`]: a tuple producer with an explicit
//! open/rewind/close lifecycle. All query operators (scan, filter,
//! projection, join) implement it, so operators compose into pipelines
//! where each parent pulls rows from the children it owns.
//!
//! # Benefits
//!
//! - **Memory efficiency**: a join holds one row from each side, never the
//!   product
//! - **Streaming**: rows flow through the pipeline without buffering
//! - **Early termination**: the consumer stops pulling whenever it has
//!   enough
//! - **Composability**: any operator can be the child of any other
//!
//! # Example
//!
//! ```rust,ignore
//! let scan = TableScanIterator::from_table(&table)?;
//! let filter = FilterIterator::new(scan, predicate);
//!
//! let mut pipeline = filter;
//! pipeline.open()?;
//! while pipeline.has_next()? {
//!     println!("{:?}", pipeline.next()?);
//! }
//! pipeline.close();
//! ```

use crate::errors::ExecutorError;

pub mod filter;
pub mod join;
pub mod project;
pub mod scan;

#[cfg(test)]
mod tests;

/// Tuple producer capability implemented by every operator in the pipeline.
///
/// Lifecycle: a freshly constructed operator is closed. `open` makes it
/// pullable; `rewind` returns an open operator to its just-opened state;
/// `close` releases it. Pulling from or rewinding an operator that is not
/// open fails deterministically with [`ExecutorError::NotOpen`].
pub trait RowIterator {
    /// Open this operator (and, transitively, the children it owns).
    /// Must be called before any pull.
    fn open(&mut self) -> Result<(), ExecutorError>;

    /// Check whether another row is available. May buffer the next row
    /// internally, but repeated calls observe the same answer until `next`
    /// consumes it.
    fn has_next(&mut self) -> Result<bool, ExecutorError>;

    /// Produce the next row. Fails with [`ExecutorError::NoMoreRows`] when
    /// the stream is exhausted.
    fn next(&mut self) -> Result<storage::Row, ExecutorError>;

    /// Reset the cursor to the start of the stream. Callable only while
    /// open; restores the operator to its just-opened state.
    fn rewind(&mut self) -> Result<(), ExecutorError>;

    /// Close this operator. Idempotent and safe at any time; subsequent
    /// pulls fail until the operator is opened again.
    fn close(&mut self);

    /// The schema of rows this operator produces. Constant throughout the
    /// operator's lifetime.
    fn schema(&self) -> &catalog::Schema;
}
