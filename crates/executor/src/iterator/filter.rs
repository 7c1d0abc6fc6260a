//! Filter iterator implementation

use crate::{errors::ExecutorError, predicate::FieldPredicate};

use super::RowIterator;

/// Operator that yields only the child rows satisfying a field predicate.
///
/// Rows are evaluated lazily - the predicate runs only for rows that are
/// actually pulled through. A predicate failure (field index the row does
/// not have) is surfaced to the caller, not skipped.
pub struct FilterIterator<I: RowIterator> {
    source: I,
    predicate: FieldPredicate,
    /// Next passing row, buffered by `has_next` until `next` consumes it
    pending: Option<storage::Row>,
}

impl<I: RowIterator> FilterIterator<I> {
    /// Create a new filter over `source`
    pub fn new(source: I, predicate: FieldPredicate) -> Self {
        Self { source, predicate, pending: None }
    }

    pub fn predicate(&self) -> &FieldPredicate {
        &self.predicate
    }
}

impl<I: RowIterator> RowIterator for FilterIterator<I> {
    fn open(&mut self) -> Result<(), ExecutorError> {
        self.pending = None;
        self.source.open()
    }

    fn has_next(&mut self) -> Result<bool, ExecutorError> {
        while self.pending.is_none() {
            if !self.source.has_next()? {
                break;
            }
            let row = self.source.next()?;
            if self.predicate.matches(&row)? {
                self.pending = Some(row);
            }
        }
        Ok(self.pending.is_some())
    }

    fn next(&mut self) -> Result<storage::Row, ExecutorError> {
        if !self.has_next()? {
            return Err(ExecutorError::NoMoreRows);
        }
        self.pending.take().ok_or(ExecutorError::NoMoreRows)
    }

    fn rewind(&mut self) -> Result<(), ExecutorError> {
        self.pending = None;
        self.source.rewind()
    }

    fn close(&mut self) {
        self.pending = None;
        self.source.close();
    }

    fn schema(&self) -> &catalog::Schema {
        self.source.schema()
    }
}
