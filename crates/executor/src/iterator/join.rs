//! Resumable nested loop join iterator implementation

use crate::{errors::ExecutorError, predicate::JoinPredicate};

use super::RowIterator;

use log::{debug, trace};

/// Pull-based nested loop join between two child producers.
///
/// For each left row, the entire right side is rescanned (via `rewind` on
/// the right child) and every pair whose designated fields satisfy the
/// predicate is yielded as the concatenation of the two rows. Only one row
/// from each side is held at a time: each pull returns at most one match
/// and suspends with enough state to resume - the right cursor stays just
/// past the match, so the next pull continues scanning against the *same*
/// left row before advancing.
///
/// Output rows keep every field of both sides in order. With an equality
/// predicate the join attribute therefore appears twice; removing the
/// duplicate column is a projection's job, not the join's.
///
/// The scan state (`pairing_started`, `current_left`) lives in ordinary
/// operator fields: exactly one logical scan is active per instance
/// regardless of caller threading.
pub struct NestedLoopJoinIterator<L: RowIterator, R: RowIterator> {
    predicate: JoinPredicate,
    /// Outer (left) child, exclusively owned
    left: L,
    /// Inner (right) child, exclusively owned
    right: R,
    /// Merged output schema (left fields ++ right fields), immutable
    schema: catalog::Schema,
    open: bool,
    /// Whether a left row has been drawn in the current open/rewind epoch
    pairing_started: bool,
    /// Left row the right side is currently being scanned against
    current_left: Option<storage::Row>,
    /// Next match, buffered by `has_next` until `next` consumes it
    pending: Option<storage::Row>,
}

impl<L: RowIterator, R: RowIterator> NestedLoopJoinIterator<L, R> {
    /// Create a join over two children. The children are not opened here;
    /// `open` on the join opens them (left first, then right).
    pub fn new(predicate: JoinPredicate, left: L, right: R) -> Self {
        let schema = catalog::Schema::merge(left.schema(), right.schema());
        Self {
            predicate,
            left,
            right,
            schema,
            open: false,
            pairing_started: false,
            current_left: None,
            pending: None,
        }
    }

    pub fn predicate(&self) -> &JoinPredicate {
        &self.predicate
    }

    /// Qualified name of the left join field, resolved against the left
    /// child's schema. For descriptive/debug output.
    pub fn left_field_name(&self) -> Option<String> {
        self.left
            .schema()
            .field(self.predicate.left_field())
            .map(|col| col.qualified_name())
    }

    /// Qualified name of the right join field, resolved against the right
    /// child's schema. For descriptive/debug output.
    pub fn right_field_name(&self) -> Option<String> {
        self.right
            .schema()
            .field(self.predicate.right_field())
            .map(|col| col.qualified_name())
    }

    /// Advance the nested scan to the next matching pair, or to
    /// end-of-stream.
    ///
    /// Invariant: `pairing_started` and `current_left` are updated only
    /// after a successful draw from the left child, so a child error never
    /// leaves them half-updated.
    fn fetch_next_match(&mut self) -> Result<Option<storage::Row>, ExecutorError> {
        loop {
            // Draw a new left row when pairing has not started yet, or the
            // right side is exhausted for the current left row.
            if !self.pairing_started || !self.right.has_next()? {
                if !self.left.has_next()? {
                    return Ok(None);
                }
                if self.pairing_started {
                    trace!("right side exhausted, advancing left");
                    self.right.rewind()?;
                }
                let row = self.left.next()?;
                self.pairing_started = true;
                self.current_left = Some(row);
            }

            if let Some(left) = &self.current_left {
                while self.right.has_next()? {
                    let right_row = self.right.next()?;
                    if self.predicate.matches(left, &right_row) {
                        trace!(
                            "join match: left={:?} right={:?}",
                            left.values,
                            right_row.values
                        );
                        return Ok(Some(left.concat(&right_row)));
                    }
                }
            }
            // No match for this left row; loop back to advance the left side.
        }
    }
}

impl<L: RowIterator, R: RowIterator> RowIterator for NestedLoopJoinIterator<L, R> {
    fn open(&mut self) -> Result<(), ExecutorError> {
        debug!(
            "nested loop join open: {:?} {} {:?}",
            self.left_field_name(),
            self.predicate.op(),
            self.right_field_name()
        );
        self.left.open()?;
        self.right.open()?;
        self.pairing_started = false;
        self.current_left = None;
        self.pending = None;
        self.open = true;
        Ok(())
    }

    fn has_next(&mut self) -> Result<bool, ExecutorError> {
        if !self.open {
            return Err(ExecutorError::NotOpen);
        }
        if self.pending.is_none() {
            self.pending = self.fetch_next_match()?;
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
        if !self.open {
            return Err(ExecutorError::NotOpen);
        }
        debug!("nested loop join rewind");
        self.left.rewind()?;
        self.right.rewind()?;
        // Back to the just-opened state. Without clearing the pairing flag
        // and the current left row, the next pull would resume mid-pair
        // against a left row from the previous epoch.
        self.pairing_started = false;
        self.current_left = None;
        self.pending = None;
        Ok(())
    }

    fn close(&mut self) {
        self.left.close();
        self.right.close();
        self.pairing_started = false;
        self.current_left = None;
        self.pending = None;
        self.open = false;
    }

    fn schema(&self) -> &catalog::Schema {
        &self.schema
    }
}
