//! Table scan iterator implementation

use crate::{errors::ExecutorError, limits};

use super::RowIterator;

use log::debug;

/// Leaf operator that scans rows from a materialized table.
///
/// The cursor is a position index into the row vector; `open` and `rewind`
/// reset it to the start. This is the simplest producer and the usual leaf
/// of a pipeline.
pub struct TableScanIterator {
    schema: catalog::Schema,
    rows: Vec<storage::Row>,
    cursor: usize,
    open: bool,
}

impl TableScanIterator {
    /// Create a scan over a schema and materialized rows
    pub fn new(schema: catalog::Schema, rows: Vec<storage::Row>) -> Self {
        Self { schema, rows, cursor: 0, open: false }
    }

    /// Create a scan over a stored table, qualifying every column with the
    /// table's name so downstream operators see "t.c" field names.
    ///
    /// Copies the rows out of the table; guarded by the scan memory limit.
    pub fn from_table(table: &storage::Table) -> Result<Self, ExecutorError> {
        limits::check_scan_size(table.row_count())?;
        debug!("scanning table {} ({} rows)", table.name(), table.row_count());

        let schema = table.schema().qualify(table.name());
        Ok(Self::new(schema, table.scan().to_vec()))
    }
}

impl RowIterator for TableScanIterator {
    fn open(&mut self) -> Result<(), ExecutorError> {
        self.cursor = 0;
        self.open = true;
        Ok(())
    }

    fn has_next(&mut self) -> Result<bool, ExecutorError> {
        if !self.open {
            return Err(ExecutorError::NotOpen);
        }
        Ok(self.cursor < self.rows.len())
    }

    fn next(&mut self) -> Result<storage::Row, ExecutorError> {
        if !self.has_next()? {
            return Err(ExecutorError::NoMoreRows);
        }
        let row = self.rows[self.cursor].clone();
        self.cursor += 1;
        Ok(row)
    }

    fn rewind(&mut self) -> Result<(), ExecutorError> {
        if !self.open {
            return Err(ExecutorError::NotOpen);
        }
        self.cursor = 0;
        Ok(())
    }

    fn close(&mut self) {
        self.open = false;
    }

    fn schema(&self) -> &catalog::Schema {
        &self.schema
    }
}
