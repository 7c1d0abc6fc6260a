use crate::{Row, StorageError};

/// In-memory table - a named, schema-carrying row store.
///
/// Serves as the leaf data source for table scans; the execution pipeline
/// never mutates a table, it only reads `scan()`.
#[derive(Debug, Clone)]
pub struct Table {
    name: String,
    schema: catalog::Schema,
    rows: Vec<Row>,
}

impl Table {
    /// Create a new empty table with given schema
    pub fn new(name: String, schema: catalog::Schema) -> Self {
        Table { name, schema, rows: Vec::new() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn schema(&self) -> &catalog::Schema {
        &self.schema
    }

    /// Insert a row into the table
    ///
    /// Validates field count against the schema and NULLs against column
    /// nullability. Type checking is the caller's responsibility.
    pub fn insert(&mut self, row: Row) -> Result<(), StorageError> {
        if row.len() != self.schema.len() {
            return Err(StorageError::ColumnCountMismatch {
                expected: self.schema.len(),
                actual: row.len(),
            });
        }

        for (value, column) in row.values.iter().zip(&self.schema.columns) {
            if value.is_null() && !column.nullable {
                return Err(StorageError::NullConstraintViolation(column.name.clone()));
            }
        }

        self.rows.push(row);
        Ok(())
    }

    /// Get all rows (for scanning)
    pub fn scan(&self) -> &[Row] {
        &self.rows
    }

    /// Get number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Clear all rows
    pub fn clear(&mut self) {
        self.rows.clear();
    }
}
