//! Projection iterator implementation

use crate::errors::ExecutorError;

use super::RowIterator;

/// Operator that keeps only the selected fields of each child row, in the
/// given order. Fields may be reordered or repeated; the output schema is
/// the corresponding selection of the child schema.
pub struct ProjectionIterator<I: RowIterator> {
    source: I,
    field_indices: Vec<usize>,
    schema: catalog::Schema,
}

impl<I: RowIterator> ProjectionIterator<I> {
    /// Create a projection of `source` onto `field_indices`.
    ///
    /// Indices are validated against the child schema at construction.
    pub fn new(source: I, field_indices: Vec<usize>) -> Result<Self, ExecutorError> {
        let mut columns = Vec::with_capacity(field_indices.len());
        for &index in &field_indices {
            let column = source
                .schema()
                .field(index)
                .ok_or(ExecutorError::FieldIndexOutOfBounds { index })?;
            columns.push(column.clone());
        }
        let schema = catalog::Schema::new(columns);
        Ok(Self { source, field_indices, schema })
    }
}

impl<I: RowIterator> RowIterator for ProjectionIterator<I> {
    fn open(&mut self) -> Result<(), ExecutorError> {
        self.source.open()
    }

    fn has_next(&mut self) -> Result<bool, ExecutorError> {
        self.source.has_next()
    }

    fn next(&mut self) -> Result<storage::Row, ExecutorError> {
        let row = self.source.next()?;

        let mut values = Vec::with_capacity(self.field_indices.len());
        for &index in &self.field_indices {
            let value = row
                .get(index)
                .cloned()
                .ok_or(ExecutorError::FieldIndexOutOfBounds { index })?;
            values.push(value);
        }
        Ok(storage::Row::new(values))
    }

    fn rewind(&mut self) -> Result<(), ExecutorError> {
        self.source.rewind()
    }

    fn close(&mut self) {
        self.source.close();
    }

    fn schema(&self) -> &catalog::Schema {
        &self.schema
    }
}
