use crate::column::ColumnSchema;

/// Ordered schema describing the rows an operator produces.
///
/// Field positions are significant: row value `i` conforms to `columns[i]`.
/// Merging two schemas concatenates them, left fields first, preserving
/// order and qualification on both sides.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    pub columns: Vec<ColumnSchema>,
}

impl Schema {
    pub fn new(columns: Vec<ColumnSchema>) -> Self {
        Schema { columns }
    }

    /// Get number of fields.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if the schema has no fields.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Get the column at a field position.
    pub fn field(&self, index: usize) -> Option<&ColumnSchema> {
        self.columns.get(index)
    }

    /// Look up a field position by name, optionally qualified with a table
    /// name. An unqualified lookup returns the first matching column.
    pub fn field_index(&self, table: Option<&str>, column: &str) -> Option<usize> {
        self.columns.iter().position(|col| {
            col.name == column
                && match table {
                    Some(t) => col.table.as_deref() == Some(t),
                    None => true,
                }
        })
    }

    /// Concatenate two schemas (for JOIN operations): left fields in order,
    /// then right fields in order. No deduplication of like-named fields.
    pub fn merge(left: &Schema, right: &Schema) -> Schema {
        let mut columns = Vec::with_capacity(left.len() + right.len());
        columns.extend(left.columns.iter().cloned());
        columns.extend(right.columns.iter().cloned());
        Schema { columns }
    }

    /// Return a copy of this schema with every column qualified by `table`.
    /// Used by table scans so downstream operators see "t.c" names.
    pub fn qualify(&self, table: &str) -> Schema {
        let columns = self
            .columns
            .iter()
            .map(|col| ColumnSchema {
                table: Some(table.to_string()),
                name: col.name.clone(),
                data_type: col.data_type.clone(),
                nullable: col.nullable,
            })
            .collect();
        Schema { columns }
    }
}
