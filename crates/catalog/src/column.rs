/// Column definition in a schema.
///
/// `table` carries the qualifier (table name or alias) the column came from,
/// so merged schemas keep track of which side contributed each field.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSchema {
    pub table: Option<String>,
    pub name: String,
    pub data_type: types::DataType,
    pub nullable: bool,
}

impl ColumnSchema {
    pub fn new(name: String, data_type: types::DataType, nullable: bool) -> Self {
        ColumnSchema { table: None, name, data_type, nullable }
    }

    /// Create a column qualified with a table name or alias
    pub fn with_table(
        table: String,
        name: String,
        data_type: types::DataType,
        nullable: bool,
    ) -> Self {
        ColumnSchema { table: Some(table), name, data_type, nullable }
    }

    /// Human-readable name, qualified when a table is known ("t.c")
    pub fn qualified_name(&self) -> String {
        match &self.table {
            Some(table) => format!("{}.{}", table, self.name),
            None => self.name.clone(),
        }
    }
}
