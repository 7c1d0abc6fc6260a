//! Common test utilities for executor integration tests

use catalog::{ColumnSchema, Schema};
use storage::{Row, Table};
use types::{DataType, SqlValue};

/// Sets up the standard orders test table with sample data.
#[allow(dead_code)] // Test helper - available for all test modules
pub fn setup_orders_table() -> Table {
    let schema = Schema::new(vec![
        ColumnSchema::new("id".to_string(), DataType::Integer, false),
        ColumnSchema::new("customer_id".to_string(), DataType::Integer, false),
        ColumnSchema::new("amount".to_string(), DataType::Integer, false),
    ]);
    let mut table = Table::new("orders".to_string(), schema);

    for (id, customer_id, amount) in
        [(1, 1, 50), (2, 2, 150), (3, 1, 200), (4, 3, 75), (5, 2, 300)]
    {
        table
            .insert(Row::new(vec![
                SqlValue::Integer(id),
                SqlValue::Integer(customer_id),
                SqlValue::Integer(amount),
            ]))
            .unwrap();
    }

    table
}

/// Sets up the standard customers test table with sample data.
#[allow(dead_code)] // Test helper - available for all test modules
pub fn setup_customers_table() -> Table {
    let schema = Schema::new(vec![
        ColumnSchema::new("id".to_string(), DataType::Integer, false),
        ColumnSchema::new(
            "name".to_string(),
            DataType::Varchar { max_length: Some(50) },
            false,
        ),
    ]);
    let mut table = Table::new("customers".to_string(), schema);

    for (id, name) in [(1, "Alice"), (2, "Bob"), (3, "Charlie")] {
        table
            .insert(Row::new(vec![
                SqlValue::Integer(id),
                SqlValue::Varchar(name.to_string()),
            ]))
            .unwrap();
    }

    table
}
