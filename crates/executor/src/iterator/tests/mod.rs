//! Test helpers and utilities for iterator tests

use super::*;

use super::filter::FilterIterator;
use super::join::NestedLoopJoinIterator;
use super::project::ProjectionIterator;
use super::scan::TableScanIterator;
use crate::predicate::{CompareOp, FieldPredicate, JoinPredicate};
use catalog::{ColumnSchema, Schema};
use storage::Row;
use types::{DataType, SqlValue};

/// Helper to create a simple single-table schema for testing
pub(crate) fn test_schema() -> Schema {
    Schema::new(vec![ColumnSchema::with_table(
        "test".to_string(),
        "id".to_string(),
        DataType::Integer,
        false,
    )])
}

/// Helper to create two-table schemas for join tests
pub(crate) fn test_join_schemas() -> (Schema, Schema) {
    let left = Schema::new(vec![
        ColumnSchema::with_table("t1".to_string(), "id".to_string(), DataType::Integer, false),
        ColumnSchema::with_table("t1".to_string(), "value".to_string(), DataType::Integer, false),
    ]);
    let right = Schema::new(vec![
        ColumnSchema::with_table("t2".to_string(), "id".to_string(), DataType::Integer, false),
        ColumnSchema::with_table("t2".to_string(), "data".to_string(), DataType::Integer, false),
    ]);
    (left, right)
}

/// Open an operator and pull it dry, collecting every row
pub(crate) fn open_and_drain<I: RowIterator>(iter: &mut I) -> Vec<Row> {
    iter.open().unwrap();
    drain(iter)
}

/// Pull an already-open operator dry from its current position
pub(crate) fn drain<I: RowIterator>(iter: &mut I) -> Vec<Row> {
    let mut rows = Vec::new();
    while iter.has_next().unwrap() {
        rows.push(iter.next().unwrap());
    }
    rows
}
