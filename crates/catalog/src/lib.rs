//! Catalog - Schema Definitions
//!
//! This crate provides the ordered schema representation shared by storage
//! and the execution pipeline: column definitions, qualified lookup, and
//! the schema concatenation used by joins.

pub mod column;
pub mod schema;

pub use column::ColumnSchema;
pub use schema::Schema;
