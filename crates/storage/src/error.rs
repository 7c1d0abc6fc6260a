use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StorageError {
    #[error("column count mismatch: expected {expected}, got {actual}")]
    ColumnCountMismatch { expected: usize, actual: usize },

    #[error("column '{0}' is not nullable")]
    NullConstraintViolation(String),
}
