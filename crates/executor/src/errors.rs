use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExecutorError {
    /// Lifecycle misuse: pulling from or rewinding an operator that has not
    /// been opened (or has been closed).
    #[error("operator has not been opened")]
    NotOpen,

    /// `next` was called with no rows left to produce.
    #[error("no more rows")]
    NoMoreRows,

    #[error("field index {index} out of bounds")]
    FieldIndexOutOfBounds { index: usize },

    /// Failure propagated from the storage layer, attributed but unchanged.
    #[error("storage error: {0}")]
    Storage(String),

    #[error("memory limit exceeded: {used_bytes} bytes required, {max_bytes} bytes allowed")]
    MemoryLimitExceeded { used_bytes: usize, max_bytes: usize },
}

impl From<storage::StorageError> for ExecutorError {
    fn from(err: storage::StorageError) -> Self {
        ExecutorError::Storage(err.to_string())
    }
}
