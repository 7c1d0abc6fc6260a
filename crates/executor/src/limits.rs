//! Execution limits and safeguards
//!
//! Limits that keep a scan from materializing more data than the process
//! can hold. The pull-based operators themselves never materialize a
//! result - only one row from each side of a join is held at a time - so
//! the guard applies where rows are copied out of a table.

use crate::errors::ExecutorError;

/// Maximum memory a single scan may materialize
pub const MAX_MEMORY_BYTES: usize = 1024 * 1024 * 1024; // 1 GB

/// Conservative per-row estimate used for the guard
pub const ESTIMATED_ROW_BYTES: usize = 100;

/// Maximum number of rows a scan may copy out of a table
pub const MAX_SCAN_ROWS: usize = MAX_MEMORY_BYTES / ESTIMATED_ROW_BYTES;

/// Check that materializing `row_count` rows stays within the memory limit
pub fn check_scan_size(row_count: usize) -> Result<(), ExecutorError> {
    if row_count > MAX_SCAN_ROWS {
        return Err(ExecutorError::MemoryLimitExceeded {
            used_bytes: row_count.saturating_mul(ESTIMATED_ROW_BYTES),
            max_bytes: MAX_MEMORY_BYTES,
        });
    }
    Ok(())
}
