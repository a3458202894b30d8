//! Store error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors opening a file-backed store.
///
/// Runtime operations on an open store never fail: reads of malformed data
/// degrade to defaults, and a failed write-through is logged and dropped
/// (the in-memory state stays authoritative for the process lifetime).
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file exists but could not be read.
    #[error("failed to read store file {path}: {source}")]
    ReadFile {
        /// Path of the backing file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
