//! Typed errors for store operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors surfaced by the store.
///
/// A missing key is not an error: `get` returns `Option` and `delete`
/// reports whether a removal occurred.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A persisted file could not be opened or created at store open
    /// time. Fatal to that open call; no handle is returned.
    #[error("failed to open {path:?}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An append or flush to the record log or WAL failed. No retry is
    /// attempted; the caller decides next steps.
    #[error("write failed: {0}")]
    Write(#[from] std::io::Error),
}
