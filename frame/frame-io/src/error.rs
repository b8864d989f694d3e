//! Error types for STL I/O.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for STL I/O operations.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur during STL I/O.
///
/// Writing can only fail with [`IoError::Io`]; the remaining variants
/// are produced by the loader when a file is too short or truncated.
#[derive(Debug, Error)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// File too short to hold the 80-byte header and triangle count.
    #[error("invalid STL header: expected {expected} bytes, got {got}")]
    InvalidHeader {
        /// Expected header size.
        expected: usize,
        /// Actual number of bytes available.
        got: usize,
    },

    /// Fewer triangle records than the count field promised.
    #[error("invalid triangle count: expected {expected}, got {got}")]
    InvalidTriangleCount {
        /// Count stored in the header.
        expected: u32,
        /// Number of complete records actually read.
        got: u32,
    },

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
