//! Error types for the cache gateway
//!
//! Provides unified error handling using thiserror.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache layer.
///
/// None of these are retried or swallowed by the gateway; they always reach
/// the caller.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Cache directory could not be created
    #[error("Failed to create cache directory {}: {source}", .path.display())]
    CacheDir { path: PathBuf, source: io::Error },

    /// Reading, writing or renaming a cache file failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    /// A computed value could not be encoded into a file record
    #[error("Failed to serialize cache record {}: {source}", .path.display())]
    Serialize {
        path: PathBuf,
        source: bincode::Error,
    },

    /// A file record exists but cannot be decoded
    #[error("Corrupted cache record {}: {source}", .path.display())]
    Corrupted {
        path: PathBuf,
        source: bincode::Error,
    },

    /// Writing the ZIP archive failed
    #[error("Failed to archive {}: {source}", .path.display())]
    Archive {
        path: PathBuf,
        source: zip::result::ZipError,
    },

    /// Operation is not declared in the registry
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    /// Operation declared twice in the same registry
    #[error("Duplicate operation: {0}")]
    DuplicateOperation(String),

    /// Argument count does not match the declared parameter list
    #[error("Operation {operation} expects {expected} arguments, got {actual}")]
    ArityMismatch {
        operation: String,
        expected: usize,
        actual: usize,
    },
}

// == Result Type Alias ==
/// Convenience Result type for the cache layer.
pub type Result<T> = std::result::Result<T, CacheError>;
