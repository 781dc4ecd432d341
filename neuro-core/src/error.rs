//! Error types for the NeuroLite core library.

use thiserror::Error;

/// Top-level error type for all core operations.
///
/// The classification modules themselves are infallible (every input falls
/// through to a default branch); errors only arise from the filesystem and
/// from configuration parsing.
#[derive(Error, Debug)]
pub enum NeuroError {
    /// Reading or writing the memory backing file failed.
    #[error("Memory file error at {path}: {source}")]
    MemoryFile {
        /// Path to the backing file.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, NeuroError>;
