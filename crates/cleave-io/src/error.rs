//! Error types for sources and sinks.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from source and sink operations.
#[derive(Debug, Error)]
pub enum IoError {
    /// An underlying I/O operation failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A read returned fewer bytes than the source was known to hold.
    #[error("short read: expected {expected} bytes, got {got} (is the input a regular file?)")]
    ShortRead { expected: usize, got: usize },

    /// A write accepted fewer bytes than were handed to it.
    #[error("short write: expected {expected} bytes, wrote {got} (is the output a regular file?)")]
    ShortWrite { expected: usize, got: usize },

    /// An output piece could not be created.
    #[error("cannot create piece file {path:?}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
