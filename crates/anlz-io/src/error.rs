//! Error types for header and pixel-stream I/O.

use std::io;
use thiserror::Error;

/// I/O operation error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File open, read or write failure.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The header/pixel pair cannot be parsed as a legacy volume.
    #[error("format error: {0}")]
    Format(String),

    /// Invalid header blob handling (wrong size, patch out of range).
    #[error("invalid header: {0}")]
    InvalidHeader(String),

    /// Orientation codec failure, propagated unrecovered.
    #[error(transparent)]
    Orientation(#[from] anlz_core::Error),
}

impl IoError {
    /// Creates an [`IoError::Format`] error.
    #[inline]
    pub fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }

    /// Creates an [`IoError::InvalidHeader`] error.
    #[inline]
    pub fn invalid_header(msg: impl Into<String>) -> Self {
        Self::InvalidHeader(msg.into())
    }
}

/// Result type for I/O operations.
pub type IoResult<T> = Result<T, IoError>;
