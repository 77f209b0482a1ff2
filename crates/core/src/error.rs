//! Error types for the textgrab grouping library.

use thiserror::Error;

/// Primary error type for detection and grouping operations.
#[derive(Error, Debug)]
pub enum GrabError {
    #[error("malformed quad: expected 4 corner points, got {0}")]
    MalformedQuad(usize),

    #[error("invalid image frame: {0}")]
    InvalidImage(String),

    #[error("invalid threshold: {0}")]
    InvalidThreshold(String),

    #[error("malformed detection input: {0}")]
    MalformedInput(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias for GrabError.
pub type Result<T> = std::result::Result<T, GrabError>;
