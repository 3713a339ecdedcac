//! Error types for the WebP optimizer.
//!
//! Every per-file failure is folded into [`OptimizerError`] so the batch loop
//! can record it and move on to the next source image.

use std::io;
use thiserror::Error;
use serde::Serialize;

/// Main error type for the optimizer.
///
/// The variants mirror the ways a single conversion can go wrong. None of
/// them is fatal for a batch; only a failure to list the directory itself
/// escapes [`crate::commands::optimize_images`].
#[derive(Error, Debug, Serialize)]
pub enum OptimizerError {
    /// Source file is not a valid or readable image
    #[error("Decode error: {0}")]
    Decode(String),

    /// Pixel layout or quality rejected by the WebP encoder
    #[error("Encode error: {0}")]
    Encode(String),

    /// File IO error (permission denied, disk full, unwritable target)
    #[error("IO error: {0}")]
    IO(String),

    /// Unsupported or invalid image format
    #[error("Format error: {0}")]
    Format(String),
}

/// Convenience result type for optimizer operations.
pub type OptimizerResult<T> = Result<T, OptimizerError>;

// Helper methods for error creation
impl OptimizerError {
    pub fn decode<T: Into<String>>(msg: T) -> Self {
        Self::Decode(msg.into())
    }

    pub fn encode<T: Into<String>>(msg: T) -> Self {
        Self::Encode(msg.into())
    }

    pub fn io<T: Into<String>>(msg: T) -> Self {
        Self::IO(msg.into())
    }

    pub fn format<T: Into<String>>(msg: T) -> Self {
        Self::Format(msg.into())
    }
}

// Convert std::io::Error to OptimizerError
impl From<io::Error> for OptimizerError {
    fn from(err: io::Error) -> Self {
        Self::IO(err.to_string())
    }
}

// The image crate wraps read failures in its own error; keep those as IO.
impl From<image::ImageError> for OptimizerError {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(e) => Self::IO(e.to_string()),
            other => Self::Decode(other.to_string()),
        }
    }
}
