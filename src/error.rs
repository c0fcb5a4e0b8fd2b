//! Library-level error type for the driver layer.
//!
//! Lexical problems never surface here: they are filed as report
//! entries so the token stream stays total. This type covers the
//! surrounding plumbing, such as reading source files.

use thiserror::Error;

/// Errors produced outside the scanning core.
#[derive(Error, Debug, Clone)]
pub enum RinError {
    /// A source file could not be read.
    #[error("input error: {0}")]
    Io(String),

    /// Anything else the driver layer needs to surface.
    #[error("{0}")]
    Other(String),
}

impl From<std::io::Error> for RinError {
    fn from(e: std::io::Error) -> Self {
        RinError::Io(e.to_string())
    }
}

/// Result alias used across the driver layer.
pub type RinResult<T> = Result<T, RinError>;
