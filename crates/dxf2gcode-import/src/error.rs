//! Error types for drawing import.

use std::io;
use thiserror::Error;

/// Errors that can occur while importing a drawing.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The file extension is not recognized.
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// The DXF file could not be parsed.
    #[error("DXF parse error: {0}")]
    DxfParseError(String),

    /// I/O error during file reading.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

/// Result type alias for import operations.
pub type ImportResult<T> = Result<T, ImportError>;
