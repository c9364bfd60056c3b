//! Error types for extguard.
use std::path::PathBuf;

use thiserror::Error;

/// Main error type for extguard operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Path has no usable file name component
    #[error("Path has no file name: {}", .0.display())]
    MissingFileName(PathBuf),

    /// Rejected configuration value
    #[error("Invalid option: {0}")]
    InvalidOption(String),
}

/// Result type for extguard operations.
pub type Result<T> = std::result::Result<T, Error>;
