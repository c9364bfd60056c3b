//! Detection machinery and shared types.

// Submodule declarations
pub mod detection;
pub mod error;

// Re-exports for convenience
pub use detection::{FileKind, detect_file_kind, detect_file_kind_from_bytes};
pub use error::{Error, Result};
