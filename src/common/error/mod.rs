//! Unified error type for the I/O entry points.
//!
//! Detection and validation over an in-memory buffer cannot fail; only reading
//! the buffer in the first place can.

// Submodule declarations
pub mod types;

// Re-exports
pub use types::{Error, Result};
