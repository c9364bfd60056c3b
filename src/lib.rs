//! extguard - find out what an uploaded file really is
//!
//! This library inspects the leading bytes of a file, identifies its format
//! from magic numbers and a few structural markers, and checks that result
//! against the extension in the file's claimed name. It is meant to catch
//! spoofed uploads such as an executable renamed to `.jpg`.
//!
//! # Features
//!
//! - **Ordered signature table**: images, documents, archives, audio, video
//!   and disc images, evaluated first-match-wins
//! - **ZIP refinement**: tells Word, Excel and PowerPoint packages apart
//!   from plain archives without unpacking them
//! - **Alias table**: one-directional extension equivalences (`jfif` accepts
//!   `jpg`, `docx` accepts `zip`, ...)
//! - **No failure path** for in-memory input: unknown content is a value,
//!   not an error
//!
//! # Example - Validating an upload
//!
//! ```
//! use extguard::{FileKind, validate};
//!
//! let upload = b"MZ\x90\x00\x03\x00\x00\x00";
//! let result = validate(upload, "cat.jpg");
//!
//! assert_eq!(result.extension, "jpg");
//! assert_eq!(result.actual_type, FileKind::Exe);
//! assert!(!result.is_valid);
//! ```
//!
//! # Example - Validating a file on disk
//!
//! ```no_run
//! use extguard::Validator;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let result = Validator::new().validate_path("uploads/report.docx")?;
//! if !result.is_valid {
//!     println!("{} is really a {}", result.file_name, result.actual_type);
//! }
//! # Ok(())
//! # }
//! ```

/// Detection machinery, shared types and errors.
pub mod common;

/// Extension extraction, alias table and the validation entry points.
pub mod validation;

// Re-export commonly used types for convenience
pub use common::detection::{
    FileKind, detect_file_kind, detect_file_kind_from_bytes, detect_file_kind_from_reader,
    refine_zip_kind, sniff_signature,
};
pub use common::error::{Error, Result};
pub use validation::{
    ValidationResult, Validator, ValidatorOptions, accepted_types, file_extension, is_accepted,
    validate,
};
