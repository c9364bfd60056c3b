//! Validation result record.

use serde::{Deserialize, Serialize};

use crate::common::detection::FileKind;

/// Outcome of checking one file's content against its claimed name.
///
/// Serializes with camelCase keys:
///
/// ```json
/// { "fileName": "a.png", "extension": "png", "actualType": "png", "isValid": true }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// File name exactly as supplied by the caller
    pub file_name: String,
    /// Lowercased final extension, empty when the name has none
    pub extension: String,
    /// What the content actually is
    pub actual_type: FileKind,
    /// Whether the content is acceptable for the extension
    pub is_valid: bool,
}

impl ValidationResult {
    /// Whether the content contradicts the claimed extension.
    #[inline]
    pub fn is_mismatch(&self) -> bool {
        !self.is_valid
    }
}
