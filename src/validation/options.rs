//! Configuration types for validation.
//!
//! This module defines the options used to tune a [`Validator`](super::Validator):
//! how much of a file gets read, and how the extension alias table is applied.

use std::collections::HashMap;

/// Default number of bytes read from a file or reader before detection.
///
/// Comfortably past the ISO 9660 probe at offset 32769.
pub const DEFAULT_READ_LIMIT: usize = 64 * 1024;

/// Configuration options for validation.
///
/// # Examples
///
/// ```rust
/// use extguard::ValidatorOptions;
///
/// // Create with defaults
/// let options = ValidatorOptions::default();
///
/// // Or customize
/// let options = ValidatorOptions::new()
///     .with_read_limit(128 * 1024)
///     .with_alias("mkv", "webm")
///     .with_strict(false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorOptions {
    /// Maximum number of bytes read by the reader and path entry points
    pub read_limit: usize,
    /// Extra tags accepted per (lowercase) extension, on top of the built-in table
    pub extra_aliases: HashMap<String, Vec<String>>,
    /// Accept only exact extension/tag matches, ignoring every alias
    pub strict: bool,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self {
            read_limit: DEFAULT_READ_LIMIT,
            extra_aliases: HashMap::new(),
            strict: false,
        }
    }
}

impl ValidatorOptions {
    /// Create a new `ValidatorOptions` with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of bytes read before detection.
    ///
    /// Values below [`MIN_HEAD_LEN`](crate::common::detection::MIN_HEAD_LEN)
    /// are allowed but disable the ISO 9660 probe. Zero is rejected when the
    /// options are handed to a validator.
    #[inline]
    pub fn with_read_limit(mut self, limit: usize) -> Self {
        self.read_limit = limit;
        self
    }

    /// Let `extension` also accept files detected as `tag`.
    ///
    /// The extension is lowercased; the tag is stored as given. Built-in
    /// aliases are never removed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extguard::ValidatorOptions;
    ///
    /// let options = ValidatorOptions::new().with_alias("CBZ", "zip");
    /// assert_eq!(options.extra_aliases["cbz"], vec!["zip".to_string()]);
    /// ```
    pub fn with_alias(mut self, extension: &str, tag: &str) -> Self {
        let tags = self
            .extra_aliases
            .entry(extension.to_lowercase())
            .or_default();
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
        self
    }

    /// Set whether only exact extension matches count as valid.
    #[inline]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Whether these options' extra aliases let `extension` accept `tag`.
    pub(crate) fn extra_accepts(&self, extension: &str, tag: &str) -> bool {
        self.extra_aliases
            .get(extension)
            .is_some_and(|tags| tags.iter().any(|t| t == tag))
    }
}
