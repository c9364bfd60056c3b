//! Content-versus-extension validation.
//!
//! Combines extension extraction, detection and the alias table into a single
//! [`ValidationResult`] per file.

// Submodule declarations
pub mod aliases;
pub mod extension;
pub mod options;
pub mod result;
pub mod validator;

// Re-exports
pub use aliases::{EXTENSION_ALIASES, accepted_types, is_accepted};
pub use extension::file_extension;
pub use options::{DEFAULT_READ_LIMIT, ValidatorOptions};
pub use result::ValidationResult;
pub use validator::{Validator, validate};

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::common::detection::FileKind;
    use proptest::prelude::*;

    /// Names with zero or more dots and arbitrary casing
    fn file_name_strategy() -> impl Strategy<Value = String> {
        "[A-Za-z0-9_ ]{0,8}(\\.[A-Za-z0-9]{0,5}){0,3}"
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn prop_validate_never_panics_and_is_deterministic(
            bytes in prop::collection::vec(any::<u8>(), 0..1024),
            name in file_name_strategy(),
        ) {
            let first = validate(&bytes, &name);
            let second = validate(&bytes, &name);
            prop_assert_eq!(&first, &second);
            prop_assert_ne!(first.actual_type, FileKind::ZipBased);
            prop_assert_eq!(&first.file_name, &name);
        }

        #[test]
        fn prop_extension_is_last_lowercase_segment(name in file_name_strategy()) {
            let ext = file_extension(&name);
            prop_assert!(!ext.contains('.'));
            prop_assert_eq!(ext.clone(), ext.to_lowercase());
            if name.contains('.') {
                prop_assert!(name.to_lowercase().ends_with(&ext));
            } else {
                prop_assert!(ext.is_empty());
            }
        }

        #[test]
        fn prop_exact_extension_always_valid(
            bytes in prop::collection::vec(any::<u8>(), 0..600),
            stem in "[a-z]{1,8}",
        ) {
            let kind = crate::detect_file_kind_from_bytes(&bytes);
            let name = format!("{stem}.{kind}");
            prop_assert!(validate(&bytes, &name).is_valid);
        }
    }
}
