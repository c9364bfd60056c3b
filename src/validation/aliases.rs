//! Extension alias table.
//!
//! An extension is always satisfied by a detected kind with the same tag.
//! This table lists the *other* tags an extension will accept. It is
//! one-directional on purpose: `docx` accepts a plain `zip`, but `zip` does
//! not accept `docx`.
//!
//! Some accepted tags (`jpeg`, `tif`, `heif`, `ps`) are never produced by the
//! signature table; they are kept so the table reads as a plain statement of
//! which names are interchangeable.

use phf::phf_map;

/// Extension → additional accepted tags, built at compile time.
pub static EXTENSION_ALIASES: phf::Map<&'static str, &'static [&'static str]> = phf_map! {
    // Text-based formats without a signature of their own
    "csv" => &["txt"],
    "tsv" => &["txt"],
    "log" => &["txt"],
    "json" => &["txt"],
    "psql" => &["txt"],
    "sql" => &["txt"],
    "rtf" => &["txt"],
    "xml" => &["txt"],
    "md" => &["txt"],
    "sh" => &["txt"],
    "html" => &["txt"],
    "css" => &["txt"],
    "yml" => &["txt"],
    "yaml" => &["txt"],
    "patch" => &["txt"],
    "diff" => &["txt"],
    "tex" => &["txt"],
    "ps" => &["txt"],
    "php" => &["txt"],
    "js" => &["txt"],
    "ts" => &["txt"],

    // Images
    "jpg" => &["jpeg"],
    "jpeg" => &["jpg"],
    "jfif" => &["jpg"],
    "tiff" => &["tif"],
    "tif" => &["tiff"],

    // OLE2 compound files all detect as doc
    "xls" => &["doc"],
    "ppt" => &["doc"],
    "wps" => &["doc"],
    "dot" => &["doc"],
    "pps" => &["doc"],
    "xlt" => &["doc"],

    // OOXML templates and macro-enabled variants
    "dotx" => &["docx"],
    "ppsx" => &["pptx"],
    "xlsm" => &["xlsx"],
    "xltx" => &["xlsx"],
    "xltm" => &["xlsx"],

    // Apple iWork and OpenDocument
    "numbers" => &["zip", "txt"],
    "pages" => &["zip", "txt"],
    "key" => &["zip", "txt"],
    "odt" => &["zip"],
    "ods" => &["zip"],
    "odp" => &["zip"],

    // HEIF family
    "heif" => &["heic"],
    "heic" => &["heif"],

    // ZIP containers
    "apk" => &["zip"],
    "jar" => &["zip"],
    "docx" => &["zip"],
    "xlsx" => &["zip"],
    "pptx" => &["zip"],
    "epub" => &["zip"],

    // Audio (ISO base media)
    "m4a" => &["mp4"],
    "aac" => &["mp4"],

    // Video
    "m4v" => &["mp4"],
    "mov" => &["mp4"],
    "3g2" => &["3gp"],

    // Other
    "db" => &["sqlite"],
    "azw" => &["mobi"],
    "azw3" => &["mobi"],
    "ai" => &["ps", "pdf"],
};

/// Tags an extension accepts besides its own, in declaration order.
///
/// Returns an empty slice for extensions without an entry. The lookup is
/// case-sensitive; pass a lowercased extension.
#[inline]
pub fn accepted_types(extension: &str) -> &'static [&'static str] {
    EXTENSION_ALIASES.get(extension).copied().unwrap_or(&[])
}

/// Whether the alias table lets `extension` accept a detected `tag`.
///
/// Equality is not checked here; see
/// [`ValidationResult`](crate::ValidationResult) for the full rule.
#[inline]
pub fn is_accepted(extension: &str, tag: &str) -> bool {
    accepted_types(extension).contains(&tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::detection::FileKind;

    #[test]
    fn test_lookup() {
        assert_eq!(accepted_types("ai"), &["ps", "pdf"]);
        assert_eq!(accepted_types("numbers"), &["zip", "txt"]);
        assert!(accepted_types("zip").is_empty());
        assert!(accepted_types("").is_empty());
        assert!(accepted_types("CSV").is_empty());
    }

    #[test]
    fn test_asymmetry() {
        assert!(is_accepted("docx", "zip"));
        assert!(!is_accepted("zip", "docx"));
        assert!(is_accepted("m4a", "mp4"));
        assert!(!is_accepted("mp4", "m4a"));
        assert!(is_accepted("jfif", "jpg"));
        assert!(!is_accepted("jpg", "jfif"));
    }

    #[test]
    fn test_symmetric_pairs() {
        for (a, b) in [("jpg", "jpeg"), ("tiff", "tif"), ("heic", "heif")] {
            assert!(is_accepted(a, b), "{a} should accept {b}");
            assert!(is_accepted(b, a), "{b} should accept {a}");
        }
    }

    #[test]
    fn test_keys_are_lowercase() {
        for key in EXTENSION_ALIASES.keys() {
            assert_eq!(*key, key.to_lowercase());
            assert!(!key.contains('.'));
        }
    }

    #[test]
    fn test_targets_are_known_or_documented() {
        let never_detected = ["jpeg", "tif", "heif", "ps"];
        for tags in EXTENSION_ALIASES.values() {
            for tag in tags.iter() {
                assert!(
                    FileKind::from_tag(tag).is_some() || never_detected.contains(tag),
                    "unexpected alias target {tag}"
                );
            }
        }
    }
}
