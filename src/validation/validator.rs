//! The validation orchestrator.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::aliases::is_accepted;
use super::extension::file_extension;
use super::options::ValidatorOptions;
use super::result::ValidationResult;
use crate::common::detection::{FileKind, detect_file_kind_from_bytes, read_head};
use crate::common::error::{Error, Result};

/// Checks file contents against claimed file names.
///
/// A `Validator` is immutable once built and can be shared freely between
/// threads.
///
/// # Examples
///
/// ```rust
/// use extguard::{Validator, ValidatorOptions};
///
/// let validator = Validator::with_options(ValidatorOptions::new().with_alias("cbz", "zip"))?;
///
/// let result = validator.validate(b"PK\x03\x04", "comic.cbz");
/// assert!(result.is_valid);
///
/// let result = validator.validate(b"MZ\x90\x00", "holiday.jpg");
/// assert!(!result.is_valid);
/// assert_eq!(result.actual_type.as_str(), "exe");
/// # Ok::<(), extguard::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Validator {
    options: ValidatorOptions,
}

impl Validator {
    /// Create a validator with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator with custom options.
    ///
    /// Fails with [`Error::InvalidOption`] if `read_limit` is zero.
    pub fn with_options(options: ValidatorOptions) -> Result<Self> {
        if options.read_limit == 0 {
            return Err(Error::InvalidOption(
                "read_limit must be greater than zero".to_string(),
            ));
        }
        Ok(Self { options })
    }

    /// Options this validator was built with.
    #[inline]
    pub fn options(&self) -> &ValidatorOptions {
        &self.options
    }

    /// Validate an in-memory file head against its claimed name.
    ///
    /// Never fails: undetectable content reports as
    /// [`FileKind::Unknown`] and a name without an extension simply won't
    /// match anything.
    pub fn validate(&self, bytes: &[u8], file_name: &str) -> ValidationResult {
        let extension = file_extension(file_name);
        let actual_type = detect_file_kind_from_bytes(bytes);
        let is_valid = self.accepts(&extension, actual_type);

        tracing::debug!(
            file_name,
            extension = %extension,
            actual_type = %actual_type,
            is_valid,
            "validated file content"
        );

        ValidationResult {
            file_name: file_name.to_string(),
            extension,
            actual_type,
            is_valid,
        }
    }

    /// Read up to `read_limit` bytes from `reader` and validate them.
    pub fn validate_reader<R: Read>(&self, reader: R, file_name: &str) -> Result<ValidationResult> {
        let head = read_head(reader, self.options.read_limit)?;
        Ok(self.validate(&head, file_name))
    }

    /// Validate a file on disk, using its own file name as the claimed name.
    pub fn validate_path<P: AsRef<Path>>(&self, path: P) -> Result<ValidationResult> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| Error::MissingFileName(path.to_path_buf()))?;
        let file = File::open(path)?;
        self.validate_reader(file, &file_name)
    }

    /// Whether content of kind `actual` is acceptable for `extension`.
    pub fn accepts(&self, extension: &str, actual: FileKind) -> bool {
        let tag = actual.as_str();
        if tag == extension {
            return true;
        }
        if self.options.strict {
            return false;
        }
        is_accepted(extension, tag) || self.options.extra_accepts(extension, tag)
    }
}

/// Validate a file head against its claimed name with default options.
///
/// # Examples
///
/// ```rust
/// use extguard::validate;
///
/// let png = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";
///
/// let result = validate(png, "file.jpg");
/// assert!(!result.is_valid);
/// assert_eq!(result.extension, "jpg");
/// assert_eq!(result.actual_type.as_str(), "png");
/// ```
pub fn validate(bytes: &[u8], file_name: &str) -> ValidationResult {
    Validator::new().validate(bytes, file_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    const PNG: &[u8] = b"\x89PNG\r\n\x1a\n\x00\x00\x00\x0dIHDR";
    const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46];

    fn ooxml(main_part: &str) -> Vec<u8> {
        let mut data = b"PK\x03\x04\x14\x00\x00\x00\x08\x00".to_vec();
        data.extend_from_slice(b"[Content_Types].xml");
        data.extend_from_slice(&[0x00; 16]);
        data.extend_from_slice(b"PK\x03\x04\x14\x00\x00\x00\x08\x00");
        data.extend_from_slice(main_part.as_bytes());
        data.extend_from_slice(&[0x00; 16]);
        data
    }

    #[test]
    fn test_matching_extension() {
        let result = validate(PNG, "file.png");
        assert!(result.is_valid);
        assert_eq!(result.actual_type, FileKind::Png);
        assert_eq!(result.file_name, "file.png");
    }

    #[test]
    fn test_spoofed_extension() {
        let result = validate(PNG, "file.jpg");
        assert!(!result.is_valid);
        assert_eq!(result.actual_type, FileKind::Png);
        assert_eq!(result.extension, "jpg");
    }

    #[test]
    fn test_alias_extension() {
        assert!(validate(JPEG, "photo.jfif").is_valid);
        assert!(validate(JPEG, "photo.JPG").is_valid);
        assert!(validate(JPEG, "photo.jpeg").is_valid);
        assert!(!validate(JPEG, "photo.png").is_valid);
    }

    #[test]
    fn test_office_refinement() {
        let docx = ooxml("word/document.xml");
        let result = validate(&docx, "report.docx");
        assert_eq!(result.actual_type, FileKind::Docx);
        assert!(result.is_valid);

        // The table only lets docx accept zip, not the other way round
        let result = validate(&docx, "report.zip");
        assert_eq!(result.actual_type, FileKind::Docx);
        assert!(!result.is_valid);

        let result = validate(&ooxml("xl/workbook.xml"), "book.xlsm");
        assert_eq!(result.actual_type, FileKind::Xlsx);
        assert!(result.is_valid);
    }

    #[test]
    fn test_plain_zip_as_office_name() {
        let result = validate(b"PK\x03\x04\x14\x00\x00\x00", "report.docx");
        assert_eq!(result.actual_type, FileKind::Zip);
        assert!(result.is_valid);
        assert!(validate(b"PK\x03\x04\x14\x00\x00\x00", "app.apk").is_valid);
        assert!(!validate(b"PK\x03\x04\x14\x00\x00\x00", "app.exe").is_valid);
    }

    #[test]
    fn test_text_formats() {
        let csv = b"id,name\n1,alice\n";
        assert!(validate(csv, "users.csv").is_valid);
        assert!(validate(csv, "users.txt").is_valid);
        assert!(!validate(csv, "users.xlsx").is_valid);
    }

    #[test]
    fn test_pdf_illustrator() {
        assert!(validate(b"%PDF-1.6\n%AI", "logo.ai").is_valid);
        assert!(validate(b"%!PS-Adobe-3.0", "logo.ai").is_valid);
    }

    #[test]
    fn test_no_extension() {
        let result = validate(PNG, "png");
        assert_eq!(result.extension, "");
        assert!(!result.is_valid);
    }

    #[test]
    fn test_tiny_buffers() {
        for bytes in [&b""[..], b"a", b"\x00", b"\xff\xd8", b"PK\x03"] {
            let result = validate(bytes, "x.bin");
            assert!(matches!(result.actual_type, FileKind::Unknown | FileKind::Txt));
            assert!(!result.is_valid);
        }
        assert_eq!(validate(b"", "x.txt").actual_type, FileKind::Unknown);
    }

    #[test]
    fn test_idempotent() {
        let docx = ooxml("ppt/presentation.xml");
        assert_eq!(validate(&docx, "a.pptx"), validate(&docx, "a.pptx"));
    }

    #[test]
    fn test_strict_mode() {
        let validator = Validator::with_options(ValidatorOptions::new().with_strict(true)).unwrap();
        assert!(!validator.validate(JPEG, "photo.jfif").is_valid);
        assert!(validator.validate(JPEG, "photo.jpg").is_valid);
    }

    #[test]
    fn test_extra_aliases() {
        let validator =
            Validator::with_options(ValidatorOptions::new().with_alias("CBR", "rar")).unwrap();
        assert!(validator.validate(b"Rar!\x1a\x07\x00", "issue1.cbr").is_valid);
        // Built-in entries still apply
        assert!(validator.validate(JPEG, "photo.jfif").is_valid);
    }

    #[test]
    fn test_zero_read_limit_rejected() {
        let err = Validator::with_options(ValidatorOptions::new().with_read_limit(0)).unwrap_err();
        assert!(matches!(err, Error::InvalidOption(_)));
    }

    #[test]
    fn test_validate_reader_honours_limit() {
        let validator =
            Validator::with_options(ValidatorOptions::new().with_read_limit(300)).unwrap();
        let mut tar = vec![0u8; 1024];
        tar[..9].copy_from_slice(b"hello.txt");
        tar[257..263].copy_from_slice(b"ustar\0");
        let result = validator.validate_reader(Cursor::new(&tar), "bundle.tar").unwrap();
        assert_eq!(result.actual_type, FileKind::Tar);

        let validator =
            Validator::with_options(ValidatorOptions::new().with_read_limit(200)).unwrap();
        let result = validator.validate_reader(Cursor::new(&tar), "bundle.tar").unwrap();
        assert_eq!(result.actual_type, FileKind::Unknown);
    }

    #[test]
    fn test_validate_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Scan.PNG");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(PNG).unwrap();
        drop(file);

        let result = Validator::new().validate_path(&path).unwrap();
        assert_eq!(result.file_name, "Scan.PNG");
        assert_eq!(result.extension, "png");
        assert!(result.is_valid);
    }

    #[test]
    fn test_validate_path_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = Validator::new()
            .validate_path(dir.path().join("missing.png"))
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));

        let err = Validator::new().validate_path("/").unwrap_err();
        assert!(matches!(err, Error::MissingFileName(_)));
    }
}
