//! Core file kind detection functions.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::rules::{ISO_MIN_LEN, sniff_signature};
use super::types::FileKind;
use super::container::refine_zip_kind;
use crate::common::error::Result;

/// Deepest offset any rule inspects, plus one.
///
/// Reading this many bytes is enough for every probe in the signature table.
pub const MIN_HEAD_LEN: usize = ISO_MIN_LEN;

/// Detect the kind of a file from its leading bytes.
///
/// Runs the signature table and resolves a bare ZIP header into docx, xlsx,
/// pptx or zip, so the result is never [`FileKind::ZipBased`].
///
/// # Examples
///
/// ```rust
/// use extguard::{FileKind, detect_file_kind_from_bytes};
///
/// assert_eq!(detect_file_kind_from_bytes(b"GIF89a"), FileKind::Gif);
/// assert_eq!(detect_file_kind_from_bytes(b"PK\x03\x04"), FileKind::Zip);
/// ```
pub fn detect_file_kind_from_bytes(bytes: &[u8]) -> FileKind {
    match sniff_signature(bytes) {
        FileKind::ZipBased => refine_zip_kind(bytes),
        kind => kind,
    }
}

/// Read at most `limit` bytes from a reader into memory.
///
/// Short reads are retried until EOF or `limit` is reached.
pub fn read_head<R: Read>(reader: R, limit: usize) -> Result<Vec<u8>> {
    let mut head = Vec::with_capacity(limit.min(MIN_HEAD_LEN * 2));
    reader.take(limit as u64).read_to_end(&mut head)?;
    Ok(head)
}

/// Detect the kind of whatever a reader yields, reading at most `limit` bytes.
pub fn detect_file_kind_from_reader<R: Read>(reader: R, limit: usize) -> Result<FileKind> {
    let head = read_head(reader, limit)?;
    Ok(detect_file_kind_from_bytes(&head))
}

/// Detect the kind of a file on disk, reading at most `limit` bytes.
///
/// ```rust,no_run
/// use extguard::detect_file_kind;
///
/// let kind = detect_file_kind("upload.bin", 64 * 1024)?;
/// println!("Detected kind: {kind}");
/// # Ok::<(), extguard::Error>(())
/// ```
pub fn detect_file_kind<P: AsRef<Path>>(path: P, limit: usize) -> Result<FileKind> {
    let file = File::open(path)?;
    detect_file_kind_from_reader(file, limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_zip_based_is_always_refined() {
        assert_eq!(detect_file_kind_from_bytes(b"PK\x03\x04"), FileKind::Zip);
        let ooxml = b"PK\x03\x04\x14\x00[Content_Types].xml\x00PK\x03\x04word/document.xml";
        assert_eq!(detect_file_kind_from_bytes(ooxml), FileKind::Docx);
    }

    #[test]
    fn test_non_zip_passes_through() {
        assert_eq!(detect_file_kind_from_bytes(b"%PDF-1.4"), FileKind::Pdf);
        assert_eq!(detect_file_kind_from_bytes(b""), FileKind::Unknown);
    }

    #[test]
    fn test_read_head_respects_limit() {
        let data = vec![b'a'; 1000];
        let head = read_head(Cursor::new(&data), 10).unwrap();
        assert_eq!(head.len(), 10);

        let head = read_head(Cursor::new(&data), 4096).unwrap();
        assert_eq!(head.len(), 1000);
    }

    #[test]
    fn test_detect_from_reader() {
        let reader = Cursor::new(b"Rar!\x1a\x07\x00".to_vec());
        assert_eq!(detect_file_kind_from_reader(reader, 64).unwrap(), FileKind::Rar);
    }

    #[test]
    fn test_detect_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(detect_file_kind(dir.path().join("missing.bin"), 64).is_err());
    }
}
