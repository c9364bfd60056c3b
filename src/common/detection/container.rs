//! ZIP container refinement (OOXML documents vs. plain archives).
//!
//! Only member names are looked for; the archive is never opened. Entry names
//! are stored uncompressed in both local headers and the central directory,
//! so a substring search over the raw bytes is enough.

use memchr::memmem;

use crate::common::detection::FileKind;

/// Every OOXML package carries this part.
pub const CONTENT_TYPES_PART: &[u8] = b"[Content_Types].xml";

/// Main part of each OOXML flavour, checked in order.
pub const OOXML_MAIN_PARTS: [(&[u8], FileKind); 3] = [
    (b"word/document.xml", FileKind::Docx),
    (b"xl/workbook.xml", FileKind::Xlsx),
    (b"ppt/presentation.xml", FileKind::Pptx),
];

/// Refine a buffer that starts with a ZIP local file header.
///
/// Without a `[Content_Types].xml` part the buffer is a plain ZIP. With one,
/// the first matching main part decides between docx, xlsx and pptx; an OPC
/// package of any other flavour is still just a ZIP.
///
/// # Examples
///
/// ```rust
/// use extguard::{FileKind, refine_zip_kind};
///
/// let data = b"PK\x03\x04....[Content_Types].xml....xl/workbook.xml";
/// assert_eq!(refine_zip_kind(data), FileKind::Xlsx);
/// assert_eq!(refine_zip_kind(b"PK\x03\x04....readme.txt"), FileKind::Zip);
/// ```
pub fn refine_zip_kind(bytes: &[u8]) -> FileKind {
    if memmem::find(bytes, CONTENT_TYPES_PART).is_none() {
        return FileKind::Zip;
    }

    OOXML_MAIN_PARTS
        .iter()
        .find(|(part, _)| memmem::find(bytes, part).is_some())
        .map_or(FileKind::Zip, |&(_, kind)| kind)
}
