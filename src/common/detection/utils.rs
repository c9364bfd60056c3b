//! Utility functions and constants for file format detection.
//!
//! Every helper treats a read past the end of the buffer as a non-match.

use memchr::memmem;

// Magic number signatures shared by more than one rule
pub const ZIP_SIGNATURE: &[u8] = &[0x50, 0x4B, 0x03, 0x04];
pub const RIFF_SIGNATURE: &[u8] = b"RIFF";
pub const PDF_SIGNATURE: &[u8] = b"%PDF";
pub const FTYP_BOX: &[u8] = b"ftyp";

/// Check if a byte slice starts with a given signature.
///
/// # Examples
///
/// ```rust
/// use extguard::common::detection::utils::signature_matches;
///
/// assert!(signature_matches(b"PK\x03\x04rest", b"PK\x03\x04"));
/// assert!(!signature_matches(b"PK", b"PK\x03\x04"));
/// ```
#[inline]
pub fn signature_matches(data: &[u8], signature: &[u8]) -> bool {
    data.starts_with(signature)
}

/// Borrow `len` bytes starting at `offset`, or `None` if the buffer is too short.
#[inline]
pub fn slice_at(data: &[u8], offset: usize, len: usize) -> Option<&[u8]> {
    let end = offset.checked_add(len)?;
    data.get(offset..end)
}

/// Check for an exact byte sequence at a fixed offset.
#[inline]
pub fn bytes_at(data: &[u8], offset: usize, expected: &[u8]) -> bool {
    slice_at(data, offset, expected.len()) == Some(expected)
}

/// Like [`bytes_at`], ignoring ASCII case.
#[inline]
pub fn bytes_at_ignore_ascii_case(data: &[u8], offset: usize, expected: &[u8]) -> bool {
    slice_at(data, offset, expected.len())
        .is_some_and(|window| window.eq_ignore_ascii_case(expected))
}

/// Find a pattern anywhere in a buffer.
#[inline]
pub fn find_in_buffer(buffer: &[u8], pattern: &[u8]) -> bool {
    memmem::find(buffer, pattern).is_some()
}
