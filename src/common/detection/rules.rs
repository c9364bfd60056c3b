//! The ordered signature table.
//!
//! Rules are evaluated top to bottom and the first one whose probe matches
//! decides the result. Ordering is load-bearing: EPUB has to sit in front of
//! the generic ZIP header, and the ISO-BMFF brand rules rely on the 3GP rule
//! having been tried already.
//!
//! The table is deliberately flat. A rule is just a [`Probe`] and the
//! [`FileKind`] it yields; there is no per-format behaviour beyond that.

use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

use super::types::FileKind;
use super::utils::{
    FTYP_BOX, PDF_SIGNATURE, RIFF_SIGNATURE, ZIP_SIGNATURE, bytes_at, bytes_at_ignore_ascii_case,
    find_in_buffer, signature_matches, slice_at,
};

/// Number of leading bytes searched for an `<svg` tag.
pub const SVG_SAMPLE_LEN: usize = 100;

/// Number of leading bytes that must be printable for the text fallback.
pub const TEXT_SAMPLE_LEN: usize = 512;

/// Offset of the `ustar` magic in a POSIX tar header.
pub const TAR_MAGIC_OFFSET: usize = 257;

/// Offset of the `CD001` identifier in the first ISO 9660 volume descriptor.
pub const ISO_MAGIC_OFFSET: usize = 32769;

/// Shortest buffer the ISO 9660 probe will look at.
pub const ISO_MIN_LEN: usize = ISO_MAGIC_OFFSET + 6;

/// Marker written by the stored `mimetype` entry at the head of every EPUB.
pub const EPUB_MIMETYPE_MARKER: &[u8] = b"mimetypeapplication/epub+zip";

// Case-insensitive so that `<SVG` in hand-written files still counts
static SVG_TAG: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(["<svg"])
        .expect("Failed to build SVG tag matcher")
});

/// A predicate over the raw file head.
#[derive(Debug, Clone, Copy)]
pub enum Probe {
    /// Buffer starts with these bytes.
    Prefix(&'static [u8]),
    /// These bytes appear at `offset`.
    At {
        offset: usize,
        bytes: &'static [u8],
    },
    /// These bytes appear at `offset`, ignoring ASCII case.
    AtIgnoreCase {
        offset: usize,
        bytes: &'static [u8],
    },
    /// Buffer holds at least this many bytes.
    MinLen(usize),
    /// Bytes appear anywhere in the buffer.
    Contains(&'static [u8]),
    /// Every inner probe matches.
    All(&'static [Probe]),
    /// Structural check that doesn't fit the simple shapes above.
    Custom(fn(&[u8]) -> bool),
}

impl Probe {
    /// Evaluate the probe. Never panics, whatever the buffer length.
    pub fn matches(&self, data: &[u8]) -> bool {
        match *self {
            Probe::Prefix(signature) => signature_matches(data, signature),
            Probe::At { offset, bytes } => bytes_at(data, offset, bytes),
            Probe::AtIgnoreCase { offset, bytes } => {
                bytes_at_ignore_ascii_case(data, offset, bytes)
            },
            Probe::MinLen(len) => data.len() >= len,
            Probe::Contains(needle) => find_in_buffer(data, needle),
            Probe::All(probes) => probes.iter().all(|probe| probe.matches(data)),
            Probe::Custom(check) => check(data),
        }
    }
}

/// One row of the signature table.
#[derive(Debug, Clone, Copy)]
pub struct SignatureRule {
    /// Short human-readable name, used in diagnostics.
    pub name: &'static str,
    /// What a match means.
    pub kind: FileKind,
    /// When the rule fires.
    pub probe: Probe,
}

impl SignatureRule {
    const fn new(name: &'static str, kind: FileKind, probe: Probe) -> Self {
        Self { name, kind, probe }
    }
}

const RIFF_WEBP: Probe = Probe::All(&[
    Probe::Prefix(RIFF_SIGNATURE),
    Probe::At { offset: 8, bytes: b"WEBP" },
]);
const RIFF_AVI: Probe = Probe::All(&[
    Probe::Prefix(RIFF_SIGNATURE),
    Probe::At { offset: 8, bytes: b"AVI " },
]);
const RIFF_WAVE: Probe = Probe::All(&[
    Probe::Prefix(RIFF_SIGNATURE),
    Probe::At { offset: 8, bytes: b"WAVE" },
]);

/// The signature table, in priority order.
pub static SIGNATURE_RULES: &[SignatureRule] = &[
    // Images
    SignatureRule::new("jpeg", FileKind::Jpg, Probe::Prefix(&[0xFF, 0xD8, 0xFF])),
    SignatureRule::new("png", FileKind::Png, Probe::Prefix(&[0x89, 0x50, 0x4E, 0x47])),
    SignatureRule::new("gif", FileKind::Gif, Probe::Prefix(b"GIF8")),
    SignatureRule::new("bmp", FileKind::Bmp, Probe::Prefix(b"BM")),
    SignatureRule::new("tiff-le", FileKind::Tiff, Probe::Prefix(&[0x49, 0x49, 0x2A, 0x00])),
    SignatureRule::new("tiff-be", FileKind::Tiff, Probe::Prefix(&[0x4D, 0x4D, 0x00, 0x2A])),
    SignatureRule::new("ico", FileKind::Ico, Probe::Prefix(&[0x00, 0x00, 0x01, 0x00])),
    SignatureRule::new("cur", FileKind::Ico, Probe::Prefix(&[0x00, 0x00, 0x02, 0x00])),
    SignatureRule::new("riff-webp", FileKind::Webp, RIFF_WEBP),
    // Documents
    SignatureRule::new("pdf", FileKind::Pdf, Probe::Prefix(PDF_SIGNATURE)),
    SignatureRule::new("ole2", FileKind::Doc, Probe::Prefix(&[0xD0, 0xCF, 0x11, 0xE0])),
    SignatureRule::new("wordperfect", FileKind::Wpd, Probe::Prefix(&[0xFF, 0x57, 0x50, 0x43])),
    SignatureRule::new(
        "epub",
        FileKind::Epub,
        Probe::All(&[Probe::Prefix(ZIP_SIGNATURE), Probe::Contains(EPUB_MIMETYPE_MARKER)]),
    ),
    SignatureRule::new("zip", FileKind::ZipBased, Probe::Prefix(ZIP_SIGNATURE)),
    // Archives
    SignatureRule::new("rar", FileKind::Rar, Probe::Prefix(b"Rar!")),
    SignatureRule::new("gzip", FileKind::Gz, Probe::Prefix(&[0x1F, 0x8B, 0x08])),
    SignatureRule::new("deb", FileKind::Deb, Probe::Prefix(b"!<arch>\n")),
    SignatureRule::new(
        "ustar",
        FileKind::Tar,
        Probe::At {
            offset: TAR_MAGIC_OFFSET,
            bytes: b"ustar",
        },
    ),
    SignatureRule::new(
        "iso9660",
        FileKind::Iso,
        Probe::All(&[
            Probe::MinLen(ISO_MIN_LEN),
            Probe::At {
                offset: ISO_MAGIC_OFFSET,
                bytes: b"CD001",
            },
        ]),
    ),
    SignatureRule::new("svg", FileKind::Svg, Probe::Custom(has_svg_tag)),
    // Video
    SignatureRule::new(
        "asf",
        FileKind::Wmv,
        Probe::Prefix(&[0x30, 0x26, 0xB2, 0x75, 0x8E, 0x66, 0xCF, 0x11]),
    ),
    SignatureRule::new("ebml", FileKind::Webm, Probe::Prefix(&[0x1A, 0x45, 0xDF, 0xA3])),
    SignatureRule::new("riff-avi", FileKind::Avi, RIFF_AVI),
    SignatureRule::new("riff-wave", FileKind::Wav, RIFF_WAVE),
    SignatureRule::new(
        "3gp",
        FileKind::ThreeGp,
        Probe::AtIgnoreCase {
            offset: 4,
            bytes: b"ftyp3gp",
        },
    ),
    SignatureRule::new(
        "3g2",
        FileKind::ThreeGp,
        Probe::AtIgnoreCase {
            offset: 4,
            bytes: b"ftyp3g2",
        },
    ),
    // Audio
    SignatureRule::new("id3", FileKind::Mp3, Probe::Prefix(b"ID3")),
    SignatureRule::new("mpeg1-layer3", FileKind::Mp3, Probe::Prefix(&[0xFF, 0xFB])),
    SignatureRule::new("ogg", FileKind::Ogg, Probe::Prefix(b"OggS")),
    // Everything else
    SignatureRule::new(
        "7z",
        FileKind::SevenZip,
        Probe::Prefix(&[0x37, 0x7A, 0xBC, 0xAF, 0x27, 0x1C]),
    ),
    SignatureRule::new("pe", FileKind::Exe, Probe::Prefix(b"MZ")),
    SignatureRule::new("sqlite", FileKind::Sqlite, Probe::Prefix(b"SQLite forma")),
    SignatureRule::new("mdb", FileKind::Mdb, Probe::Prefix(&[0x00, 0x01, 0x00, 0x00])),
    SignatureRule::new(
        "mobi",
        FileKind::Mobi,
        Probe::All(&[
            Probe::MinLen(69),
            Probe::At {
                offset: 60,
                bytes: b"BOOKMOBI",
            },
        ]),
    ),
    SignatureRule::new("psd", FileKind::Psd, Probe::Prefix(b"8BPS")),
    SignatureRule::new("ai-eps", FileKind::Ai, Probe::Prefix(b"%!PS")),
    // Shadowed by the "pdf" rule above; PDF-based Illustrator files report as pdf
    SignatureRule::new("ai-pdf", FileKind::Ai, Probe::Prefix(PDF_SIGNATURE)),
    SignatureRule::new("indd", FileKind::Indd, Probe::Prefix(&[0x06, 0x06, 0xED, 0xF5])),
    // ISO base media
    SignatureRule::new("bmff-mp4", FileKind::Mp4, Probe::Custom(is_mp4_brand)),
    SignatureRule::new("bmff-m4a", FileKind::M4a, Probe::Custom(is_m4a_brand)),
    SignatureRule::new("bmff-qt", FileKind::Mov, Probe::Custom(is_quicktime_brand)),
    SignatureRule::new("bmff-heic", FileKind::Heic, Probe::Custom(is_heic_brand)),
    // Text fallback
    SignatureRule::new("printable-text", FileKind::Txt, Probe::Custom(is_printable_text)),
];

/// Find the first rule matching `bytes`.
pub fn matching_rule(bytes: &[u8]) -> Option<&'static SignatureRule> {
    SIGNATURE_RULES.iter().find(|rule| rule.probe.matches(bytes))
}

/// Run the signature table over a file head.
///
/// Returns [`FileKind::ZipBased`] for anything with a ZIP local header that is
/// not an EPUB; use [`refine_zip_kind`](super::container::refine_zip_kind) or
/// [`detect_file_kind_from_bytes`](super::detect_file_kind_from_bytes) to
/// resolve it.
///
/// # Examples
///
/// ```rust
/// use extguard::{FileKind, sniff_signature};
///
/// assert_eq!(sniff_signature(b"\x89PNG\r\n\x1a\n"), FileKind::Png);
/// assert_eq!(sniff_signature(b"PK\x03\x04"), FileKind::ZipBased);
/// assert_eq!(sniff_signature(&[]), FileKind::Unknown);
/// ```
pub fn sniff_signature(bytes: &[u8]) -> FileKind {
    match matching_rule(bytes) {
        Some(rule) => {
            tracing::trace!(rule = rule.name, kind = %rule.kind, "signature matched");
            rule.kind
        },
        None => FileKind::Unknown,
    }
}

/// Brand of an ISO-BMFF file, if bytes 4..8 hold the `ftyp` box type.
fn ftyp_brand(data: &[u8]) -> Option<&[u8]> {
    if !bytes_at(data, 4, FTYP_BOX) {
        return None;
    }
    slice_at(data, 8, 4)
}

fn trimmed_brand_in(data: &[u8], brands: &[&[u8]]) -> bool {
    ftyp_brand(data).is_some_and(|brand| brands.contains(&brand.trim_ascii()))
}

fn is_mp4_brand(data: &[u8]) -> bool {
    trimmed_brand_in(data, &[b"mp42", b"isom", b"iso2", b"avc1"])
}

fn is_m4a_brand(data: &[u8]) -> bool {
    trimmed_brand_in(data, &[b"M4A", b"M4B", b"mp71"])
}

fn is_quicktime_brand(data: &[u8]) -> bool {
    trimmed_brand_in(data, &[b"qt"])
}

fn is_heic_brand(data: &[u8]) -> bool {
    const HEIF_BRANDS: [&[u8; 4]; 4] = [b"heic", b"heix", b"mif1", b"msf1"];
    ftyp_brand(data)
        .is_some_and(|brand| HEIF_BRANDS.iter().any(|known| brand.eq_ignore_ascii_case(*known)))
}

fn has_svg_tag(data: &[u8]) -> bool {
    SVG_TAG.is_match(&data[..data.len().min(SVG_SAMPLE_LEN)])
}

/// Every byte of the (non-empty) sample is printable ASCII or CR/LF/TAB.
///
/// Any byte above 0x7F fails, which also covers sequences that are not valid
/// UTF-8.
fn is_printable_text(data: &[u8]) -> bool {
    let sample = &data[..data.len().min(TEXT_SAMPLE_LEN)];
    !sample.is_empty()
        && sample
            .iter()
            .all(|&b| matches!(b, 0x20..=0x7E | b'\r' | b'\n' | b'\t'))
}
