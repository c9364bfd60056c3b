//! File kind enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Every format the signature table can report.
///
/// Each variant has a canonical lowercase tag (see [`FileKind::as_str`]) which
/// is what gets compared against file extensions and what appears in
/// serialized results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// JPEG image (`jpg`)
    Jpg,
    /// PNG image
    Png,
    /// GIF image
    Gif,
    /// Windows bitmap
    Bmp,
    /// TIFF image, either byte order
    Tiff,
    /// Windows icon or cursor
    Ico,
    /// WebP image (RIFF container)
    Webp,
    /// PDF document
    Pdf,
    /// OLE2 compound file (legacy Word, Excel, PowerPoint, ...)
    Doc,
    /// WordPerfect document
    Wpd,
    /// ZIP local file header that has not been looked into yet.
    ///
    /// Never returned by [`detect_file_kind_from_bytes`](super::detect_file_kind_from_bytes);
    /// only the raw signature pass produces it.
    ZipBased,
    /// Plain ZIP archive (or a ZIP-based format without Office markers)
    Zip,
    /// Word document (OOXML)
    Docx,
    /// Excel workbook (OOXML)
    Xlsx,
    /// PowerPoint presentation (OOXML)
    Pptx,
    /// EPUB e-book
    Epub,
    /// RAR archive
    Rar,
    /// GZIP stream
    Gz,
    /// Debian package (`ar` archive)
    Deb,
    /// POSIX tar archive
    Tar,
    /// ISO 9660 disc image
    Iso,
    /// SVG image
    Svg,
    /// Windows Media (ASF container)
    Wmv,
    /// WebM / Matroska (EBML)
    Webm,
    /// AVI video (RIFF container)
    Avi,
    /// WAV audio (RIFF container)
    Wav,
    /// 3GPP / 3GPP2 media
    ThreeGp,
    /// MP3 audio
    Mp3,
    /// Ogg container
    Ogg,
    /// 7-Zip archive
    SevenZip,
    /// Windows PE executable
    Exe,
    /// SQLite 3 database
    Sqlite,
    /// Access database
    Mdb,
    /// Mobipocket e-book
    Mobi,
    /// Photoshop document
    Psd,
    /// Adobe Illustrator artwork
    Ai,
    /// InDesign document
    Indd,
    /// MPEG-4 video
    Mp4,
    /// MPEG-4 audio
    M4a,
    /// QuickTime movie
    Mov,
    /// HEIC / HEIF image
    Heic,
    /// Printable ASCII text
    Txt,
    /// Nothing matched
    Unknown,
}

impl FileKind {
    /// Every kind, in declaration order.
    pub const ALL: [FileKind; 43] = [
        FileKind::Jpg,
        FileKind::Png,
        FileKind::Gif,
        FileKind::Bmp,
        FileKind::Tiff,
        FileKind::Ico,
        FileKind::Webp,
        FileKind::Pdf,
        FileKind::Doc,
        FileKind::Wpd,
        FileKind::ZipBased,
        FileKind::Zip,
        FileKind::Docx,
        FileKind::Xlsx,
        FileKind::Pptx,
        FileKind::Epub,
        FileKind::Rar,
        FileKind::Gz,
        FileKind::Deb,
        FileKind::Tar,
        FileKind::Iso,
        FileKind::Svg,
        FileKind::Wmv,
        FileKind::Webm,
        FileKind::Avi,
        FileKind::Wav,
        FileKind::ThreeGp,
        FileKind::Mp3,
        FileKind::Ogg,
        FileKind::SevenZip,
        FileKind::Exe,
        FileKind::Sqlite,
        FileKind::Mdb,
        FileKind::Mobi,
        FileKind::Psd,
        FileKind::Ai,
        FileKind::Indd,
        FileKind::Mp4,
        FileKind::M4a,
        FileKind::Mov,
        FileKind::Heic,
        FileKind::Txt,
        FileKind::Unknown,
    ];

    /// Canonical lowercase tag for this kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            FileKind::Jpg => "jpg",
            FileKind::Png => "png",
            FileKind::Gif => "gif",
            FileKind::Bmp => "bmp",
            FileKind::Tiff => "tiff",
            FileKind::Ico => "ico",
            FileKind::Webp => "webp",
            FileKind::Pdf => "pdf",
            FileKind::Doc => "doc",
            FileKind::Wpd => "wpd",
            FileKind::ZipBased => "zip-based",
            FileKind::Zip => "zip",
            FileKind::Docx => "docx",
            FileKind::Xlsx => "xlsx",
            FileKind::Pptx => "pptx",
            FileKind::Epub => "epub",
            FileKind::Rar => "rar",
            FileKind::Gz => "gz",
            FileKind::Deb => "deb",
            FileKind::Tar => "tar",
            FileKind::Iso => "iso",
            FileKind::Svg => "svg",
            FileKind::Wmv => "wmv",
            FileKind::Webm => "webm",
            FileKind::Avi => "avi",
            FileKind::Wav => "wav",
            FileKind::ThreeGp => "3gp",
            FileKind::Mp3 => "mp3",
            FileKind::Ogg => "ogg",
            FileKind::SevenZip => "7z",
            FileKind::Exe => "exe",
            FileKind::Sqlite => "sqlite",
            FileKind::Mdb => "mdb",
            FileKind::Mobi => "mobi",
            FileKind::Psd => "psd",
            FileKind::Ai => "ai",
            FileKind::Indd => "indd",
            FileKind::Mp4 => "mp4",
            FileKind::M4a => "m4a",
            FileKind::Mov => "mov",
            FileKind::Heic => "heic",
            FileKind::Txt => "txt",
            FileKind::Unknown => "unknown",
        }
    }

    /// Look up a kind by its canonical tag. Tags are case-sensitive.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.as_str() == tag)
    }

    /// Whether this is a ZIP-family result (including the unrefined one).
    #[inline]
    pub const fn is_zip_family(self) -> bool {
        matches!(
            self,
            FileKind::ZipBased
                | FileKind::Zip
                | FileKind::Docx
                | FileKind::Xlsx
                | FileKind::Pptx
                | FileKind::Epub
        )
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Returned by [`FileKind::from_str`] for tags no rule can produce.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown file kind tag: {0}")]
pub struct UnknownTag(pub String);

impl FromStr for FileKind {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| UnknownTag(s.to_string()))
    }
}

impl Serialize for FileKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FileKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        tag.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_are_unique_and_lowercase() {
        for (i, a) in FileKind::ALL.iter().enumerate() {
            assert_eq!(a.as_str(), a.as_str().to_lowercase());
            for b in &FileKind::ALL[i + 1..] {
                assert_ne!(a.as_str(), b.as_str(), "{a:?} and {b:?} share a tag");
            }
        }
    }

    #[test]
    fn test_from_tag() {
        for kind in FileKind::ALL {
            assert_eq!(FileKind::from_tag(kind.as_str()), Some(kind));
        }
        assert_eq!("3gp".parse::<FileKind>(), Ok(FileKind::ThreeGp));
        assert_eq!("7z".parse::<FileKind>(), Ok(FileKind::SevenZip));
        assert!("JPG".parse::<FileKind>().is_err());
        assert!("jpeg".parse::<FileKind>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(FileKind::ZipBased.to_string(), "zip-based");
        assert_eq!(FileKind::Heic.to_string(), "heic");
    }

    #[test]
    fn test_zip_family() {
        assert!(FileKind::ZipBased.is_zip_family());
        assert!(FileKind::Docx.is_zip_family());
        assert!(!FileKind::Rar.is_zip_family());
    }
}
