//! Extension extraction from client-supplied file names.

/// Lowercased text after the last `.` in `file_name`, or `""` when there is
/// no dot.
///
/// The name is treated as an opaque string: directory separators get no
/// special meaning, so strip paths before calling if that matters.
///
/// # Examples
///
/// ```rust
/// use extguard::file_extension;
///
/// assert_eq!(file_extension("Archive.TAR.GZ"), "gz");
/// assert_eq!(file_extension("README"), "");
/// assert_eq!(file_extension("trailing."), "");
/// ```
pub fn file_extension(file_name: &str) -> String {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default()
}
