//! Filename decomposition.

use std::path::PathBuf;

use compact_str::CompactString;

/// Split a base filename into `(stem, extension)`.
///
/// The extension is everything from the last `.` onward, empty when the
/// name contains no dot. A leading-dot name like `.bashrc` therefore has
/// an empty stem and `.bashrc` as its extension.
pub fn split_name(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) => (&name[..idx], &name[idx..]),
        None => (name, ""),
    }
}

/// A single file under consideration, exactly as supplied by the caller.
///
/// Only the final path segment participates in matching; the full path is
/// carried through so groups can refer back to real files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Full path as given (absolute or relative).
    pub path: PathBuf,
    /// Final path segment.
    pub file_name: CompactString,
}

impl FileEntry {
    /// Build an entry from a caller-supplied path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .map(|n| CompactString::from(n.to_string_lossy().as_ref()))
            .unwrap_or_default();
        Self { path, file_name }
    }

    /// Base filename with the final extension removed.
    pub fn stem(&self) -> &str {
        split_name(&self.file_name).0
    }

    /// Extension from the last `.` onward (empty if none).
    pub fn extension(&self) -> &str {
        split_name(&self.file_name).1
    }
}
