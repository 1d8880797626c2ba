use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Inserted before the extension of an exported file
pub const EXPORT_SUFFIX: &str = "_transformed";

/// Sibling path an export of `source` is written to.
///
/// `chapter-01.md` becomes `chapter-01_transformed.md`. Files without an
/// extension get the suffix appended.
pub fn export_path(source: &Path) -> PathBuf {
    let Some(stem) = source.file_stem() else {
        return source.with_file_name(EXPORT_SUFFIX);
    };

    let mut file_name = OsString::from(stem);
    file_name.push(EXPORT_SUFFIX);
    if let Some(extension) = source.extension() {
        file_name.push(".");
        file_name.push(extension);
    }

    source.with_file_name(file_name)
}
