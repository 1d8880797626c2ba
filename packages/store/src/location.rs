use std::path::{Path, PathBuf};

/// Word list location used when nothing is configured
pub const DEFAULT_WORD_LIST_PATH: &str = ".wordsmith/words.json";

/// Resolve the configured word list path against a project root.
///
/// Absolute paths are used as-is, relative ones are joined onto the root,
/// and an unset or blank setting falls back to [`DEFAULT_WORD_LIST_PATH`].
pub fn resolve_word_list_path(project_root: &Path, configured: Option<&str>) -> PathBuf {
    let configured = configured.map(str::trim).filter(|p| !p.is_empty());

    match configured {
        Some(path) if Path::new(path).is_absolute() => PathBuf::from(path),
        Some(path) => project_root.join(path),
        None => project_root.join(DEFAULT_WORD_LIST_PATH),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_location() {
        assert_eq!(
            resolve_word_list_path(Path::new("/novel"), None),
            PathBuf::from("/novel/.wordsmith/words.json")
        );
        assert_eq!(
            resolve_word_list_path(Path::new("/novel"), Some("  ")),
            PathBuf::from("/novel/.wordsmith/words.json")
        );
    }

    #[test]
    fn test_relative_location() {
        assert_eq!(
            resolve_word_list_path(Path::new("/novel"), Some("notes/cast.json")),
            PathBuf::from("/novel/notes/cast.json")
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_absolute_location() {
        assert_eq!(
            resolve_word_list_path(Path::new("/novel"), Some("/shared/cast.json")),
            PathBuf::from("/shared/cast.json")
        );
    }
}
