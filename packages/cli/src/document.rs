use std::path::Path;

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Read a manuscript the way an editor would present it: UTF-8 with any
/// leading byte order mark removed.
pub fn read_document(path: &Path) -> std::io::Result<String> {
    let mut text = std::fs::read_to_string(path)?;
    if text.starts_with(BYTE_ORDER_MARK) {
        text.drain(..BYTE_ORDER_MARK.len_utf8());
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_bom_is_removed() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("chapter.txt");
        std::fs::write(&path, "\u{FEFF}// notes\n{hero}").unwrap();

        assert_eq!(read_document(&path).unwrap(), "// notes\n{hero}");
    }

    #[test]
    fn test_inner_bom_is_kept() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("chapter.txt");
        std::fs::write(&path, "a\u{FEFF}b").unwrap();

        assert_eq!(read_document(&path).unwrap(), "a\u{FEFF}b");
    }
}
