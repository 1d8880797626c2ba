use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::str::CharIndices;
use wordsmith_common::Span;

/// A `{key}` occurrence found in a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceholderOccurrence {
    /// Text between the braces, verbatim
    pub key: String,

    /// Character span covering the braces
    pub span: Span,
}

/// Borrowed placeholder match carrying both byte and character ranges
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderMatch<'a> {
    pub key: &'a str,

    /// Byte range into the scanned text, braces included
    pub bytes: Range<usize>,

    /// Character span, braces included
    pub span: Span,
}

impl PlaceholderMatch<'_> {
    pub fn to_occurrence(&self) -> PlaceholderOccurrence {
        PlaceholderOccurrence {
            key: self.key.to_string(),
            span: self.span,
        }
    }
}

/// Single-pass placeholder scanner.
///
/// Each `{` opens a candidate, replacing any candidate already open. A `}`
/// closes the open candidate if at least one character sits between the
/// braces. Matches come out in ascending order and never overlap.
pub struct PlaceholderScanner<'a> {
    text: &'a str,
    chars: CharIndices<'a>,
    char_pos: usize,
}

impl<'a> PlaceholderScanner<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            chars: text.char_indices(),
            char_pos: 0,
        }
    }
}

impl<'a> Iterator for PlaceholderScanner<'a> {
    type Item = PlaceholderMatch<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        // (byte offset, char offset) of the open brace
        let mut open: Option<(usize, usize)> = None;

        while let Some((byte, ch)) = self.chars.next() {
            let char_offset = self.char_pos;
            self.char_pos += 1;

            match ch {
                '{' => open = Some((byte, char_offset)),
                '}' => {
                    if let Some((open_byte, open_char)) = open.take() {
                        if char_offset > open_char + 1 {
                            return Some(PlaceholderMatch {
                                key: &self.text[open_byte + 1..byte],
                                bytes: open_byte..byte + 1,
                                span: Span::new(open_char, char_offset + 1),
                            });
                        }
                    }
                }
                _ => {}
            }
        }

        None
    }
}

/// Locate every placeholder in `text`
pub fn scan_placeholders(text: &str) -> Vec<PlaceholderOccurrence> {
    PlaceholderScanner::new(text)
        .map(|m| m.to_occurrence())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(text: &str) -> Vec<String> {
        scan_placeholders(text).into_iter().map(|o| o.key).collect()
    }

    #[test]
    fn test_adjacent_placeholders_are_not_merged() {
        let found = scan_placeholders("{a}{b}");

        assert_eq!(found.len(), 2);
        assert_eq!(found[0].key, "a");
        assert_eq!(found[0].span, Span::new(0, 3));
        assert_eq!(found[1].key, "b");
        assert_eq!(found[1].span, Span::new(3, 6));
    }

    #[test]
    fn test_no_placeholders() {
        assert!(scan_placeholders("").is_empty());
        assert!(scan_placeholders("plain prose, nothing else").is_empty());
    }

    #[test]
    fn test_empty_braces_are_not_placeholders() {
        assert!(scan_placeholders("{}").is_empty());
        assert_eq!(keys("{}{x}"), vec!["x"]);
    }

    #[test]
    fn test_second_open_brace_restarts_candidate() {
        let found = scan_placeholders("{{a}");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].key, "a");
        assert_eq!(found[0].span, Span::new(1, 4));

        assert_eq!(keys("{outer {inner} tail}"), vec!["inner"]);
    }

    #[test]
    fn test_unbalanced_braces() {
        assert!(scan_placeholders("{never closed").is_empty());
        assert!(scan_placeholders("stray } brace").is_empty());
        assert_eq!(keys("a}b{c}d}"), vec!["c"]);
    }

    #[test]
    fn test_key_is_verbatim() {
        assert_eq!(keys("{ spaced key }"), vec![" spaced key "]);
        assert_eq!(keys("{a//b}"), vec!["a//b"]);
        assert_eq!(keys("{line\nbreak}"), vec!["line\nbreak"]);
    }

    #[test]
    fn test_offsets_count_characters_not_bytes() {
        let text = "héros {nom} ici";
        let found: Vec<PlaceholderMatch<'_>> = PlaceholderScanner::new(text).collect();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].span, Span::new(6, 11));
        assert_eq!(found[0].bytes, 7..12);
        assert_eq!(&text[found[0].bytes.clone()], "{nom}");
    }

    #[test]
    fn test_multibyte_keys() {
        let found = scan_placeholders("「{主人公}」は言った");

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].key, "主人公");
        assert_eq!(found[0].span, Span::new(1, 6));
    }

    #[test]
    fn test_scans_are_independent() {
        let text = "{a} and {b}";
        assert_eq!(scan_placeholders(text), scan_placeholders(text));
    }
}
