use std::borrow::Cow;
use wordsmith_common::WordMap;
use wordsmith_scanner::{comment_start, is_comment_only_line, PlaceholderScanner};

/// Transform a whole document into exported text.
///
/// Lines are split on `\n` or `\r\n` and rejoined with `\n`. Comment-only
/// lines are dropped; every other line goes through [`transform_line`].
/// Blank lines survive as blank lines.
pub fn transform(text: &str, words: &WordMap) -> String {
    let mut output = String::with_capacity(text.len());
    let mut first = true;

    for line in text.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);

        if is_comment_only_line(line) {
            continue;
        }

        if !first {
            output.push('\n');
        }
        first = false;

        output.push_str(&transform_line(line, words));
    }

    output
}

/// Substitute placeholders, then strip a trailing comment and trailing
/// whitespace from a single line.
///
/// The comment is located after substitution, so a value containing `//`
/// truncates the line there.
pub fn transform_line(line: &str, words: &WordMap) -> String {
    let substituted = substitute(line, words);

    let without_comment = match comment_start(&substituted) {
        Some(start) => &substituted[..start],
        None => &substituted[..],
    };

    without_comment.trim_end().to_string()
}

/// Replace every resolved `{key}` with its value.
///
/// Unresolved placeholders stay as literal text. Substituted values are not
/// scanned again.
pub fn substitute<'a>(text: &'a str, words: &WordMap) -> Cow<'a, str> {
    let mut output: Option<String> = None;
    let mut copied_up_to = 0;

    for placeholder in PlaceholderScanner::new(text) {
        let Some(value) = words.get(placeholder.key) else {
            continue;
        };

        let buffer = output.get_or_insert_with(|| String::with_capacity(text.len()));
        buffer.push_str(&text[copied_up_to..placeholder.bytes.start]);
        buffer.push_str(value);
        copied_up_to = placeholder.bytes.end;
    }

    match output {
        Some(mut buffer) => {
            buffer.push_str(&text[copied_up_to..]);
            Cow::Owned(buffer)
        }
        None => Cow::Borrowed(text),
    }
}

/// Character count of the exported text
pub fn transformed_char_count(text: &str, words: &WordMap) -> usize {
    transform(text, words).chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(pairs: &[(&str, &str)]) -> WordMap {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_unresolved_passthrough() {
        assert_eq!(transform("see {missing}.", &WordMap::new()), "see {missing}.");
    }

    #[test]
    fn test_comment_only_line_removed() {
        assert_eq!(transform("a\n// note\nb", &WordMap::new()), "a\nb");
        assert_eq!(transform("a\n    // indented\nb", &WordMap::new()), "a\nb");
    }

    #[test]
    fn test_trailing_comment_stripped() {
        let map = words(&[("x", "Y")]);
        assert_eq!(transform("value {x} // explain", &map), "value Y");
    }

    #[test]
    fn test_placeholder_round_trip() {
        let map = words(&[("k", "Lady Morwen of the Vale  ")]);
        assert_eq!(transform("{k}", &map), "Lady Morwen of the Vale");
    }

    #[test]
    fn test_blank_lines_preserved() {
        let text = "Para one.\n\nPara two.\n";
        assert_eq!(transform(text, &WordMap::new()), "Para one.\n\nPara two.\n");
    }

    #[test]
    fn test_line_emptied_by_comment_is_kept_blank() {
        // Comment-only detection looks at the raw line, not the substituted one
        let map = words(&[("gap", "")]);
        assert_eq!(transform("a\n{gap}// gone\nb", &map), "a\n\nb");
    }

    #[test]
    fn test_crlf_normalized() {
        let map = words(&[("n", "Nell")]);
        assert_eq!(transform("{n} ran.\r\n// cut\r\nShe stopped.  \r\n", &map), "Nell ran.\nShe stopped.\n");
    }

    #[test]
    fn test_substitution_is_not_recursive() {
        let map = words(&[("a", "{b}"), ("b", "never")]);
        assert_eq!(transform("{a}", &map), "{b}");
    }

    #[test]
    fn test_mixed_resolved_and_unresolved() {
        let map = words(&[("hero", "Aria")]);
        assert_eq!(transform("{hero} met {stranger}.", &map), "Aria met {stranger}.");
    }

    #[test]
    fn test_value_containing_comment_marker_truncates() {
        let map = words(&[("url", "http://example.com")]);
        assert_eq!(transform("see {url}", &map), "see http:");
    }

    #[test]
    fn test_idempotent_without_comments() {
        let map = words(&[("hero", "Aria"), ("city", "Calder")]);
        let text = "{hero} walked through {city}.\n\n{city} slept.";

        let once = transform(text, &map);
        let twice = transform(&once, &map);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_substitute_borrows_when_nothing_resolves() {
        let map = words(&[("x", "y")]);
        assert!(matches!(substitute("no {placeholders} here", &map), Cow::Borrowed(_)));
        assert_eq!(substitute("{x}{x}", &map), "yy");
    }

    #[test]
    fn test_transformed_char_count() {
        let map = words(&[("hero", "Ærin")]);
        assert_eq!(transformed_char_count("{hero} // note", &map), 4);
        assert_eq!(transformed_char_count("", &map), 0);
    }
}
