use serde::{Deserialize, Serialize};
use std::iter::Peekable;
use std::ops::Range;
use std::str::CharIndices;
use wordsmith_common::Span;

/// A `//` comment running to the end of its line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentSpan {
    pub span: Span,
}

/// Borrowed comment match carrying both byte and character ranges
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentMatch<'a> {
    /// Comment text, starting with `//`, without the line terminator
    pub text: &'a str,
    pub bytes: Range<usize>,
    pub span: Span,
}

/// Single-pass comment scanner.
///
/// A comment opens at the first `//` of a line and closes before the next
/// `\r` or `\n`. Everything inside a comment, including further `//`, belongs
/// to it.
pub struct CommentScanner<'a> {
    text: &'a str,
    chars: Peekable<CharIndices<'a>>,
    char_pos: usize,
}

impl<'a> CommentScanner<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            chars: text.char_indices().peekable(),
            char_pos: 0,
        }
    }

    fn advance(&mut self) -> Option<(usize, char)> {
        let next = self.chars.next();
        if next.is_some() {
            self.char_pos += 1;
        }
        next
    }
}

impl<'a> Iterator for CommentScanner<'a> {
    type Item = CommentMatch<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        // Find the opening `//`
        let (start_byte, start_char) = loop {
            let char_offset = self.char_pos;
            let (byte, ch) = self.advance()?;
            if ch == '/' && matches!(self.chars.peek(), Some((_, '/'))) {
                self.advance();
                break (byte, char_offset);
            }
        };

        // Run to the end of the line
        let mut end_byte = self.text.len();
        while let Some(&(byte, ch)) = self.chars.peek() {
            if ch == '\n' || ch == '\r' {
                end_byte = byte;
                break;
            }
            self.advance();
        }

        Some(CommentMatch {
            text: &self.text[start_byte..end_byte],
            bytes: start_byte..end_byte,
            span: Span::new(start_char, self.char_pos),
        })
    }
}

/// Locate every comment in `text`
pub fn scan_comments(text: &str) -> Vec<CommentSpan> {
    CommentScanner::new(text)
        .map(|m| CommentSpan { span: m.span })
        .collect()
}

/// Byte offset of the first `//` in a single line
pub fn comment_start(line: &str) -> Option<usize> {
    line.find("//")
}

/// A line holding nothing but optional leading whitespace and a comment
pub fn is_comment_only_line(line: &str) -> bool {
    line.trim_start().starts_with("//")
}
