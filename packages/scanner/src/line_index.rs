use wordsmith_common::{Position, Range, Span};

/// Converts character offsets into line/column positions.
///
/// Hosts address documents by line and column, while scans produce
/// character offsets. Hosts with their own position service implement this
/// directly; [`LineIndex`] covers everything else.
pub trait PositionEncoder {
    fn position_at(&self, offset: usize) -> Position;

    fn range_of(&self, span: Span) -> Range {
        Range::new(self.position_at(span.start), self.position_at(span.end))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LineBounds {
    /// First character of the line
    start: usize,
    /// One past the last character before the terminator
    end: usize,
}

/// Line table over a document snapshot.
///
/// Recognises `\n`, `\r\n` and a lone `\r` as line terminators.
#[derive(Debug, Clone)]
pub struct LineIndex {
    lines: Vec<LineBounds>,
    len_chars: usize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut lines = Vec::new();
        let mut line_start = 0;
        let mut offset = 0;
        let mut chars = text.chars().peekable();

        while let Some(ch) = chars.next() {
            match ch {
                '\n' => {
                    lines.push(LineBounds { start: line_start, end: offset });
                    line_start = offset + 1;
                }
                '\r' => {
                    lines.push(LineBounds { start: line_start, end: offset });
                    if chars.peek() == Some(&'\n') {
                        chars.next();
                        offset += 1;
                    }
                    line_start = offset + 1;
                }
                _ => {}
            }
            offset += 1;
        }

        lines.push(LineBounds { start: line_start, end: offset });

        Self {
            lines,
            len_chars: offset,
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn len_chars(&self) -> usize {
        self.len_chars
    }

    /// Character offset for a position, clamped to the document.
    ///
    /// Lines past the end clamp to the end of the last line; columns past
    /// the end of a line clamp to the line's end.
    pub fn offset_at(&self, position: Position) -> usize {
        let Some(bounds) = self.lines.get(position.line) else {
            return self.len_chars;
        };
        (bounds.start + position.column).min(bounds.end)
    }

    fn line_of(&self, offset: usize) -> usize {
        // Last line whose start is at or before the offset
        self.lines
            .partition_point(|bounds| bounds.start <= offset)
            .saturating_sub(1)
    }
}

impl PositionEncoder for LineIndex {
    fn position_at(&self, offset: usize) -> Position {
        let offset = offset.min(self.len_chars);
        let line = self.line_of(offset);
        let bounds = self.lines[line];
        Position::new(line, offset.min(bounds.end) - bounds.start)
    }
}
