use std::str::FromStr;
use thiserror::Error;
use wordsmith_common::{Position, Span};
use wordsmith_scanner::LineIndex;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CursorParseError {
    #[error("expected LINE:COL or LINE:COL-LINE:COL, got {0:?}")]
    Format(String),

    #[error("lines and columns start at 1, got {0:?}")]
    Zero(String),
}

/// A caret or selection given on the command line, 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorArg {
    pub anchor: Position,
    pub active: Position,
}

impl CursorArg {
    /// Resolve against the current text. Positions past the end clamp.
    pub fn to_span(&self, index: &LineIndex) -> Span {
        let anchor = index.offset_at(self.anchor);
        let active = index.offset_at(self.active);
        Span::new(anchor.min(active), anchor.max(active))
    }
}

fn parse_position(input: &str, whole: &str) -> Result<Position, CursorParseError> {
    let (line, column) = input
        .split_once(':')
        .ok_or_else(|| CursorParseError::Format(whole.to_string()))?;

    let line: usize = line.trim().parse().map_err(|_| CursorParseError::Format(whole.to_string()))?;
    let column: usize = column.trim().parse().map_err(|_| CursorParseError::Format(whole.to_string()))?;

    if line == 0 || column == 0 {
        return Err(CursorParseError::Zero(whole.to_string()));
    }

    Ok(Position::new(line - 1, column - 1))
}

impl FromStr for CursorArg {
    type Err = CursorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('-') {
            Some((anchor, active)) => Ok(Self {
                anchor: parse_position(anchor, s)?,
                active: parse_position(active, s)?,
            }),
            None => {
                let position = parse_position(s, s)?;
                Ok(Self {
                    anchor: position,
                    active: position,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_caret() {
        let cursor: CursorArg = "2:5".parse().unwrap();
        assert_eq!(cursor.anchor, Position::new(1, 4));
        assert_eq!(cursor.active, Position::new(1, 4));
    }

    #[test]
    fn test_parse_selection() {
        let cursor: CursorArg = "1:1-3:2".parse().unwrap();
        assert_eq!(cursor.anchor, Position::new(0, 0));
        assert_eq!(cursor.active, Position::new(2, 1));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!("12".parse::<CursorArg>(), Err(CursorParseError::Format(_))));
        assert!(matches!("a:b".parse::<CursorArg>(), Err(CursorParseError::Format(_))));
        assert!(matches!("0:1".parse::<CursorArg>(), Err(CursorParseError::Zero(_))));
    }

    #[test]
    fn test_backwards_selection_is_normalized() {
        let index = LineIndex::new("abc\ndef");
        let cursor: CursorArg = "2:3-1:2".parse().unwrap();
        assert_eq!(cursor.to_span(&index), Span::new(1, 6));
    }
}
