//! # Wordsmith Scanner
//!
//! Lexical scans over plain prose. Two independent single-pass scans run
//! over the same text:
//!
//! - **placeholders**: `{key}`, where the key is the shortest non-empty run
//!   without braces. The first `}` closes a candidate and a second `{`
//!   restarts it, so braces never nest.
//! - **comments**: the first `//` on a line up to the end of that line.
//!
//! The scans do not see each other. `{a//b}` is a placeholder with key
//! `a//b` for the placeholder scan and holds a comment starting at `//` for
//! the comment scan. Quotes are not special: `//` inside dialogue starts a
//! comment.
//!
//! Offsets are character offsets. [`LineIndex`] converts them to
//! line/column positions.

pub mod comment;
pub mod line_index;
pub mod placeholder;

pub use comment::{comment_start, is_comment_only_line, scan_comments, CommentMatch, CommentScanner, CommentSpan};
pub use line_index::{LineIndex, PositionEncoder};
pub use placeholder::{scan_placeholders, PlaceholderMatch, PlaceholderOccurrence, PlaceholderScanner};
