//! # Wordsmith Transform
//!
//! Turns an annotated manuscript into final plain text: comment-only lines
//! disappear, placeholders are substituted, trailing comments and trailing
//! whitespace are stripped, and line endings are normalized to `\n`.

pub mod export;
pub mod transform;

pub use export::{export_path, EXPORT_SUFFIX};
pub use transform::{substitute, transform, transform_line, transformed_char_count};
