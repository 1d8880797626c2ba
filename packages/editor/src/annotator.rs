//! # Annotator
//!
//! Decides how every placeholder and comment in a document is rendered.
//!
//! - resolved, not touched by a selection: raw `{key}` hidden, value shown
//! - resolved, touched by a selection or caret: raw text shown for editing
//! - unresolved: left alone
//! - comments: always marked
//!
//! Annotation is a pure function of its inputs. Nothing is pushed to a host
//! until the whole [`RenderPlan`] exists.

use crate::host::{DecorationSet, MarkDecoration, SubstituteDecoration};
use serde::{Deserialize, Serialize};
use wordsmith_common::{Span, WordMap};
use wordsmith_scanner::{scan_comments, scan_placeholders, CommentSpan, PlaceholderOccurrence, PositionEncoder};

/// Hover content for a resolved placeholder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hover {
    pub key: String,
    pub value: String,
}

impl Hover {
    pub fn to_markdown(&self) -> String {
        format!("**Variable:** `{{{}}}`\n**Value:** `{}`", self.key, self.value)
    }
}

/// Placeholder rendered as its value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiddenPlaceholder {
    pub occurrence: PlaceholderOccurrence,
    pub substitute: String,
    pub hover: Hover,
}

/// Placeholder under the cursor, rendered raw
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusedPlaceholder {
    pub occurrence: PlaceholderOccurrence,
    pub hover: Hover,
}

/// Result of one annotation pass, in character offsets
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderPlan {
    pub resolved_hidden: Vec<HiddenPlaceholder>,
    pub resolved_focused: Vec<FocusedPlaceholder>,
    pub comments: Vec<CommentSpan>,
}

impl RenderPlan {
    pub fn is_empty(&self) -> bool {
        self.resolved_hidden.is_empty() && self.resolved_focused.is_empty() && self.comments.is_empty()
    }

    /// Express the plan in the host's line/column terms
    pub fn to_decorations(&self, encoder: &impl PositionEncoder) -> DecorationSet {
        DecorationSet {
            substituted: self
                .resolved_hidden
                .iter()
                .map(|hidden| SubstituteDecoration {
                    range: encoder.range_of(hidden.occurrence.span),
                    content: hidden.substitute.clone(),
                    hover: hidden.hover.to_markdown(),
                })
                .collect(),
            focused: self
                .resolved_focused
                .iter()
                .map(|focused| MarkDecoration {
                    range: encoder.range_of(focused.occurrence.span),
                    hover: Some(focused.hover.to_markdown()),
                })
                .collect(),
            comments: self
                .comments
                .iter()
                .map(|comment| MarkDecoration {
                    range: encoder.range_of(comment.span),
                    hover: None,
                })
                .collect(),
        }
    }
}

/// Classify scan results against the word map and current selections
pub fn annotate(
    occurrences: &[PlaceholderOccurrence],
    comments: &[CommentSpan],
    words: &WordMap,
    selections: &[Span],
) -> RenderPlan {
    let mut plan = RenderPlan {
        comments: comments.to_vec(),
        ..RenderPlan::default()
    };

    for occurrence in occurrences {
        let Some(value) = words.get(&occurrence.key) else {
            continue;
        };

        let hover = Hover {
            key: occurrence.key.clone(),
            value: value.to_string(),
        };

        let focused = selections
            .iter()
            .any(|selection| selection.touches(&occurrence.span));

        if focused {
            plan.resolved_focused.push(FocusedPlaceholder {
                occurrence: occurrence.clone(),
                hover,
            });
        } else {
            plan.resolved_hidden.push(HiddenPlaceholder {
                occurrence: occurrence.clone(),
                substitute: value.to_string(),
                hover,
            });
        }
    }

    plan
}

/// Scan `text` fresh and annotate it
pub fn annotate_text(text: &str, words: &WordMap, selections: &[Span]) -> RenderPlan {
    let occurrences = scan_placeholders(text);
    let comments = scan_comments(text);
    annotate(&occurrences, &comments, words, selections)
}
