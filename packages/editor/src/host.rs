//! # Presentation Host
//!
//! The host owns the visible documents, their selections and the
//! decoration surface. The engine only reads from it at the start of a pass
//! and pushes one complete [`DecorationSet`] at the end.

use serde::{Deserialize, Serialize};
use wordsmith_common::{Position, Range, Span};
use wordsmith_scanner::PositionEncoder;

/// Identifies one editor (a document shown in a view) within a host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EditorId(pub u64);

/// Everything the engine needs from an editor host
pub trait PresentationHost {
    /// Current full text of the editor's document, `None` if it is gone
    fn document_text(&self, editor: EditorId) -> Option<String>;

    /// Current selections as character spans; carets are empty spans
    fn selections(&self, editor: EditorId) -> Vec<Span>;

    /// Convert a character offset into the host's line/column terms
    fn position_at(&self, editor: EditorId, offset: usize) -> Position;

    /// Replace every decoration of the editor with `decorations`
    fn set_decorations(&mut self, editor: EditorId, decorations: DecorationSet);

    /// Surface a problem to the user
    fn report_error(&mut self, message: &str);
}

/// Raw text hidden, `content` rendered after it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstituteDecoration {
    pub range: Range,
    pub content: String,
    pub hover: String,
}

/// Raw text stays visible, optionally with hover content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkDecoration {
    pub range: Range,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover: Option<String>,
}

/// Complete decoration state for one editor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecorationSet {
    pub substituted: Vec<SubstituteDecoration>,
    pub focused: Vec<MarkDecoration>,
    pub comments: Vec<MarkDecoration>,
}

impl DecorationSet {
    pub fn is_empty(&self) -> bool {
        self.substituted.is_empty() && self.focused.is_empty() && self.comments.is_empty()
    }
}

/// Borrow a host's position service for one editor
pub(crate) struct HostEncoder<'a, H> {
    pub host: &'a H,
    pub editor: EditorId,
}

impl<H: PresentationHost> PositionEncoder for HostEncoder<'_, H> {
    fn position_at(&self, offset: usize) -> Position {
        self.host.position_at(self.editor, offset)
    }
}
