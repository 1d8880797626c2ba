//! Terminal presentation host.
//!
//! Shows one file on disk as the only editor. Every pass re-reads the file,
//! so the text a pass annotates is always what is on disk at that moment.

use crate::cursor::CursorArg;
use crate::document::read_document;
use colored::Colorize;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;
use wordsmith_common::{Position, Span};
use wordsmith_editor::{DecorationSet, EditorId, LineIndex, PositionEncoder, PresentationHost};

/// The single editor a terminal host exposes
pub const DOCUMENT: EditorId = EditorId(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Text with decorations applied, coloured when the terminal allows it
    Render,
    /// The raw decoration set as JSON
    Json,
}

struct Snapshot {
    text: String,
    index: LineIndex,
}

pub struct TerminalHost<W: Write> {
    path: PathBuf,
    cursors: Vec<CursorArg>,
    mode: OutputMode,
    snapshot: RefCell<Snapshot>,
    out: W,
    frames: u64,
}

impl<W: Write> TerminalHost<W> {
    pub fn new(path: PathBuf, cursors: Vec<CursorArg>, mode: OutputMode, out: W) -> Self {
        Self {
            path,
            cursors,
            mode,
            snapshot: RefCell::new(Snapshot {
                text: String::new(),
                index: LineIndex::new(""),
            }),
            out,
            frames: 0,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn into_output(self) -> W {
        self.out
    }

    fn write_frame(&mut self, decorations: &DecorationSet) -> std::io::Result<()> {
        let snapshot = self.snapshot.borrow();

        match self.mode {
            OutputMode::Render => {
                if self.frames > 0 {
                    writeln!(self.out)?;
                }
                writeln!(
                    self.out,
                    "{} {} {}",
                    "──".dimmed(),
                    self.path.display().to_string().bold(),
                    format!(
                        "({} substituted, {} focused, {} comments)",
                        decorations.substituted.len(),
                        decorations.focused.len(),
                        decorations.comments.len()
                    )
                    .dimmed()
                )?;
                writeln!(self.out, "{}", render(&snapshot.text, &snapshot.index, decorations))?;
            }
            OutputMode::Json => {
                let json = serde_json::to_string_pretty(decorations)?;
                writeln!(self.out, "{}", json)?;
            }
        }

        self.out.flush()
    }
}

impl<W: Write> PresentationHost for TerminalHost<W> {
    fn document_text(&self, editor: EditorId) -> Option<String> {
        if editor != DOCUMENT {
            return None;
        }

        match read_document(&self.path) {
            Ok(text) => {
                *self.snapshot.borrow_mut() = Snapshot {
                    index: LineIndex::new(&text),
                    text: text.clone(),
                };
                Some(text)
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Cannot read document");
                None
            }
        }
    }

    fn selections(&self, editor: EditorId) -> Vec<Span> {
        if editor != DOCUMENT {
            return Vec::new();
        }

        let snapshot = self.snapshot.borrow();
        self.cursors
            .iter()
            .map(|cursor| cursor.to_span(&snapshot.index))
            .collect()
    }

    fn position_at(&self, _editor: EditorId, offset: usize) -> Position {
        self.snapshot.borrow().index.position_at(offset)
    }

    fn set_decorations(&mut self, editor: EditorId, decorations: DecorationSet) {
        if editor != DOCUMENT {
            return;
        }

        if let Err(e) = self.write_frame(&decorations) {
            tracing::error!(error = %e, "Failed to write preview");
        }
        self.frames += 1;
    }

    fn report_error(&mut self, message: &str) {
        eprintln!("{} {}", "⚠️ ".yellow(), message);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    Plain,
    Comment,
    Focused,
}

fn paint(run: &str, style: Style) -> String {
    if run.is_empty() {
        return String::new();
    }
    match style {
        Style::Plain => run.to_string(),
        Style::Comment => run.green().dimmed().to_string(),
        Style::Focused => run.yellow().underline().to_string(),
    }
}

/// Apply a decoration set to the text it was computed from.
///
/// Substituted ranges are replaced by their content, focused placeholders
/// and comments keep their raw text with a highlight.
pub fn render(text: &str, index: &LineIndex, decorations: &DecorationSet) -> String {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    let offsets = |start: Position, end: Position| {
        let start = index.offset_at(start).min(len);
        let end = index.offset_at(end).min(len);
        (start, end.max(start))
    };

    let mut styles = vec![Style::Plain; len];
    for mark in &decorations.comments {
        let (start, end) = offsets(mark.range.start, mark.range.end);
        styles[start..end].fill(Style::Comment);
    }
    for mark in &decorations.focused {
        let (start, end) = offsets(mark.range.start, mark.range.end);
        styles[start..end].fill(Style::Focused);
    }

    let substitutions: BTreeMap<usize, (usize, &str)> = decorations
        .substituted
        .iter()
        .map(|decoration| {
            let (start, end) = offsets(decoration.range.start, decoration.range.end);
            (start, (end, decoration.content.as_str()))
        })
        .collect();

    let mut out = String::with_capacity(text.len());
    let mut run = String::new();
    let mut run_style = Style::Plain;
    let mut i = 0;

    while i < len {
        if let Some(&(end, content)) = substitutions.get(&i) {
            out.push_str(&paint(&run, run_style));
            run.clear();
            out.push_str(&content.green().bold().to_string());
            i = end.max(i + 1);
            continue;
        }

        if styles[i] != run_style {
            out.push_str(&paint(&run, run_style));
            run.clear();
            run_style = styles[i];
        }
        run.push(chars[i]);
        i += 1;
    }
    out.push_str(&paint(&run, run_style));

    out
}
