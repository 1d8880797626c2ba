//! # Wordsmith Editor
//!
//! Live annotation engine: keeps a host's placeholder decorations in step
//! with the document and cursor.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ host adapter: editor callbacks → events     │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ session: debounce, active editor, snapshot  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ scanner → annotator: text → RenderPlan      │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ host: DecorationSet in line/column ranges   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Always rescan**: every pass scans the current text; ranges are never
//!    carried over from an older version of the document
//! 2. **Last pass wins**: passes are cheap and always replace the whole
//!    decoration set, so superseded passes need no cancellation
//! 3. **No ambient state**: the active editor and the timer live on
//!    [`Session`], not in globals
//! 4. **Store failures degrade**: a pass always completes, with an empty
//!    word map if it has to
//!
//! ## Usage
//!
//! ```rust,ignore
//! use wordsmith_editor::{Session, SessionEvent, SessionHandle, DEFAULT_DEBOUNCE};
//!
//! let (handle, events) = SessionHandle::channel(64);
//! let session = Session::new(host, store.clone(), DEFAULT_DEBOUNCE);
//! tokio::spawn(session.run(events));
//!
//! handle.send(SessionEvent::EditorSwitched(Some(editor))).await?;
//! handle.send(SessionEvent::DocumentChanged(editor)).await?;
//! ```

mod annotator;
mod errors;
mod host;
mod scheduler;
mod session;
mod source;

pub use annotator::{annotate, annotate_text, FocusedPlaceholder, HiddenPlaceholder, Hover, RenderPlan};
pub use errors::EditorError;
pub use host::{DecorationSet, EditorId, MarkDecoration, PresentationHost, SubstituteDecoration};
pub use scheduler::{RefreshScheduler, Schedule, SchedulerState, Trigger, DEFAULT_DEBOUNCE};
pub use session::{PassReport, Session, SessionEvent, SessionHandle, SessionStats};
pub use source::WordSource;

// Re-export scan types for convenience
pub use wordsmith_scanner::{CommentSpan, LineIndex, PlaceholderOccurrence, PositionEncoder};
