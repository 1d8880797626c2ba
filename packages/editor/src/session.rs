//! # Annotation Session
//!
//! Owns everything that changes between passes: the active editor, the
//! debounce timer and the cached word map. One session lives as long as its
//! host; host adapters feed it [`SessionEvent`]s and never touch its state
//! directly.

use crate::annotator::annotate_text;
use crate::host::{EditorId, HostEncoder, PresentationHost};
use crate::scheduler::{RefreshScheduler, Schedule, Trigger};
use crate::source::WordSource;
use crate::EditorError;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tokio::time::Instant;
use wordsmith_common::WordMap;
use wordsmith_store::WordsChanged;

/// Host notifications, translated by an adapter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The active editor changed; `None` when no editor is focused
    EditorSwitched(Option<EditorId>),

    /// Text of an editor's document changed
    DocumentChanged(EditorId),

    /// Selections or carets of an editor moved
    SelectionChanged(EditorId),

    /// The word list changed or was reloaded
    WordsChanged,

    /// Explicit refresh command
    RefreshRequested,
}

/// Summary of one completed pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassReport {
    pub editor: EditorId,
    pub substituted: usize,
    pub focused: usize,
    pub comments: usize,
    /// The word map could not be read and the pass ran without it
    pub degraded: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub passes: u64,
    pub failed_snapshots: u64,
}

pub struct Session<H, W> {
    host: H,
    words: W,
    scheduler: RefreshScheduler,
    active: Option<EditorId>,
    cached_words: Option<Arc<WordMap>>,
    stats: SessionStats,
}

impl<H: PresentationHost, W: WordSource> Session<H, W> {
    pub fn new(host: H, words: W, debounce: Duration) -> Self {
        Self {
            host,
            words,
            scheduler: RefreshScheduler::new(debounce),
            active: None,
            cached_words: None,
            stats: SessionStats::default(),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn active_editor(&self) -> Option<EditorId> {
        self.active
    }

    pub fn scheduler(&self) -> &RefreshScheduler {
        &self.scheduler
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// React to one host event. Immediate triggers run their pass before
    /// this returns; throttled ones only arm the timer.
    pub async fn handle(&mut self, event: SessionEvent) -> Option<PassReport> {
        tracing::trace!(?event, "Session event");

        let trigger = match event {
            SessionEvent::EditorSwitched(editor) => {
                // A timer armed for the previous editor must not fire against the new one
                self.scheduler.cancel();
                self.active = editor;
                if editor.is_none() {
                    return None;
                }
                Trigger::Immediate
            }
            SessionEvent::DocumentChanged(editor) | SessionEvent::SelectionChanged(editor) => {
                if self.active != Some(editor) {
                    return None;
                }
                Trigger::Throttled
            }
            SessionEvent::WordsChanged => {
                self.cached_words = None;
                Trigger::Immediate
            }
            SessionEvent::RefreshRequested => Trigger::Immediate,
        };

        match self.scheduler.trigger(trigger, Instant::now()) {
            Schedule::RunNow => self.refresh().await,
            Schedule::Deferred { .. } => None,
        }
    }

    /// Run the pending pass if its timer is due
    pub async fn fire_due(&mut self) -> Option<PassReport> {
        if self.scheduler.fire(Instant::now()) {
            self.refresh().await
        } else {
            None
        }
    }

    /// One full annotation pass against the live host state
    pub async fn refresh(&mut self) -> Option<PassReport> {
        let editor = self.active?;
        let (words, degraded) = self.word_snapshot().await;

        // Read text and selections after the snapshot await so the pass sees
        // the latest state, never a copy taken when it was triggered
        let Some(text) = self.host.document_text(editor) else {
            tracing::debug!(?editor, "Active editor has no document, skipping pass");
            return None;
        };
        let selections = self.host.selections(editor);

        let plan = annotate_text(&text, &words, &selections);
        let decorations = plan.to_decorations(&HostEncoder {
            host: &self.host,
            editor,
        });
        self.host.set_decorations(editor, decorations);
        self.stats.passes += 1;

        let report = PassReport {
            editor,
            substituted: plan.resolved_hidden.len(),
            focused: plan.resolved_focused.len(),
            comments: plan.comments.len(),
            degraded,
        };
        tracing::debug!(?report, "Annotation pass complete");
        Some(report)
    }

    async fn word_snapshot(&mut self) -> (Arc<WordMap>, bool) {
        if let Some(words) = &self.cached_words {
            return (Arc::clone(words), false);
        }

        match self.words.snapshot().await {
            Ok(words) => {
                let words = Arc::new(words);
                self.cached_words = Some(Arc::clone(&words));
                (words, false)
            }
            Err(e) => {
                // Left uncached so the next pass retries
                let error = EditorError::from(e);
                tracing::error!(error = %error, "Failed to read word list for annotation");
                self.host.report_error(&error.to_string());
                self.stats.failed_snapshots += 1;
                (Arc::new(WordMap::new()), true)
            }
        }
    }

    /// Drive the session until every event sender is dropped
    pub async fn run(mut self, mut events: mpsc::Receiver<SessionEvent>) -> Self {
        loop {
            let deadline = self.scheduler.deadline();

            tokio::select! {
                event = events.recv() => match event {
                    Some(event) => {
                        self.handle(event).await;
                    }
                    None => break,
                },
                _ = tokio::time::sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                    self.fire_due().await;
                }
            }
        }

        tracing::debug!(stats = ?self.stats, "Annotation session stopped");
        self
    }
}

/// Cloneable sender side of a running session
#[derive(Debug, Clone)]
pub struct SessionHandle {
    events: mpsc::Sender<SessionEvent>,
}

impl SessionHandle {
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<SessionEvent>) {
        let (events, receiver) = mpsc::channel(capacity);
        (Self { events }, receiver)
    }

    pub async fn send(&self, event: SessionEvent) -> Result<(), EditorError> {
        self.events
            .send(event)
            .await
            .map_err(|_| EditorError::SessionClosed)
    }

    /// Forward store change notifications into the session until either
    /// side goes away
    pub fn forward_word_changes(&self, mut changes: broadcast::Receiver<WordsChanged>) -> tokio::task::JoinHandle<()> {
        let handle = self.clone();
        tokio::spawn(async move {
            loop {
                match changes.recv().await {
                    Ok(WordsChanged) | Err(broadcast::error::RecvError::Lagged(_)) => {
                        if handle.send(SessionEvent::WordsChanged).await.is_err() {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        })
    }
}
