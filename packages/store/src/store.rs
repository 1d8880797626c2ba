use crate::error::{StoreError, StoreResult};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};
use wordsmith_common::{WordEntry, WordMap};

/// Store handle shared between the annotation session and command glue
pub type SharedWordStore = Arc<RwLock<WordStore>>;

/// Notification that the in-memory word list changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordsChanged;

/// Outcome of persisting a mutation
#[derive(Debug)]
#[must_use]
pub enum SaveStatus {
    /// Written to disk
    Saved,

    /// No backing file configured; the change lives in memory only
    InMemoryOnly,

    /// The write failed; the in-memory change is kept
    Failed(StoreError),
}

impl SaveStatus {
    pub fn is_durable(&self) -> bool {
        matches!(self, SaveStatus::Saved)
    }
}

/// Ordered word list with optional JSON file persistence
pub struct WordStore {
    path: Option<PathBuf>,
    words: Vec<WordEntry>,
    load_error: Option<StoreError>,
    changes: broadcast::Sender<WordsChanged>,
}

impl WordStore {
    /// Store with no backing file
    pub fn in_memory(words: Vec<WordEntry>) -> Self {
        let (changes, _) = broadcast::channel(16);
        Self {
            path: None,
            words,
            load_error: None,
            changes,
        }
    }

    /// Open a store, degrading to an empty list when the file can't be read.
    ///
    /// The failure is kept in [`WordStore::load_error`] for callers that
    /// want to tell the user.
    pub fn open(path: Option<PathBuf>) -> Self {
        let mut store = Self::in_memory(Vec::new());
        store.path = path;
        store.load_from_disk();
        store
    }

    pub fn into_shared(self) -> SharedWordStore {
        Arc::new(RwLock::new(self))
    }

    /// Read a word list file. A missing file is an empty list.
    pub fn load(path: &Path) -> StoreResult<Vec<WordEntry>> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::io(path, e)),
        };

        serde_json::from_str(&contents).map_err(|e| StoreError::json(path, e))
    }

    fn load_from_disk(&mut self) {
        self.load_error = None;
        self.words = match &self.path {
            Some(path) => match Self::load(path) {
                Ok(words) => {
                    tracing::debug!(path = %path.display(), count = words.len(), "Loaded word list");
                    words
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to load word list, continuing with an empty list");
                    self.load_error = Some(e);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        self.notify();
    }

    /// Re-read the backing file
    pub fn reload(&mut self) {
        self.load_from_disk();
    }

    /// Point the store at a new file and load it
    pub fn relocate(&mut self, path: Option<PathBuf>) {
        tracing::info!(
            path = ?path.as_ref().map(|p| p.display().to_string()),
            "Word list location changed"
        );
        self.path = path;
        self.load_from_disk();
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn load_error(&self) -> Option<&StoreError> {
        self.load_error.as_ref()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<WordsChanged> {
        self.changes.subscribe()
    }

    /// Entries in stored order
    pub fn words(&self) -> &[WordEntry] {
        &self.words
    }

    /// Entries in lexicographic key order
    pub fn entries_sorted(&self) -> Vec<WordEntry> {
        let mut entries = self.words.clone();
        entries.sort_by(|a, b| a.key.cmp(&b.key));
        entries
    }

    pub fn get(&self, key: &str) -> Option<&WordEntry> {
        self.words.iter().find(|entry| entry.key == key)
    }

    pub fn word_map(&self) -> WordMap {
        WordMap::from_entries(&self.words)
    }

    pub fn add(&mut self, key: &str, value: &str) -> StoreResult<SaveStatus> {
        validate_key(key)?;
        if self.get(key).is_some() {
            return Err(StoreError::DuplicateKey(key.to_string()));
        }

        self.words.push(WordEntry::new(key, value));
        Ok(self.commit())
    }

    /// Rename and revalue an entry in place
    pub fn update(&mut self, original_key: &str, new_key: &str, new_value: &str) -> StoreResult<SaveStatus> {
        let index = self
            .words
            .iter()
            .position(|entry| entry.key == original_key)
            .ok_or_else(|| StoreError::KeyNotFound(original_key.to_string()))?;

        validate_key(new_key)?;
        if new_key != original_key && self.get(new_key).is_some() {
            return Err(StoreError::DuplicateKey(new_key.to_string()));
        }

        self.words[index] = WordEntry::new(new_key, new_value);
        Ok(self.commit())
    }

    /// Remove an entry. A missing key is not an error.
    pub fn delete(&mut self, key: &str) -> SaveStatus {
        self.words.retain(|entry| entry.key != key);
        self.commit()
    }

    fn commit(&mut self) -> SaveStatus {
        let status = match self.save() {
            Ok(status) => status,
            Err(e) => {
                tracing::error!(error = %e, "Word list change was not saved");
                SaveStatus::Failed(e)
            }
        };
        self.notify();
        status
    }

    fn save(&self) -> StoreResult<SaveStatus> {
        let Some(path) = &self.path else {
            return Ok(SaveStatus::InMemoryOnly);
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }

        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        self.words
            .serialize(&mut serializer)
            .map_err(|e| StoreError::json(path, e))?;

        std::fs::write(path, buffer).map_err(|e| StoreError::io(path, e))?;
        Ok(SaveStatus::Saved)
    }

    fn notify(&self) {
        // No subscribers is fine
        let _ = self.changes.send(WordsChanged);
    }
}

fn validate_key(key: &str) -> StoreResult<()> {
    if key.is_empty() {
        return Err(StoreError::EmptyKey);
    }
    if key.contains(['{', '}']) {
        return Err(StoreError::ReservedCharacter(key.to_string()));
    }
    Ok(())
}
