use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher as NotifyWatcher};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};

#[derive(Error, Debug)]
pub enum WatcherError {
    #[error("Failed to create watcher: {0}")]
    CreateError(#[from] notify::Error),

    #[error("Cannot watch {0}: directory does not exist")]
    MissingDirectory(PathBuf),
}

pub type WatcherResult<T> = Result<T, WatcherError>;

/// Which watched file an event was about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchTarget {
    Document,
    WordList,
    Config,
}

/// Watches a handful of files by watching their parent directories, so
/// editors that save by renaming over the file are still seen.
pub struct FileWatcher {
    watcher: RecommendedWatcher,
    receiver: UnboundedReceiver<notify::Result<Event>>,
    targets: Vec<(PathBuf, WatchTarget)>,
    watched_dirs: BTreeSet<PathBuf>,
}

impl FileWatcher {
    pub fn new(targets: Vec<(PathBuf, WatchTarget)>) -> WatcherResult<Self> {
        let (tx, rx) = unbounded_channel();

        let watcher = RecommendedWatcher::new(
            move |res| {
                let _ = tx.send(res);
            },
            Config::default(),
        )?;

        let mut file_watcher = Self {
            watcher,
            receiver: rx,
            targets: Vec::new(),
            watched_dirs: BTreeSet::new(),
        };

        for (path, target) in targets {
            file_watcher.retarget(target, &path)?;
        }

        Ok(file_watcher)
    }

    /// Point `target` at a new path, watching its directory if needed.
    ///
    /// A missing directory is only an error for the document; the word list
    /// and config may not exist yet.
    pub fn retarget(&mut self, target: WatchTarget, path: &Path) -> WatcherResult<()> {
        let path = normalize(path);
        self.targets.retain(|(_, t)| *t != target);

        match path.parent() {
            Some(dir) if dir.is_dir() => {
                if self.watched_dirs.insert(dir.to_path_buf()) {
                    self.watcher.watch(dir, RecursiveMode::NonRecursive)?;
                    tracing::debug!(dir = %dir.display(), "Watching directory");
                }
            }
            Some(dir) if target == WatchTarget::Document => {
                return Err(WatcherError::MissingDirectory(dir.to_path_buf()));
            }
            _ => {
                tracing::warn!(path = %path.display(), ?target, "Directory missing, changes will not be seen");
            }
        }

        self.targets.push((path, target));
        Ok(())
    }

    /// Wait for the next change to a watched file. `None` once the
    /// underlying watcher has shut down.
    pub async fn next_change(&mut self) -> Option<WatchTarget> {
        loop {
            match self.receiver.recv().await? {
                Ok(event) => {
                    if matches!(event.kind, EventKind::Access(_)) {
                        continue;
                    }
                    if let Some(target) = event.paths.iter().find_map(|p| classify(&self.targets, p)) {
                        tracing::trace!(?target, kind = ?event.kind, "File changed");
                        return Some(target);
                    }
                }
                Err(e) => tracing::warn!(error = %e, "Watch error"),
            }
        }
    }
}

/// Canonicalize the directory part so event paths and targets compare equal
/// across symlinked temp dirs and relative arguments.
fn normalize(path: &Path) -> PathBuf {
    let (Some(dir), Some(name)) = (path.parent(), path.file_name()) else {
        return path.to_path_buf();
    };
    match dir.canonicalize() {
        Ok(dir) => dir.join(name),
        Err(_) => path.to_path_buf(),
    }
}

fn classify(targets: &[(PathBuf, WatchTarget)], path: &Path) -> Option<WatchTarget> {
    let path = normalize(path);
    targets
        .iter()
        .find(|(target_path, _)| *target_path == path)
        .map(|(_, target)| *target)
}
