use super::resolve_path;
use crate::config::{warn_load_error, Config};
use crate::cursor::CursorArg;
use crate::host::{OutputMode, TerminalHost, DOCUMENT};
use crate::watcher::{FileWatcher, WatchTarget};
use anyhow::{anyhow, Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;
use wordsmith_editor::{Session, SessionEvent, SessionHandle};
use wordsmith_store::SharedWordStore;

#[derive(Debug, Args)]
pub struct WatchArgs {
    /// Manuscript to annotate
    pub file: PathBuf,

    /// Caret or selection, 1-based (LINE:COL or LINE:COL-LINE:COL). Repeatable.
    #[arg(long = "cursor", value_name = "LINE:COL")]
    pub cursors: Vec<CursorArg>,
}

/// Re-render a manuscript whenever it, the word list or the config changes.
///
/// The debounce delay is read once at startup.
pub async fn watch(args: WatchArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let store = config.open_store(cwd).into_shared();

    let document = resolve_path(cwd, &args.file);
    if !document.is_file() {
        return Err(anyhow!("File does not exist: {}", document.display()));
    }

    let host = TerminalHost::new(document.clone(), args.cursors, OutputMode::Render, std::io::stdout());
    let session = Session::new(host, Arc::clone(&store), config.debounce());

    let (handle, events) = SessionHandle::channel(64);
    let forwarder = handle.forward_word_changes(store.read().await.subscribe());
    let session_task = tokio::spawn(session.run(events));

    let mut watcher = FileWatcher::new(vec![
        (document.clone(), WatchTarget::Document),
        (config.word_list_path(cwd), WatchTarget::WordList),
        (Config::path(cwd), WatchTarget::Config),
    ])
    .context("Failed to start file watcher")?;

    eprintln!(
        "{} {} {}",
        "👀 Watching".bright_blue().bold(),
        document.display(),
        "(Ctrl+C to stop)".dimmed()
    );

    handle.send(SessionEvent::EditorSwitched(Some(DOCUMENT))).await?;

    // Registered once so a Ctrl+C during event handling is not lost
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            change = watcher.next_change() => match change {
                Some(WatchTarget::Document) => {
                    handle.send(SessionEvent::DocumentChanged(DOCUMENT)).await?;
                }
                Some(WatchTarget::WordList) => {
                    // Reloading notifies the session through the forwarder
                    let mut store = store.write().await;
                    store.reload();
                    warn_load_error(&store);
                }
                Some(WatchTarget::Config) => reconfigure(cwd, &store, &mut watcher).await,
                None => break,
            },
            _ = &mut ctrl_c => break,
        }
    }

    forwarder.abort();
    drop(handle);
    let session = session_task.await.context("Annotation session panicked")?;
    tracing::info!(stats = ?session.stats(), "Watch stopped");

    Ok(())
}

/// Re-resolve the word list location after a config edit
async fn reconfigure(cwd: &str, store: &SharedWordStore, watcher: &mut FileWatcher) {
    let config = match Config::load(cwd) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {:#}", "⚠️ ".yellow(), e);
            eprintln!("   Keeping the previous configuration");
            return;
        }
    };

    let path = config.word_list_path(cwd);
    let mut store = store.write().await;
    if store.path() == Some(path.as_path()) {
        return;
    }

    if let Err(e) = watcher.retarget(WatchTarget::WordList, &path) {
        tracing::warn!(error = %e, "Cannot watch new word list location");
    }
    store.relocate(Some(path));
    warn_load_error(&store);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use wordsmith_store::DEFAULT_WORD_LIST_PATH;

    fn project() -> tempfile::TempDir {
        let dir = tempfile::TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join(".wordsmith")).unwrap();
        fs::write(
            dir.path().join(DEFAULT_WORD_LIST_PATH),
            r#"[{"key":"hero","value":"Aria"}]"#,
        )
        .unwrap();
        fs::create_dir_all(dir.path().join("lists")).unwrap();
        fs::write(
            dir.path().join("lists/cast.json"),
            r#"[{"key":"hero","value":"Bram"}]"#,
        )
        .unwrap();
        dir
    }

    fn open(cwd: &str) -> (SharedWordStore, FileWatcher) {
        let config = Config::load(cwd).unwrap();
        let store = config.open_store(cwd).into_shared();
        let watcher = FileWatcher::new(vec![(config.word_list_path(cwd), WatchTarget::WordList)]).unwrap();
        (store, watcher)
    }

    #[tokio::test]
    async fn test_config_edit_relocates_word_list() {
        let dir = project();
        let cwd = dir.path().to_str().unwrap();
        let (store, mut watcher) = open(cwd);
        assert_eq!(store.read().await.word_map().get("hero"), Some("Aria"));

        let mut changes = store.read().await.subscribe();
        fs::write(Config::path(cwd), r#"{ "wordListFilePath": "lists/cast.json" }"#).unwrap();
        reconfigure(cwd, &store, &mut watcher).await;

        let store = store.read().await;
        assert_eq!(store.path(), Some(dir.path().join("lists/cast.json").as_path()));
        assert_eq!(store.word_map().get("hero"), Some("Bram"));
        assert!(changes.try_recv().is_ok());
    }

    #[tokio::test]
    async fn test_unchanged_location_does_not_reload() {
        let dir = project();
        let cwd = dir.path().to_str().unwrap();
        let (store, mut watcher) = open(cwd);

        let mut changes = store.read().await.subscribe();
        fs::write(Config::path(cwd), r#"{ "debounceMs": 500 }"#).unwrap();
        reconfigure(cwd, &store, &mut watcher).await;

        assert!(changes.try_recv().is_err());
        assert_eq!(
            store.read().await.path(),
            Some(dir.path().join(DEFAULT_WORD_LIST_PATH).as_path())
        );
    }

    #[tokio::test]
    async fn test_malformed_config_keeps_previous_word_list() {
        let dir = project();
        let cwd = dir.path().to_str().unwrap();
        let (store, mut watcher) = open(cwd);

        fs::write(Config::path(cwd), "{ not json").unwrap();
        reconfigure(cwd, &store, &mut watcher).await;

        let store = store.read().await;
        assert_eq!(store.path(), Some(dir.path().join(DEFAULT_WORD_LIST_PATH).as_path()));
        assert_eq!(store.word_map().get("hero"), Some("Aria"));
    }
}
