use super::resolve_path;
use crate::config::Config;
use crate::cursor::CursorArg;
use crate::host::{OutputMode, TerminalHost, DOCUMENT};
use anyhow::{anyhow, Result};
use clap::Args;
use std::path::PathBuf;
use wordsmith_editor::{Session, SessionEvent};

#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Manuscript to annotate
    pub file: PathBuf,

    /// Caret or selection, 1-based (LINE:COL or LINE:COL-LINE:COL). Repeatable.
    #[arg(long = "cursor", value_name = "LINE:COL")]
    pub cursors: Vec<CursorArg>,

    /// Print the decoration set as JSON instead of rendering it
    #[arg(long)]
    pub json: bool,
}

pub async fn preview(args: PreviewArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let words = config.open_store(cwd).word_map();

    let path = resolve_path(cwd, &args.file);
    if !path.is_file() {
        return Err(anyhow!("File does not exist: {}", path.display()));
    }

    let mode = if args.json {
        OutputMode::Json
    } else {
        OutputMode::Render
    };
    let host = TerminalHost::new(path.clone(), args.cursors, mode, std::io::stdout());
    let mut session = Session::new(host, words, config.debounce());

    session
        .handle(SessionEvent::EditorSwitched(Some(DOCUMENT)))
        .await
        .ok_or_else(|| anyhow!("Could not read {}", path.display()))?;

    Ok(())
}
