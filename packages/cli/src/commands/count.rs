use super::resolve_path;
use crate::config::Config;
use crate::document::read_document;
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use wordsmith_transform::transformed_char_count;

#[derive(Debug, Args)]
pub struct CountArgs {
    /// Manuscript to measure
    pub file: PathBuf,
}

pub fn count(args: CountArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let words = config.open_store(cwd).word_map();

    let source = resolve_path(cwd, &args.file);
    let text = read_document(&source)
        .with_context(|| format!("Failed to read {}", source.display()))?;

    println!("Transformed characters: {}", transformed_char_count(&text, &words));
    Ok(())
}
