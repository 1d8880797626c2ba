use crate::config::Config;
use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use colored::Colorize;
use wordsmith_store::{SaveStatus, WordStore};

#[derive(Debug, Args)]
pub struct WordsArgs {
    #[command(subcommand)]
    pub command: WordsCommand,
}

#[derive(Debug, Subcommand)]
pub enum WordsCommand {
    /// Show every placeholder and its value
    List {
        /// Print the entries as JSON
        #[arg(long)]
        json: bool,
    },

    /// Define a new placeholder
    Add { key: String, value: String },

    /// Rename a placeholder and set its value
    Edit {
        key: String,
        new_key: String,
        value: String,
    },

    /// Remove a placeholder (no-op if it does not exist)
    Remove { key: String },
}

pub fn words(args: WordsArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let mut store = config.open_store(cwd);

    match args.command {
        WordsCommand::List { json } => list(&store, json),
        WordsCommand::Add { key, value } => {
            ensure_writable(&store)?;
            let status = store.add(&key, &value)?;
            println!("  {} Added {} = {}", "✓".green(), key.bright_white(), value);
            report(status);
            Ok(())
        }
        WordsCommand::Edit { key, new_key, value } => {
            ensure_writable(&store)?;
            let status = store.update(&key, &new_key, &value)?;
            if key == new_key {
                println!("  {} Updated {} = {}", "✓".green(), key.bright_white(), value);
            } else {
                println!(
                    "  {} Renamed {} → {} = {}",
                    "✓".green(),
                    key.bright_white(),
                    new_key.bright_white(),
                    value
                );
            }
            report(status);
            Ok(())
        }
        WordsCommand::Remove { key } => {
            ensure_writable(&store)?;
            let existed = store.get(&key).is_some();
            let status = store.delete(&key);
            if existed {
                println!("  {} Removed {}", "✓".green(), key.bright_white());
            } else {
                println!("  {} No word named {}", "•".dimmed(), key.bright_white());
            }
            report(status);
            Ok(())
        }
    }
}

fn list(store: &WordStore, json: bool) -> Result<()> {
    let entries = store.entries_sorted();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("{}", "No words defined yet".dimmed());
        return Ok(());
    }

    let width = entries.iter().map(|e| e.key.chars().count()).max().unwrap_or(0);
    for entry in &entries {
        let padding = " ".repeat(width - entry.key.chars().count());
        println!("  {}{}  {}", entry.key.bright_white(), padding, entry.value);
    }

    Ok(())
}

/// Saving over a file we could not parse would destroy it
fn ensure_writable(store: &WordStore) -> Result<()> {
    if let Some(e) = store.load_error() {
        bail!("Refusing to modify a word list that failed to load: {}", e);
    }
    Ok(())
}

fn report(status: SaveStatus) {
    match status {
        SaveStatus::Saved => {}
        SaveStatus::InMemoryOnly => {
            eprintln!("{} No word list file configured, change not saved", "⚠️ ".yellow());
        }
        SaveStatus::Failed(e) => {
            eprintln!("{} Change was not saved: {}", "⚠️ ".yellow(), e);
        }
    }
}
