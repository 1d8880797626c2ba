use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::fs;
use wordsmith_store::DEFAULT_WORD_LIST_PATH;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = Config::path(cwd);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing Wordsmith project...".bright_blue().bold());

    let config = Config {
        word_list_file_path: Some(DEFAULT_WORD_LIST_PATH.to_string()),
        ..Config::default()
    };

    // Create an empty word list unless one is already there
    let word_list = config.word_list_path(cwd);
    if !word_list.exists() {
        if let Some(parent) = word_list.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&word_list, "[]\n")
            .with_context(|| format!("Failed to write {}", word_list.display()))?;
        println!("  {} Created {}", "✓".green(), DEFAULT_WORD_LIST_PATH);
    }

    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Run: wordsmith words add hero Aria");
    println!("  2. Write {{hero}} anywhere in your manuscript");
    println!("  3. Run: wordsmith export chapter.txt");

    Ok(())
}
