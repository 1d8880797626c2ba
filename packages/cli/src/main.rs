mod commands;
mod config;
mod cursor;
mod document;
mod host;
mod logging;
mod watcher;

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    count, export, init, preview, watch, words, CountArgs, ExportArgs, InitArgs, PreviewArgs,
    WatchArgs, WordsArgs,
};

/// Wordsmith CLI - placeholders and author comments for manuscripts
#[derive(Parser, Debug)]
#[command(name = "wordsmith")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a new Wordsmith project
    Init(InitArgs),

    /// Manage the word list
    Words(WordsArgs),

    /// Write the final text: placeholders substituted, comments removed
    Export(ExportArgs),

    /// Count the characters of the exported text
    Count(CountArgs),

    /// Show a file with its placeholders resolved
    Preview(PreviewArgs),

    /// Preview a file and refresh on every change
    Watch(WatchArgs),
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()
        .context("Cannot get current directory")?
        .display()
        .to_string();

    match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Words(args) => words(args, &cwd),
        Command::Export(args) => export(args, &cwd),
        Command::Count(args) => count(args, &cwd),
        Command::Preview(args) => preview(args, &cwd).await,
        Command::Watch(args) => watch(args, &cwd).await,
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init();

    if let Err(err) = run(cli).await {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
