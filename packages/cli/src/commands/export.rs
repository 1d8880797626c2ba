use super::resolve_path;
use crate::config::Config;
use crate::document::read_document;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;
use wordsmith_transform::{export_path, transform};

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Manuscript to export
    pub file: PathBuf,

    /// Output file (defaults to FILE with `_transformed` before the extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output to stdout instead of a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,
}

pub fn export(args: ExportArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let words = config.open_store(cwd).word_map();

    let source = resolve_path(cwd, &args.file);
    let text = read_document(&source)
        .with_context(|| format!("Failed to read {}", source.display()))?;

    let exported = transform(&text, &words);
    tracing::debug!(source = %source.display(), chars = exported.chars().count(), "Transformed manuscript");

    if args.stdout {
        print!("{}", exported);
        return Ok(());
    }

    let target = match &args.output {
        Some(output) => resolve_path(cwd, output),
        None => export_path(&source),
    };

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&target, &exported)
        .with_context(|| format!("Failed to write {}", target.display()))?;

    println!(
        "  {} {} → {}",
        "✓".green(),
        args.file.display(),
        target.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project() -> tempfile::TempDir {
        let dir = tempfile::TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join(".wordsmith")).unwrap();
        fs::write(
            dir.path().join(".wordsmith/words.json"),
            r#"[{"key":"hero","value":"Aria"}]"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("chapter.md"),
            "// draft notes\n{hero} wakes.   \r\nShe stands. // tighten\n",
        )
        .unwrap();
        dir
    }

    #[test]
    fn test_export_next_to_source() {
        let dir = project();
        let cwd = dir.path().to_str().unwrap();

        export(
            ExportArgs {
                file: PathBuf::from("chapter.md"),
                output: None,
                stdout: false,
            },
            cwd,
        )
        .unwrap();

        let exported = fs::read_to_string(dir.path().join("chapter_transformed.md")).unwrap();
        assert_eq!(exported, "Aria wakes.\nShe stands.\n");
    }

    #[test]
    fn test_export_to_explicit_output() {
        let dir = project();
        let cwd = dir.path().to_str().unwrap();

        export(
            ExportArgs {
                file: PathBuf::from("chapter.md"),
                output: Some(PathBuf::from("out/final.txt")),
                stdout: false,
            },
            cwd,
        )
        .unwrap();

        assert!(dir.path().join("out/final.txt").exists());
        assert!(!dir.path().join("chapter_transformed.md").exists());
    }

    #[test]
    fn test_export_drops_comment_line_after_bom() {
        let dir = project();
        let cwd = dir.path().to_str().unwrap();
        fs::write(dir.path().join("bom.txt"), "\u{FEFF}// chapter notes\r\n{hero} left.\r\n").unwrap();

        export(
            ExportArgs {
                file: PathBuf::from("bom.txt"),
                output: None,
                stdout: false,
            },
            cwd,
        )
        .unwrap();

        let exported = fs::read_to_string(dir.path().join("bom_transformed.txt")).unwrap();
        assert_eq!(exported, "Aria left.\n");
    }

    #[test]
    fn test_export_missing_file_fails() {
        let dir = project();
        let result = export(
            ExportArgs {
                file: PathBuf::from("nope.md"),
                output: None,
                stdout: true,
            },
            dir.path().to_str().unwrap(),
        );
        assert!(result.is_err());
    }
}
