pub mod count;
pub mod export;
pub mod init;
pub mod preview;
pub mod watch;
pub mod words;

pub use count::{count, CountArgs};
pub use export::{export, ExportArgs};
pub use init::{init, InitArgs};
pub use preview::{preview, PreviewArgs};
pub use watch::{watch, WatchArgs};
pub use words::{words, WordsArgs};

use std::path::{Path, PathBuf};

/// Resolve a command-line path against the working directory
pub(crate) fn resolve_path(cwd: &str, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        Path::new(cwd).join(path)
    }
}
