//! Logging setup.
//!
//! Logs go to stderr so they never mix with exported text on stdout.
//! `WORDSMITH_LOG` takes priority over `RUST_LOG`; without either, only
//! warnings and errors are shown.

use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "WORDSMITH_LOG";
const DEFAULT_FILTER: &str = "warn";

fn create_filter() -> EnvFilter {
    let directives = std::env::var(LOG_ENV)
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| DEFAULT_FILTER.to_string());

    EnvFilter::try_new(&directives).unwrap_or_else(|e| {
        eprintln!("Ignoring invalid log filter {:?}: {}", directives, e);
        EnvFilter::new(DEFAULT_FILTER)
    })
}

/// Install the global subscriber. Safe to call more than once.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(create_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
