//! Diagnostic logging setup.
//!
//! The interactive UI owns the terminal, so diagnostics only go to a file the
//! user asks for. Without `--log` no subscriber is installed and `tracing`
//! events are discarded.

use std::error::Error;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "chatpane=debug";

fn build_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a global subscriber that appends plain-text events to `path`.
pub fn init_file_logging(path: &Path) -> Result<(), Box<dyn Error>> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let directives = std::env::var("RUST_LOG").ok();

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(directives.as_deref()))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|err| err as Box<dyn Error>)?;

    tracing::debug!(log_file = %path.display(), "file logging enabled");
    Ok(())
}
