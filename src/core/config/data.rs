use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Persisted user settings (`config.toml`).
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the chat endpoint, e.g. `http://localhost:5000`
    pub endpoint: Option<String>,
}

/// Render a path for messages, abbreviating the home directory.
pub fn path_display<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();

    #[cfg(unix)]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let home_path = PathBuf::from(home);
            if let Ok(relative) = path.strip_prefix(&home_path) {
                return format!("~/{}", relative.display());
            }
        }
    }

    path.display().to_string()
}
