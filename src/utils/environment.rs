use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::utils::paths::expand_tilde;

/// Environment variable that overrides the Codex data directory
pub const CODEX_HOME_ENV: &str = "CODEX_HOME";

const DEFAULT_CODEX_DIR: &str = ".codex";

/// Get the Codex data directory: `$CODEX_HOME` if set, otherwise `~/.codex`
pub fn get_codex_home() -> Result<PathBuf> {
    let from_env = env::var(CODEX_HOME_ENV).ok();
    resolve_codex_home(from_env.as_deref(), dirs::home_dir().as_deref())
}

/// Resolve the Codex directory from an explicit or environment value, falling back to
/// `<home>/.codex`. A leading `~` is expanded.
pub fn resolve_codex_home(value: Option<&str>, home: Option<&Path>) -> Result<PathBuf> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(value) => Ok(expand_tilde(Path::new(value), home)),
        None => {
            let home = home.context("Could not determine home directory")?;
            Ok(home.join(DEFAULT_CODEX_DIR))
        }
    }
}
