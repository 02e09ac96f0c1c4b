use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Where the rendered transcript goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// An empty path means standard output
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) if !path.as_os_str().is_empty() => Self::File(path),
            _ => Self::Stdout,
        }
    }
}

/// Write `content` to `target`.
///
/// For a file target, missing parent directories are created and an existing file is
/// overwritten.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the output cannot be written.
pub fn write_output(target: &OutputTarget, content: &str) -> Result<()> {
    match target {
        OutputTarget::Stdout => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes()).context("Failed to write to stdout")?;
            stdout.flush().context("Failed to flush stdout")?;
        }
        OutputTarget::File(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create output directory: {}", parent.display())
                })?;
            }
            fs::write(path, content)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
        }
    }
    Ok(())
}
