use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use walkdir::WalkDir;

pub const SESSION_FILE_PREFIX: &str = "rollout-";
pub const SESSION_FILE_EXTENSION: &str = ".jsonl";

/// Session files found under a sessions root
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionFiles {
    /// Candidate files, in path order
    pub files: Vec<PathBuf>,
    /// Matching files skipped because they were last modified before the cutoff
    pub skipped_stale: usize,
}

/// True for `rollout-*.jsonl` file names
pub fn is_session_file_name(name: &str) -> bool {
    name.starts_with(SESSION_FILE_PREFIX) && name.ends_with(SESSION_FILE_EXTENSION)
}

/// Last modification time of `path`, if it can be read
pub fn modified_at(path: &Path) -> Option<DateTime<Utc>> {
    fs::metadata(path).and_then(|m| m.modified()).ok().map(DateTime::<Utc>::from)
}

/// Recursively find session log files under `sessions_root`.
///
/// Files last modified before `cutoff` are skipped without being opened. Session logs are
/// append-only, so such a file cannot hold a message inside the window; messages are still
/// filtered individually afterwards. A file whose modification time cannot be read is kept.
///
/// A missing root and unreadable directories produce no files rather than an error.
pub fn discover_session_files(sessions_root: &Path, cutoff: DateTime<Utc>) -> SessionFiles {
    let mut found = SessionFiles::default();

    if !sessions_root.is_dir() {
        log::debug!("Sessions directory not found: {}", sessions_root.display());
        return found;
    }

    let entries = WalkDir::new(sessions_root).sort_by_file_name().into_iter().filter_map(|entry| {
        entry.map_err(|e| log::debug!("Skipping unreadable directory entry: {e}")).ok()
    });

    for entry in entries {
        let name = entry.file_name().to_string_lossy();
        if !is_session_file_name(&name) {
            continue;
        }
        let path = entry.path();
        // Symlinked files are followed; directories and other entries are not session files
        if !path.is_file() {
            continue;
        }

        if let Some(modified) = modified_at(path)
            && modified < cutoff
        {
            log::trace!("Skipping stale session file {}", path.display());
            found.skipped_stale += 1;
            continue;
        }

        found.files.push(path.to_path_buf());
    }

    found
}
