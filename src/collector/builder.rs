//! Collection of messages from every source into one time-ordered list.
//!
//! # Error Handling Strategy
//!
//! Collection never fails:
//!
//! - **File-level errors**: A session file or history file that cannot be opened is logged at
//!   debug level and skipped. A file that fails part-way keeps the messages read before the
//!   failure.
//! - **Record-level errors**: Handled by the parsers; skipped lines are only counted.
//!
//! A run that skipped many lines produces the same output as one that skipped none. The
//! [`CollectStats`] exist for diagnostics only.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::collector::discovery::discover_session_files;
use crate::models::Message;
use crate::parsers::{FileScan, parse_history_file, parse_session_file};

/// Where messages are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sources {
    /// Directory searched recursively for `rollout-*.jsonl` files
    pub sessions_root: PathBuf,
    /// History file to read as well, if enabled
    pub history_file: Option<PathBuf>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CollectStats {
    pub session_files_read: usize,
    pub session_files_stale: usize,
    pub files_unreadable: usize,
    pub history_read: bool,
    pub lines_skipped: usize,
    pub messages_extracted: usize,
    pub messages_outside_window: usize,
}

#[derive(Debug, Default)]
pub struct Collection {
    /// Messages at or after the cutoff, oldest first
    pub messages: Vec<Message>,
    pub stats: CollectStats,
}

/// Collect every message at or after `cutoff` from `sources`.
///
/// Session files are read first in path order, then the history file. The combined list is
/// filtered and sorted by [`filter_and_sort`].
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use chrono::{Duration, Utc};
/// use codex_transcript::collector::{Sources, collect_messages};
///
/// let sources = Sources {
///     sessions_root: PathBuf::from("/Users/alice/.codex/sessions"),
///     history_file: None,
/// };
/// let collection = collect_messages(&sources, Utc::now() - Duration::hours(24));
/// println!("{} messages", collection.messages.len());
/// ```
pub fn collect_messages(sources: &Sources, cutoff: DateTime<Utc>) -> Collection {
    let session_files = discover_session_files(&sources.sessions_root, cutoff);

    let mut collection =
        collect_from_files(&session_files.files, sources.history_file.as_deref(), cutoff);
    collection.stats.session_files_stale = session_files.skipped_stale;

    log::debug!(
        "Collected {} messages ({} session files read, {} stale, {} unreadable, history read: {}, \
         {} lines skipped, {} outside window)",
        collection.messages.len(),
        collection.stats.session_files_read,
        collection.stats.session_files_stale,
        collection.stats.files_unreadable,
        collection.stats.history_read,
        collection.stats.lines_skipped,
        collection.stats.messages_outside_window
    );

    collection
}

/// Read the given session files in order, then the history file, and keep the messages at or
/// after `cutoff`. Files that cannot be opened are counted and skipped.
pub fn collect_from_files(
    session_files: &[PathBuf],
    history_file: Option<&Path>,
    cutoff: DateTime<Utc>,
) -> Collection {
    let mut stats = CollectStats::default();
    let mut messages = Vec::new();

    for path in session_files {
        if let Some(scan) = read_source(path, parse_session_file(path), &mut stats) {
            stats.session_files_read += 1;
            messages.extend(scan.messages);
        }
    }

    if let Some(history_path) = history_file {
        if history_path.is_file() {
            let result = parse_history_file(history_path);
            if let Some(scan) = read_source(history_path, result, &mut stats) {
                stats.history_read = true;
                messages.extend(scan.messages);
            }
        } else {
            log::debug!("History file not found: {}", history_path.display());
        }
    }

    stats.messages_extracted = messages.len();
    let messages = filter_and_sort(messages, cutoff);
    stats.messages_outside_window = stats.messages_extracted - messages.len();

    Collection { messages, stats }
}

/// Keep the messages at or after `cutoff` and sort them oldest first.
///
/// Messages without a timestamp are dropped. The sort is stable, so messages with equal
/// timestamps keep the order they were collected in. No deduplication is done.
pub fn filter_and_sort(messages: Vec<Message>, cutoff: DateTime<Utc>) -> Vec<Message> {
    let mut kept: Vec<Message> =
        messages.into_iter().filter(|m| m.is_at_or_after(cutoff)).collect();
    kept.sort_by_key(|m| m.timestamp.map(|ts| ts.with_timezone(&Utc)));
    kept
}

fn read_source(
    path: &Path,
    result: anyhow::Result<FileScan>,
    stats: &mut CollectStats,
) -> Option<FileScan> {
    match result {
        Ok(scan) => {
            if let Some(e) = &scan.read_error {
                log::debug!("Stopped reading {} early: {:#}", path.display(), e);
            }
            stats.lines_skipped += scan.skipped;
            Some(scan)
        }
        Err(e) => {
            stats.files_unreadable += 1;
            log::debug!("Skipping unreadable file: {:#}", e);
            None
        }
    }
}
