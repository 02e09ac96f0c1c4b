use std::path::Path;

use anyhow::Result;

use crate::models::{Dialect, HistoryRecord, Message, Role};
use crate::parsers::jsonl::{FileScan, scan_file};
use crate::parsers::timestamps::parse_iso_value;

/// Interpret a history record as a user message.
///
/// Requires a non-blank `text` and a top-level ISO-8601 `timestamp`; history records have no
/// other timestamp source, and a record without one is not a message.
pub fn extract_history_message(record: &HistoryRecord) -> Option<Message> {
    let text = record.text.as_deref().map(str::trim).filter(|t| !t.is_empty())?;
    let timestamp = record.timestamp.as_ref().and_then(parse_iso_value)?;

    Some(Message::new(Some(timestamp), Role::User, text.to_string()))
}

/// Parse the `history.jsonl` file
pub fn parse_history_file(path: &Path) -> Result<FileScan> {
    scan_file(path, Dialect::History)
}
