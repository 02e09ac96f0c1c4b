use std::path::Path;

use anyhow::Result;
use chrono::{DateTime, FixedOffset};

use crate::models::{Dialect, Message, Role, SessionRecord};
use crate::parsers::content::extract_text;
use crate::parsers::jsonl::{FileScan, scan_file};
use crate::parsers::timestamps::{parse_epoch_seconds, parse_iso_value};

const RECORD_TYPE_RESPONSE_ITEM: &str = "response_item";
const PAYLOAD_TYPE_MESSAGE: &str = "message";

/// Where a session record's timestamp may come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampSource {
    /// Top-level `timestamp`, ISO-8601
    Record,
    /// `payload.timestamp`, ISO-8601
    Payload,
    /// Top-level `ts`, Unix epoch seconds
    EpochSeconds,
}

/// Timestamp sources for session records, in the order they are tried
pub const SESSION_TIMESTAMP_SOURCES: [TimestampSource; 3] =
    [TimestampSource::Record, TimestampSource::Payload, TimestampSource::EpochSeconds];

impl TimestampSource {
    pub fn resolve(self, record: &SessionRecord) -> Option<DateTime<FixedOffset>> {
        match self {
            Self::Record => record.timestamp.as_ref().and_then(parse_iso_value),
            Self::Payload => {
                record.payload.as_ref()?.timestamp.as_ref().and_then(parse_iso_value)
            }
            Self::EpochSeconds => record.ts.as_ref().and_then(parse_epoch_seconds),
        }
    }
}

/// Timestamp of a session record from the first source that yields one
pub fn session_timestamp(record: &SessionRecord) -> Option<DateTime<FixedOffset>> {
    SESSION_TIMESTAMP_SOURCES.iter().find_map(|source| source.resolve(record))
}

/// Interpret a session record as a message.
///
/// The record must be a `response_item` wrapping a `message` payload from `user` or
/// `assistant` with non-empty text. The timestamp may still be absent.
pub fn extract_session_message(record: &SessionRecord) -> Option<Message> {
    if record.record_type.as_deref() != Some(RECORD_TYPE_RESPONSE_ITEM) {
        return None;
    }
    let payload = record.payload.as_ref()?;
    if payload.payload_type.as_deref() != Some(PAYLOAD_TYPE_MESSAGE) {
        return None;
    }
    let role = payload.role.as_deref().and_then(Role::from_field)?;
    let text = payload.content.as_ref().and_then(extract_text)?;

    Some(Message::new(session_timestamp(record), role, text))
}

/// Parse a `rollout-*.jsonl` session file
pub fn parse_session_file(path: &Path) -> Result<FileScan> {
    scan_file(path, Dialect::Session)
}
