use serde::Deserialize;
use serde_json::Value;

use crate::models::Message;
use crate::parsers::{extract_history_message, extract_session_message};

/// The two record shapes a log line can be read under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Per-conversation `rollout-*.jsonl` files: wrapped `response_item` records among others
    Session,
    /// The single `history.jsonl` file: raw user inputs only
    History,
}

/// Top-level shape of a session log line.
///
/// Fields whose type varies between writers (`timestamp`, `ts`) stay as raw JSON values and
/// are interpreted by the timestamp parsers.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionRecord {
    #[serde(rename = "type", default)]
    pub record_type: Option<String>,
    #[serde(default)]
    pub timestamp: Option<Value>,
    #[serde(default)]
    pub ts: Option<Value>,
    #[serde(default)]
    pub payload: Option<SessionPayload>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionPayload {
    #[serde(rename = "type", default)]
    pub payload_type: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<Value>,
    #[serde(default)]
    pub timestamp: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryRecord {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub timestamp: Option<Value>,
}

/// One decoded log line, tagged with its dialect
#[derive(Debug, Clone)]
pub enum LogRecord {
    Session(SessionRecord),
    History(HistoryRecord),
}

impl LogRecord {
    /// Decode a raw line under `dialect`.
    ///
    /// Returns `None` for anything that is not a JSON object of the expected shape, including
    /// bytes that are not valid UTF-8. The line goes through a [`Value`] first so a repeated key
    /// keeps its last value instead of failing the whole record.
    pub fn decode(dialect: Dialect, line: &[u8]) -> Option<Self> {
        let value: Value = serde_json::from_slice(line).ok()?;
        match dialect {
            Dialect::Session => serde_json::from_value(value).ok().map(Self::Session),
            Dialect::History => serde_json::from_value(value).ok().map(Self::History),
        }
    }

    pub fn dialect(&self) -> Dialect {
        match self {
            Self::Session(_) => Dialect::Session,
            Self::History(_) => Dialect::History,
        }
    }

    /// Interpret the record as a message, if it is one
    pub fn into_message(self) -> Option<Message> {
        match self {
            Self::Session(record) => extract_session_message(&record),
            Self::History(record) => extract_history_message(&record),
        }
    }
}
