//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, TimeZone, Utc};
use serde_json::{Value, json};
use tempfile::TempDir;

/// Fixed moment of invocation used by library-level tests
pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 2, 12, 0, 0).unwrap()
}

/// Builder for creating test Codex home directories (`sessions/` + `history.jsonl`)
pub struct CodexHomeBuilder {
    temp_dir: TempDir,
}

impl CodexHomeBuilder {
    /// Create a new builder with an empty Codex home directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the Codex home directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a history.jsonl file with the given content
    pub fn with_history(self, content: &str) -> Self {
        fs::write(self.temp_dir.path().join("history.jsonl"), content)
            .expect("Failed to write history.jsonl");
        self
    }

    /// Add history records programmatically
    pub fn with_history_records(self, records: &[HistoryRecordBuilder]) -> Self {
        let content = records.iter().map(|r| r.to_json()).collect::<Vec<_>>().join("\n");
        self.with_history(&content)
    }

    /// Add a session file at `relative` (under `sessions/`) with raw content
    pub fn with_session_content(self, relative: &str, content: &str) -> Self {
        let path = self.session_path(relative);
        fs::create_dir_all(path.parent().unwrap()).expect("Failed to create sessions dir");
        fs::write(&path, content).expect("Failed to write session file");
        self
    }

    /// Add a session file at `relative` (under `sessions/`) built from records
    pub fn with_session(self, relative: &str, records: &[SessionRecordBuilder]) -> Self {
        let content = records.iter().map(|r| r.to_json()).collect::<Vec<_>>().join("\n");
        self.with_session_content(relative, &content)
    }

    /// Set the modification time of a session file added earlier
    pub fn with_session_modified(self, relative: &str, modified: SystemTime) -> Self {
        let file = fs::File::options()
            .write(true)
            .open(self.session_path(relative))
            .expect("Failed to open session file");
        file.set_modified(modified).expect("Failed to set modification time");
        self
    }

    pub fn session_path(&self, relative: &str) -> PathBuf {
        self.temp_dir.path().join("sessions").join(relative)
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for CodexHomeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for session log records
pub struct SessionRecordBuilder {
    record_type: String,
    payload_type: String,
    role: String,
    content: Value,
    timestamp: Option<String>,
    payload_timestamp: Option<String>,
    epoch: Option<f64>,
}

impl SessionRecordBuilder {
    /// A user message wrapped in a `response_item`
    pub fn user() -> Self {
        Self::message("user", "Test message")
    }

    /// An assistant message wrapped in a `response_item`
    pub fn assistant() -> Self {
        Self::message("assistant", "Test response")
    }

    fn message(role: &str, text: &str) -> Self {
        Self {
            record_type: "response_item".to_string(),
            payload_type: "message".to_string(),
            role: role.to_string(),
            content: json!([{"type": "input_text", "text": text}]),
            timestamp: Some("2024-06-02T10:00:00Z".to_string()),
            payload_timestamp: None,
            epoch: None,
        }
    }

    /// Set the message text as a single content element
    pub fn text(mut self, text: &str) -> Self {
        self.content = json!([{"type": "input_text", "text": text}]);
        self
    }

    /// Set the raw `content` value
    pub fn content(mut self, content: Value) -> Self {
        self.content = content;
        self
    }

    pub fn role(mut self, role: &str) -> Self {
        self.role = role.to_string();
        self
    }

    pub fn record_type(mut self, record_type: &str) -> Self {
        self.record_type = record_type.to_string();
        self
    }

    pub fn payload_type(mut self, payload_type: &str) -> Self {
        self.payload_type = payload_type.to_string();
        self
    }

    /// Set the top-level ISO-8601 timestamp
    pub fn timestamp(mut self, timestamp: &str) -> Self {
        self.timestamp = Some(timestamp.to_string());
        self
    }

    /// Remove the top-level timestamp
    pub fn without_timestamp(mut self) -> Self {
        self.timestamp = None;
        self
    }

    /// Set `payload.timestamp`
    pub fn payload_timestamp(mut self, timestamp: &str) -> Self {
        self.payload_timestamp = Some(timestamp.to_string());
        self
    }

    /// Set the top-level `ts` epoch seconds
    pub fn epoch(mut self, seconds: f64) -> Self {
        self.epoch = Some(seconds);
        self
    }

    /// Convert to a JSON line
    pub fn to_json(&self) -> String {
        let mut payload = json!({
            "type": self.payload_type,
            "role": self.role,
            "content": self.content,
        });
        if let Some(ts) = &self.payload_timestamp {
            payload["timestamp"] = json!(ts);
        }

        let mut record = json!({"type": self.record_type, "payload": payload});
        if let Some(ts) = &self.timestamp {
            record["timestamp"] = json!(ts);
        }
        if let Some(epoch) = self.epoch {
            record["ts"] = json!(epoch);
        }
        record.to_string()
    }
}

/// Builder for history.jsonl records
pub struct HistoryRecordBuilder {
    text: String,
    timestamp: String,
}

impl HistoryRecordBuilder {
    pub fn new() -> Self {
        Self { text: "Test prompt".to_string(), timestamp: "2024-06-02T09:00:00Z".to_string() }
    }

    pub fn text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn timestamp(mut self, timestamp: &str) -> Self {
        self.timestamp = timestamp.to_string();
        self
    }

    pub fn to_json(&self) -> String {
        json!({"text": self.text, "timestamp": self.timestamp, "session_id": "s-1"}).to_string()
    }
}

impl Default for HistoryRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A Codex home with two sessions and a history file, all within a day of [`test_now`]
pub fn realistic_codex_home() -> TempDir {
    CodexHomeBuilder::new()
        .with_session(
            "2024/06/01/rollout-2024-06-01T20-00-00-a.jsonl",
            &[
                SessionRecordBuilder::user()
                    .text("Why is CI red?")
                    .timestamp("2024-06-01T20:00:00Z"),
                SessionRecordBuilder::assistant()
                    .content(json!([
                        {"type": "output_text", "text": "The lint step fails."},
                        {"type": "output_text", "text": "Run cargo fmt."}
                    ]))
                    .timestamp("2024-06-01T20:00:30Z"),
            ],
        )
        .with_session(
            "2024/06/02/rollout-2024-06-02T08-00-00-b.jsonl",
            &[
                SessionRecordBuilder::user()
                    .text("Add a changelog entry")
                    .timestamp("2024-06-02T08:00:00Z"),
                SessionRecordBuilder::assistant().text("Done.").timestamp("2024-06-02T08:01:00Z"),
            ],
        )
        .with_history_records(&[
            HistoryRecordBuilder::new().text("Why is CI red?").timestamp("2024-06-01T19:59:59Z"),
            HistoryRecordBuilder::new()
                .text("Add a changelog entry")
                .timestamp("2024-06-02T07:59:59Z"),
        ])
        .build()
}
