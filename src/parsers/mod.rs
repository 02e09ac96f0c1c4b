//! JSONL parsers for Codex session logs and the prompt history file
//!
//! # Error Handling Strategy
//!
//! Parsing is best-effort. Every line is decoded on its own:
//!
//! - **Line-level failures**: Malformed JSON, invalid UTF-8, records of the wrong shape and
//!   records that are not messages produce no message and are counted as skipped. They never
//!   stop the rest of the file from being read.
//!
//! - **Field extraction**: Extractors return `Option` and try their sources in a fixed order
//!   (see [`content::TEXT_FIELDS`] and [`session::SESSION_TIMESTAMP_SOURCES`]).
//!
//! - **File-level failures**: Only opening a file is reported as an error. A read failure
//!   part-way through keeps the messages extracted so far and is reported on the
//!   [`FileScan`].

pub mod content;
pub mod history;
pub mod jsonl;
pub mod session;
pub mod timestamps;

pub use history::{extract_history_message, parse_history_file};
pub use jsonl::{FileScan, scan_file};
pub use session::{extract_session_message, parse_session_file};
pub use timestamps::{format_timestamp, parse_epoch_seconds, parse_iso};
