//! Data models for Codex conversation logs.
//!
//! - [`Message`] - The normalized unit of output: timestamp, role and text
//! - [`Role`] - Who produced a message (`user` or `assistant`)
//! - [`LogRecord`] - One decoded JSONL line, tagged by the [`Dialect`] it was read under
//!
//! Record shapes are loose: every field is optional and validated field-by-field by the
//! parsers, so a record that does not match simply produces no message.

pub mod message;
pub mod record;

pub use message::{Message, Role};
pub use record::{Dialect, HistoryRecord, LogRecord, SessionPayload, SessionRecord};
