//! Gathering messages from Codex session logs and the history file
//!
//! [`discovery`] finds the session files worth opening; [`builder`] reads them, applies the
//! cutoff and produces one list ordered by timestamp.

pub mod builder;
pub mod discovery;

pub use builder::{
    CollectStats, Collection, Sources, collect_from_files, collect_messages, filter_and_sort,
};
pub use discovery::{SessionFiles, discover_session_files, is_session_file_name};
