//! Codex Transcript - Collect recent Codex conversations into a plain-text transcript
//!
//! This library reads the conversation logs Codex keeps under `~/.codex/` and produces a
//! chronologically ordered transcript of recent messages. It supports:
//!
//! - Recursively discovering `rollout-*.jsonl` session logs under `sessions/`
//! - Reading user prompts from `history.jsonl`
//! - Best-effort extraction of message text and timestamps from loosely shaped records
//! - Filtering by a lookback window and merging all sources in timestamp order
//!
//! # Example
//!
//! ```no_run
//! use chrono::Utc;
//! use codex_transcript::{Config, build_transcript};
//!
//! let mut config = Config::new("/Users/alice/.codex");
//! config.include_history = true;
//! let transcript = build_transcript(&config, Utc::now())?;
//! print!("{transcript}");
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod collector;
pub mod config;
pub mod models;
pub mod output;
pub mod parsers;
pub mod transcript;
pub mod utils;

// Re-export commonly used types
pub use collector::{Collection, Sources, collect_messages};
pub use config::Config;
pub use models::{Message, Role};
pub use output::{OutputTarget, render_transcript};
pub use transcript::{build_transcript, run_transcript};
