//! Run configuration resolved from the command line and environment

use std::path::PathBuf;

use anyhow::{Result, bail};
use chrono::{DateTime, Duration, Utc};

use crate::collector::Sources;
use crate::output::OutputTarget;

pub const DEFAULT_SINCE_HOURS: f64 = 24.0;

/// Session logs live under `<codex home>/sessions`
pub const SESSIONS_DIR: &str = "sessions";
/// Prompt history lives at `<codex home>/history.jsonl`
pub const HISTORY_FILE: &str = "history.jsonl";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub codex_home: PathBuf,
    /// Lookback window; negative values put the cutoff in the future
    pub since_hours: f64,
    pub output: OutputTarget,
    pub include_history: bool,
    /// Maximum number of lines written, 0 for no limit
    pub limit: usize,
}

impl Config {
    /// Configuration with default options for `codex_home`
    pub fn new(codex_home: impl Into<PathBuf>) -> Self {
        Self {
            codex_home: codex_home.into(),
            since_hours: DEFAULT_SINCE_HOURS,
            output: OutputTarget::Stdout,
            include_history: false,
            limit: 0,
        }
    }

    /// # Errors
    ///
    /// Returns an error if the lookback window is not a finite number of hours.
    pub fn validate(&self) -> Result<()> {
        if !self.since_hours.is_finite() {
            bail!("Invalid lookback window: {} hours", self.since_hours);
        }
        Ok(())
    }

    pub fn sessions_root(&self) -> PathBuf {
        self.codex_home.join(SESSIONS_DIR)
    }

    pub fn history_path(&self) -> PathBuf {
        self.codex_home.join(HISTORY_FILE)
    }

    pub fn sources(&self) -> Sources {
        Sources {
            sessions_root: self.sessions_root(),
            history_file: self.include_history.then(|| self.history_path()),
        }
    }

    /// The earliest instant a message may have to be included, computed from `now`.
    /// Windows too large to represent clamp to the earliest (or latest) instant.
    pub fn cutoff(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let micros = (self.since_hours * 3_600_000_000.0).round();
        let window = Duration::microseconds(micros as i64);
        now.checked_sub_signed(window).unwrap_or(if micros >= 0.0 {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        })
    }
}
