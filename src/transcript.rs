//! The whole run: collect, filter, render and write

use anyhow::Result;
use chrono::{DateTime, Utc};

use crate::collector::collect_messages;
use crate::config::Config;
use crate::output::{render_transcript, write_output};
use crate::utils::format_path_with_tilde;

/// Build the transcript text for `config`, taking `now` as the moment of invocation.
///
/// The same inputs and `now` always produce the same text.
///
/// # Errors
///
/// Returns an error only for an invalid configuration. Unreadable files and malformed
/// records are skipped.
pub fn build_transcript(config: &Config, now: DateTime<Utc>) -> Result<String> {
    config.validate()?;
    let cutoff = config.cutoff(now);
    log::debug!(
        "Collecting messages since {} from {}",
        cutoff.to_rfc3339(),
        format_path_with_tilde(&config.codex_home)
    );

    let collection = collect_messages(&config.sources(), cutoff);
    Ok(render_transcript(&collection.messages, config.limit))
}

/// Build the transcript and write it to the configured output
pub fn run_transcript(config: &Config, now: DateTime<Utc>) -> Result<()> {
    let transcript = build_transcript(config, now)?;
    write_output(&config.output, &transcript)
}
