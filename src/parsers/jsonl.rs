use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::{Dialect, LogRecord, Message};

/// Result of reading one JSONL file.
///
/// A read failure part-way through the file stops the scan but keeps whatever was extracted
/// before it; the failure is reported in `read_error`.
#[derive(Debug, Default)]
pub struct FileScan {
    pub messages: Vec<Message>,
    /// Non-blank lines seen
    pub lines: usize,
    /// Non-blank lines that produced no message
    pub skipped: usize,
    pub read_error: Option<anyhow::Error>,
}

/// Read `path` line by line, decoding every non-blank line under `dialect`.
///
/// Malformed lines, lines of the wrong shape and records that are not messages are skipped.
/// Only failing to open the file is an error.
pub fn scan_file(path: &Path, dialect: Dialect) -> Result<FileScan> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    Ok(scan_reader(BufReader::new(file), dialect, path))
}

pub(crate) fn scan_reader<R: BufRead>(mut reader: R, dialect: Dialect, path: &Path) -> FileScan {
    let mut scan = FileScan::default();
    let mut buf = Vec::new();
    let mut line_num = 0usize;

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                scan.read_error = Some(anyhow::Error::new(e).context(format!(
                    "Failed to read line {} of {}",
                    line_num + 1,
                    path.display()
                )));
                break;
            }
        }
        line_num += 1;

        let line = buf.trim_ascii();
        if line.is_empty() {
            continue;
        }
        scan.lines += 1;

        match LogRecord::decode(dialect, line).and_then(LogRecord::into_message) {
            Some(message) => scan.messages.push(message),
            None => {
                scan.skipped += 1;
                log::trace!("Skipping line {} in {}", line_num, path.display());
            }
        }
    }

    scan
}
