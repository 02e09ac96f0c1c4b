use chrono::{DateTime, Datelike, FixedOffset, SubsecRound, Utc};
use serde_json::Value;

/// Parse an ISO-8601 timestamp that carries an offset.
///
/// A trailing `Z` is accepted as shorthand for `+00:00`. Timestamps without an offset are
/// rejected, since they cannot be compared against the cutoff instant. Precision is truncated
/// to microseconds, so timestamps that render the same also compare equal.
pub fn parse_iso(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let normalized = match raw.strip_suffix('Z').or_else(|| raw.strip_suffix('z')) {
        Some(stripped) => format!("{stripped}+00:00"),
        None => raw.to_string(),
    };

    DateTime::parse_from_rfc3339(&normalized)
        .or_else(|_| DateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M:%S%.f%z"))
        .or_else(|_| DateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M%:z"))
        .ok()
        .map(|ts| ts.trunc_subsecs(6))
}

/// Parse a JSON value holding an ISO-8601 string; any other JSON type yields `None`
pub fn parse_iso_value(value: &Value) -> Option<DateTime<FixedOffset>> {
    value.as_str().and_then(parse_iso)
}

/// Interpret a JSON value as Unix epoch seconds (fractional allowed) in UTC.
///
/// Accepts a JSON number or a string holding a number. The result is rounded to
/// microsecond precision. Values landing outside years 1 to 9999 (such as milliseconds
/// written where seconds belong) are rejected.
pub fn parse_epoch_seconds(value: &Value) -> Option<DateTime<FixedOffset>> {
    let seconds = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if !seconds.is_finite() {
        return None;
    }

    let micros = (seconds * 1_000_000.0).round();
    if micros < i64::MIN as f64 || micros > i64::MAX as f64 {
        return None;
    }
    DateTime::<Utc>::from_timestamp_micros(micros as i64)
        .filter(|dt| (1..=9999).contains(&dt.year()))
        .map(|dt| dt.fixed_offset())
}

/// Render a timestamp as `YYYY-MM-DDTHH:MM:SS[.ffffff]+HH:MM`.
///
/// The fractional part is microseconds and is only present when non-zero.
pub fn format_timestamp(ts: &DateTime<FixedOffset>) -> String {
    if ts.timestamp_subsec_micros() == 0 {
        ts.format("%Y-%m-%dT%H:%M:%S%:z").to_string()
    } else {
        ts.format("%Y-%m-%dT%H:%M:%S%.6f%:z").to_string()
    }
}
