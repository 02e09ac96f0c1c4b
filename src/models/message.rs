use std::fmt;

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Parse a role field; anything other than exactly `user` or `assistant` is rejected
    pub fn from_field(value: &str) -> Option<Self> {
        match value {
            "user" => Some(Self::User),
            "assistant" => Some(Self::Assistant),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single user or assistant message extracted from a log record.
///
/// The timestamp keeps the offset it was written with so it renders the way it was logged;
/// ordering and cutoff checks always compare the absolute instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub timestamp: Option<DateTime<FixedOffset>>,
    pub role: Role,
    pub text: String,
}

impl Message {
    pub fn new(timestamp: Option<DateTime<FixedOffset>>, role: Role, text: String) -> Self {
        Self { timestamp, role, text }
    }

    /// True when the message has a timestamp at or after `cutoff`.
    /// Messages without a timestamp are never within the window.
    pub fn is_at_or_after(&self, cutoff: DateTime<Utc>) -> bool {
        self.timestamp.is_some_and(|ts| ts.with_timezone(&Utc) >= cutoff)
    }
}
