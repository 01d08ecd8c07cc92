//! Model — a single structured log record.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One entry from the observed system: who did what, from where, with
/// what HTTP outcome, and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    pub user: String,
    pub action: String,
    /// Client address in dotted-quad textual form; not re-validated.
    pub ip: String,
    /// HTTP status code of the response.
    pub status: u16,
    /// ISO-8601 without offset, as emitted by the source system.
    pub timestamp: NaiveDateTime,
}

impl LogRecord {
    /// True when the record's status is a 4xx client error.
    pub fn is_client_error(&self) -> bool {
        (400..=499).contains(&self.status)
    }
}
