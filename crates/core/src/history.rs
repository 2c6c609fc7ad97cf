//! Request log entry formatting
//!
//! Entries are freeform timestamped text blocks appended to a log file; they
//! are never parsed back.

use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// Timestamp layout of an entry header, e.g. `2024-05-01 09:30:00.000000`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Format one log entry for a served request.
pub fn format_entry<Tz>(timestamp: &DateTime<Tz>, query: &str, output: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!(
        "\n\n=== {} ===\nQuery: {}\n\n{}\n",
        timestamp.format(TIMESTAMP_FORMAT),
        query,
        output
    )
}
