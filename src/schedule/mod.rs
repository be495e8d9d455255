pub mod deadline;

pub use deadline::{format_duration, DeadlineScheduler};

use chrono::{DateTime, Utc};

/// Parse an RFC 3339 instant, e.g. "2026-08-07T12:00:00Z".
pub fn parse_instant(s: &str) -> crate::models::Result<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(s.trim())?;
    Ok(parsed.with_timezone(&Utc))
}
