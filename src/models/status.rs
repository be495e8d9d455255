use serde::{Deserialize, Serialize};
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

/// Whole hours, minutes and seconds until the next cutoff, truncating.
/// Components are never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRemaining {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeRemaining {
    pub fn total_seconds(&self) -> i64 {
        self.hours * 3600 + self.minutes * 60 + self.seconds
    }
}

/// Snapshot of the submission window at one instant. Recomputed on demand;
/// nothing here is stored between polls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameStatus {
    pub is_open: bool,
    pub deadline: DateTime<FixedOffset>,
    pub time_remaining: TimeRemaining,
    /// Reference-zone calendar date identifying today's round.
    pub challenge_date: NaiveDate,
    /// Days since the configured game start date, 1-based.
    pub day_number: Option<i64>,
    pub last_updated: DateTime<Utc>,
}
