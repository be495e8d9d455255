use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub user: String,
    pub total_score: i64,
    pub daily_streak: u32,
    pub highest_streak: u32,
    pub last_prediction: Option<DateTime<Utc>>,
}

impl LeaderboardEntry {
    pub fn new(user: String) -> Self {
        Self {
            rank: 0,
            user,
            total_score: 0,
            daily_streak: 0,
            highest_streak: 0,
            last_prediction: None,
        }
    }
}

/// Sort entries by total score descending and assign 1-based ranks.
/// Ties go to the earlier prediction, then to username for determinism.
pub fn rank_entries(entries: &mut [LeaderboardEntry]) {
    entries.sort_by(|a, b| {
        b.total_score
            .cmp(&a.total_score)
            .then_with(|| match (a.last_prediction, b.last_prediction) {
                (Some(a_at), Some(b_at)) => a_at.cmp(&b_at),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => std::cmp::Ordering::Equal,
            })
            .then_with(|| a.user.cmp(&b.user))
    });

    for (index, entry) in entries.iter_mut().enumerate() {
        entry.rank = (index + 1) as u32;
    }
}
