use serde::{Deserialize, Serialize};

/// Per-component audit of a scored prediction. `total` is the sum of the
/// other fields, clamped to zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub participation: i64,
    pub subreddit_points: i64,
    pub title_points: i64,
    pub streak_bonus: i64,
    pub total: i64,
}

impl ScoreBreakdown {
    pub fn base_points(&self) -> i64 {
        self.participation + self.subreddit_points + self.title_points
    }
}
