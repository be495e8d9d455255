use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use rand::{distributions::Alphanumeric, Rng};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    pub id: String,
    pub user: String,
    pub subreddit: String,
    pub title: String,
    /// Free-text reasoning shown alongside the prediction; never scored.
    pub reason: String,
    pub submitted_at: DateTime<Utc>,
    pub score: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionSubmission {
    pub user: String,
    pub subreddit: String,
    pub title: String,
    pub reason: String,
}

impl Prediction {
    pub fn new(user: String, subreddit: String, title: String, reason: String) -> Self {
        Self {
            id: generate_id(),
            user,
            subreddit,
            title,
            reason,
            submitted_at: Utc::now(),
            score: None,
        }
    }

    pub fn from_submission(submission: PredictionSubmission) -> Self {
        Self::new(
            submission.user,
            submission.subreddit,
            submission.title,
            submission.reason,
        )
    }

    pub fn with_score(mut self, total: i64) -> Self {
        self.score = Some(total);
        self
    }
}

fn generate_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(9)
        .map(char::from)
        .collect::<String>()
        .to_lowercase()
}
