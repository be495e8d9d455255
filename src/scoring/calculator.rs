use crate::{
    config::{PointTable, ScoringSettings},
    models::{Prediction, RedditPost, ScoreBreakdown},
    scoring::categories::CategoryTable,
    scoring::similarity::{normalize, similarity},
};
use tracing::debug;

/// Scores predictions against the day's actual top post. Pure: identical
/// inputs always produce identical breakdowns.
pub struct ScoreCalculator {
    points: PointTable,
    partial_match_threshold: f64,
    categories: CategoryTable,
}

impl ScoreCalculator {
    pub fn new(settings: &ScoringSettings) -> Self {
        Self {
            points: settings.points.clone(),
            partial_match_threshold: settings.partial_match_threshold,
            categories: settings.categories.clone(),
        }
    }

    /// Score a prediction against the reference post. The streak multiplier
    /// comes from the caller's streak history; values below 1.0 are treated
    /// as 1.0.
    pub fn score(
        &self,
        prediction: &Prediction,
        post: &RedditPost,
        streak_multiplier: f64,
    ) -> ScoreBreakdown {
        let participation = self.points.participation;
        let subreddit_points = self.subreddit_points(&prediction.subreddit, &post.subreddit);
        let title_points = self.title_points(&prediction.title, &post.title);

        let base = participation + subreddit_points + title_points;

        let multiplier = streak_multiplier.max(1.0);
        let streak_bonus = if multiplier > 1.0 {
            (base as f64 * (multiplier - 1.0)).round() as i64
        } else {
            0
        };

        let total = (base + streak_bonus).max(0);

        debug!(
            user = %prediction.user,
            subreddit_points,
            title_points,
            streak_bonus,
            total,
            "scored prediction"
        );

        ScoreBreakdown {
            participation,
            subreddit_points,
            title_points,
            streak_bonus,
            total,
        }
    }

    fn subreddit_points(&self, predicted: &str, actual: &str) -> i64 {
        let predicted_norm = normalize(predicted);
        let actual_norm = normalize(actual);

        if predicted_norm == actual_norm {
            return self.points.exact_subreddit;
        }

        if self
            .categories
            .shared_category(&predicted_norm, &actual_norm)
            .is_some()
        {
            return self.points.category_subreddit;
        }

        if similarity(predicted, actual) >= self.partial_match_threshold {
            return self.points.partial_subreddit;
        }

        0
    }

    fn title_points(&self, predicted: &str, actual: &str) -> i64 {
        let predicted_norm = normalize(predicted);
        let actual_norm = normalize(actual);

        if predicted_norm == actual_norm {
            return self.points.exact_title;
        }

        // Unlike the flat subreddit credit, title credit scales with how
        // close the guess came.
        let strength = similarity(predicted, actual);
        if strength >= self.partial_match_threshold {
            return (self.points.partial_title_max as f64 * strength).round() as i64;
        }

        0
    }
}

/// Multiplier for a consecutive-day streak: 1.0 plus the configured bonus
/// per day. Streak state itself lives with the persistence layer, not here.
pub fn streak_multiplier(streak_days: u32, bonus_per_day: f64) -> f64 {
    1.0 + streak_days as f64 * bonus_per_day.max(0.0)
}
