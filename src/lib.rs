pub mod models;
pub mod config;
pub mod scoring;
pub mod schedule;

pub use models::{
    GameStatus, LeaderboardEntry, OracleError, Prediction, RedditPost, Result, ScoreBreakdown,
    TimeRemaining,
};
pub use config::Settings;
pub use scoring::{similarity, streak_multiplier, ScoreCalculator};
pub use schedule::DeadlineScheduler;
