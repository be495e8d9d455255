use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use config::{Config, ConfigError, File};
use std::path::Path;

use crate::scoring::CategoryTable;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub app: AppSettings,
    pub scoring: ScoringSettings,
    pub deadline: DeadlineSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub version: String,
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringSettings {
    pub points: PointTable,
    /// Minimum similarity for fuzzy credit to apply, in (0, 1].
    pub partial_match_threshold: f64,
    /// Each consecutive day of play adds this much to the streak multiplier.
    pub streak_bonus_per_day: f64,
    pub categories: CategoryTable,
}

/// Base points for the different prediction accuracy levels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointTable {
    pub participation: i64,
    pub exact_subreddit: i64,
    pub category_subreddit: i64,
    pub partial_subreddit: i64,
    pub exact_title: i64,
    pub partial_title_max: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeadlineSettings {
    /// Daily cutoff in the reference zone, as an hour of day.
    pub cutoff_hour: u32,
    /// Fixed reference-zone offset from UTC. The game runs on UTC-5
    /// year-round; daylight saving is deliberately ignored.
    pub utc_offset_hours: i32,
    /// First day of the game, used for day numbering.
    pub start_date: Option<NaiveDate>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app: AppSettings {
                name: "Reddit Oracle".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                log_level: "info".to_string(),
            },
            scoring: ScoringSettings {
                points: PointTable::default(),
                partial_match_threshold: 0.6,
                streak_bonus_per_day: 0.1,
                categories: CategoryTable::default(),
            },
            deadline: DeadlineSettings {
                cutoff_hour: 18,
                utc_offset_hours: -5,
                start_date: None,
            },
        }
    }
}

impl Default for PointTable {
    fn default() -> Self {
        Self {
            participation: 10,
            exact_subreddit: 100,
            category_subreddit: 50,
            partial_subreddit: 10,
            exact_title: 100,
            partial_title_max: 20,
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("REDDIT_ORACLE"))
            .build()?;

        s.try_deserialize()
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::from(path.as_ref()))
            .build()?;

        s.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        let points = &self.scoring.points;
        if points.participation < 0
            || points.exact_subreddit < 0
            || points.category_subreddit < 0
            || points.partial_subreddit < 0
            || points.exact_title < 0
            || points.partial_title_max < 0
        {
            return Err("All point values must be non-negative".to_string());
        }

        let threshold = self.scoring.partial_match_threshold;
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(format!(
                "Partial match threshold must be in (0, 1], got {}",
                threshold
            ));
        }

        if self.scoring.streak_bonus_per_day < 0.0 {
            return Err("Streak bonus per day must be non-negative".to_string());
        }

        if self.deadline.cutoff_hour >= 24 {
            return Err(format!(
                "Cutoff hour must be between 0 and 23, got {}",
                self.deadline.cutoff_hour
            ));
        }

        if self.deadline.utc_offset_hours < -12 || self.deadline.utc_offset_hours > 14 {
            return Err(format!(
                "UTC offset must be between -12 and +14 hours, got {}",
                self.deadline.utc_offset_hours
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_validate() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_bad_threshold_rejected() {
        let mut settings = Settings::default();
        settings.scoring.partial_match_threshold = 1.5;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_bad_cutoff_hour_rejected() {
        let mut settings = Settings::default();
        settings.deadline.cutoff_hour = 24;
        assert!(settings.validate().is_err());
    }
}
