pub mod settings;

pub use settings::{AppSettings, DeadlineSettings, PointTable, ScoringSettings, Settings};
