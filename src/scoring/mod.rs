pub mod similarity;
pub mod categories;
pub mod calculator;

pub use similarity::similarity;
pub use categories::CategoryTable;
pub use calculator::{streak_multiplier, ScoreCalculator};
