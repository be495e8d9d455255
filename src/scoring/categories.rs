use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::similarity::normalize;

/// Read-only grouping of subreddits into broad categories, used to award
/// partial credit when a prediction lands in the right neighborhood. Groups
/// are non-exclusive; a subreddit may appear under several categories.
/// Constructed once at startup, from defaults or the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryTable(BTreeMap<String, Vec<String>>);

impl Default for CategoryTable {
    fn default() -> Self {
        let mut table = BTreeMap::new();

        let groups: [(&str, &[&str]); 8] = [
            (
                "gaming",
                &["gaming", "playstation", "xbox", "nintendo", "pcgaming", "leagueoflegends"],
            ),
            (
                "memes",
                &["memes", "dankmemes", "funny", "me_irl", "wholesomememes"],
            ),
            (
                "news",
                &["news", "worldnews", "technology", "politics", "upliftingnews"],
            ),
            (
                "science",
                &["science", "space", "physics", "askscience", "futurology"],
            ),
            (
                "sports",
                &["sports", "nba", "soccer", "nfl", "baseball", "hockey", "formula1"],
            ),
            (
                "animals",
                &["aww", "cats", "dogs", "animalsbeingbros", "rarepuppers"],
            ),
            (
                "entertainment",
                &["movies", "television", "music", "videos", "anime"],
            ),
            (
                "lifestyle",
                &["food", "cooking", "fitness", "travel", "lifeprotips"],
            ),
        ];

        for (category, members) in groups {
            table.insert(
                category.to_string(),
                members.iter().map(|m| m.to_string()).collect(),
            );
        }

        Self(table)
    }
}

impl CategoryTable {
    pub fn contains(&self, category: &str, subreddit: &str) -> bool {
        let subreddit = normalize(subreddit);
        self.0
            .get(category)
            .map(|members| members.iter().any(|m| normalize(m) == subreddit))
            .unwrap_or(false)
    }

    /// The first category (in name order, for determinism) holding both
    /// subreddits, if any.
    pub fn shared_category(&self, a: &str, b: &str) -> Option<&str> {
        let a = normalize(a);
        let b = normalize(b);

        self.0
            .iter()
            .find(|(_, members)| {
                members.iter().any(|m| normalize(m) == a)
                    && members.iter().any(|m| normalize(m) == b)
            })
            .map(|(category, _)| category.as_str())
    }
}
