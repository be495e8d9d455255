use serde::{Deserialize, Serialize};
use std::path::Path;

use super::Result;

/// The top post on r/popular for one scoring cycle, as returned by the feed
/// fetch. Treated as read-only ground truth; this crate never fetches it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedditPost {
    pub id: String,
    pub subreddit: String,
    pub title: String,
    pub score: i64,
    pub created_utc: i64,
    #[serde(default)]
    pub author: String,
    pub num_comments: u32,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub is_video: bool,
    #[serde(default)]
    pub num_awards: u32,
    #[serde(default)]
    pub permalink: String,
}

impl RedditPost {
    /// Load a reference post from a JSON file in the feed's shape.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let post = serde_json::from_str(&raw)?;
        Ok(post)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_feed_shape() {
        let raw = r#"{
            "id": "t3_abc123",
            "subreddit": "memes",
            "title": "This is a sample top post title",
            "score": 250000,
            "created_utc": 1754560800,
            "author": "RedditOracleBot",
            "num_comments": 5000,
            "url": "https://www.reddit.com/r/memes/comments/abc123/sample_post"
        }"#;

        let post: RedditPost = serde_json::from_str(raw).unwrap();
        assert_eq!(post.subreddit, "memes");
        assert_eq!(post.score, 250000);
        assert!(!post.is_video);
        assert_eq!(post.num_awards, 0);
    }
}
