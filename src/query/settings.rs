//! Tunables for the catalog queries.

use serde::{Deserialize, Serialize};

/// Thresholds and amounts used by the queries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuerySettings {
    /// Posts need strictly more likes than this to count as popular (default: 500)
    #[serde(default = "default_min_likes")]
    pub min_likes: u32,

    /// Months before the reference date that still count as recent (default: 3)
    #[serde(default = "default_window_months")]
    pub window_months: u32,

    /// How many of the least liked posts get boosted (default: 3)
    #[serde(default = "default_boost_count")]
    pub boost_count: usize,

    /// Likes added to each boosted post (default: 100)
    #[serde(default = "default_boost_amount")]
    pub boost_amount: u32,

    /// Posts an author needs to count as prolific (default: 3)
    #[serde(default = "default_min_posts")]
    pub min_posts: usize,

    /// Host every post URL must live on (default: www.epam.com)
    #[serde(default = "default_expected_host")]
    pub expected_host: String,
}

fn default_min_likes() -> u32 {
    500
}
fn default_window_months() -> u32 {
    3
}
fn default_boost_count() -> usize {
    3
}
fn default_boost_amount() -> u32 {
    100
}
fn default_min_posts() -> usize {
    3
}
fn default_expected_host() -> String {
    "www.epam.com".to_string()
}

impl Default for QuerySettings {
    fn default() -> Self {
        Self {
            min_likes: default_min_likes(),
            window_months: default_window_months(),
            boost_count: default_boost_count(),
            boost_amount: default_boost_amount(),
            min_posts: default_min_posts(),
            expected_host: default_expected_host(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let settings: QuerySettings =
            serde_yaml::from_str("min_likes: 100\nboost_count: 5\n").unwrap();

        assert_eq!(settings.min_likes, 100);
        assert_eq!(settings.boost_count, 5);
        assert_eq!(settings.window_months, 3);
        assert_eq!(settings.boost_amount, 100);
        assert_eq!(settings.expected_host, "www.epam.com");
    }
}
