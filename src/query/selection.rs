//! Filtering and picking single posts out of the catalog.

use chrono::{Months, NaiveDate};
use tracing::debug;

use crate::domain::Post;
use crate::library::Catalog;

use super::error::QueryError;
use super::settings::QuerySettings;

/// Popular posts published within the recent window, newest first
///
/// A post qualifies when it has more than `min_likes` likes and was
/// published strictly after `reference` minus `window_months`. Posts sharing
/// a date keep their catalog order.
pub fn recent_popular<'a>(
    catalog: &'a Catalog,
    reference: NaiveDate,
    settings: &QuerySettings,
) -> Vec<&'a Post> {
    let cutoff = reference
        .checked_sub_months(Months::new(settings.window_months))
        .unwrap_or(NaiveDate::MIN);

    let mut posts: Vec<&Post> = catalog
        .iter()
        .filter(|post| post.likes > settings.min_likes && post.date > cutoff)
        .collect();
    posts.sort_by(|a, b| b.date.cmp(&a.date));

    debug!(%reference, %cutoff, found = posts.len(), "Selected recent popular posts");
    posts
}

/// Why a post fails the integrity check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrityIssue {
    /// Title is empty or whitespace only
    BlankTitle,

    /// URL host is missing or not the expected one
    ForeignHost,
}

impl std::fmt::Display for IntegrityIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntegrityIssue::BlankTitle => write!(f, "blank title"),
            IntegrityIssue::ForeignHost => write!(f, "unexpected URL host"),
        }
    }
}

fn has_title(post: &Post) -> bool {
    !post.title.trim().is_empty()
}

fn is_hosted_on(post: &Post, host: &str) -> bool {
    post.url
        .host_str()
        .is_some_and(|h| h.eq_ignore_ascii_case(host))
}

/// Whether every post has a title and lives on `expected_host`
///
/// Stops at the first offending post.
pub fn check_integrity(catalog: &Catalog, expected_host: &str) -> bool {
    catalog
        .iter()
        .all(|post| has_title(post) && is_hosted_on(post, expected_host))
}

/// Every post failing the integrity check, with the first issue found
pub fn integrity_violations<'a>(
    catalog: &'a Catalog,
    expected_host: &str,
) -> Vec<(&'a Post, IntegrityIssue)> {
    catalog
        .iter()
        .filter_map(|post| {
            if !has_title(post) {
                Some((post, IntegrityIssue::BlankTitle))
            } else if !is_hosted_on(post, expected_host) {
                Some((post, IntegrityIssue::ForeignHost))
            } else {
                None
            }
        })
        .collect()
}

/// The last post in catalog order
pub fn last_post(catalog: &Catalog) -> Result<&Post, QueryError> {
    catalog.iter().last().ok_or(QueryError::EmptySource)
}
