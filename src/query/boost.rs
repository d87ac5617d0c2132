//! Likes boost for the least liked posts.
//!
//! Boosting never touches the catalog. The returned posts are copies that
//! keep the identity of their originals, so the catalog reads the same
//! before and after any number of calls.

use tracing::debug;

use crate::domain::Post;
use crate::library::Catalog;

/// Copies of the `count` least liked posts with `amount` likes added
///
/// Posts with equal likes keep their catalog order. Counts saturate at
/// `u32::MAX`.
pub fn boost_least_liked(catalog: &Catalog, count: usize, amount: u32) -> Vec<Post> {
    let mut posts: Vec<&Post> = catalog.iter().collect();
    posts.sort_by_key(|post| post.likes);

    let boosted: Vec<Post> = posts
        .into_iter()
        .take(count)
        .map(|post| post.with_likes(post.likes.saturating_add(amount)))
        .collect();

    debug!(count = boosted.len(), amount, "Boosted least liked posts");
    boosted
}
