//! Grouping and aggregation over the catalog.

use std::collections::BTreeMap;

use tracing::debug;

use crate::domain::{Post, PostType};
use crate::library::Catalog;

/// Posts sharing a URL, keyed by that URL
///
/// Only URLs carried by more than one post appear. Members keep catalog order.
pub fn find_duplicates(catalog: &Catalog) -> BTreeMap<String, Vec<&Post>> {
    let mut by_url: BTreeMap<String, Vec<&Post>> = BTreeMap::new();
    for post in catalog {
        by_url.entry(post.url.to_string()).or_default().push(post);
    }

    by_url.retain(|_, posts| posts.len() > 1);

    debug!(groups = by_url.len(), "Found duplicate URLs");
    by_url
}

/// Total likes per category
///
/// Categories with no posts are absent from the result.
pub fn likes_per_type(catalog: &Catalog) -> BTreeMap<PostType, u64> {
    catalog.iter().fold(BTreeMap::new(), |mut totals, post| {
        *totals.entry(post.post_type).or_insert(0) += u64::from(post.likes);
        totals
    })
}

/// Every author paired with the posts they worked on, in catalog order
///
/// A post with several authors shows up under each of them.
pub fn posts_by_author(catalog: &Catalog) -> BTreeMap<&str, Vec<&Post>> {
    let mut by_author: BTreeMap<&str, Vec<&Post>> = BTreeMap::new();
    for (author, post) in catalog
        .iter()
        .flat_map(|post| post.authors.iter().map(move |author| (author.as_str(), post)))
    {
        by_author.entry(author).or_default().push(post);
    }
    by_author
}

/// Best liked post of every author with at least `min_posts` posts
///
/// On equal likes the post met first in catalog order wins.
pub fn prolific_authors(catalog: &Catalog, min_posts: usize) -> BTreeMap<String, &Post> {
    let result: BTreeMap<String, &Post> = posts_by_author(catalog)
        .into_iter()
        .filter(|(_, posts)| posts.len() >= min_posts)
        .filter_map(|(author, posts)| {
            posts
                .into_iter()
                .reduce(|best, post| if post.likes > best.likes { post } else { best })
                .map(|best| (author.to_string(), best))
        })
        .collect();

    debug!(min_posts, authors = result.len(), "Selected prolific authors");
    result
}
