//! Sample Catalog Integration Tests
//!
//! Runs every query against the built-in sample catalog and checks the
//! expected answers.

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use chrono::NaiveDate;
use postquery::library::{DUPLICATE_PODCAST_TITLE, DUPLICATE_PODCAST_URL};
use postquery::query::{self, QuerySettings};
use postquery::{sample_catalog, Catalog, Post, PostType, QueryError};

fn catalog() -> Catalog {
    sample_catalog().expect("sample catalog should build")
}

fn titles<'a>(posts: impl IntoIterator<Item = &'a Post>) -> Vec<&'a str> {
    posts.into_iter().map(|p| p.title.as_str()).collect()
}

fn authors_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("authors")
}

#[test]
fn test_recent_popular_posts() {
    let catalog = catalog();
    let reference = NaiveDate::from_ymd_opt(2020, 10, 26).unwrap();

    let result = query::recent_popular(&catalog, reference, &QuerySettings::default());

    assert_eq!(
        titles(result),
        vec![
            "Engineering the Post-Pandemic Workplace",
            "Digital Twins for Manufacturing",
            "The Future of Retail Experiences",
        ]
    );
}

#[test]
fn test_titles_and_hosts_are_valid() {
    let catalog = catalog();

    assert!(query::check_integrity(&catalog, "www.epam.com"));
    assert!(!query::check_integrity(&catalog, "www.example.com"));
}

#[test]
fn test_duplicates() {
    let catalog = catalog();

    let duplicates = query::find_duplicates(&catalog);

    assert_eq!(duplicates.len(), 1);
    let group = &duplicates[DUPLICATE_PODCAST_URL];
    assert_eq!(group.len(), 2);
    assert!(group.iter().all(|p| p.title == DUPLICATE_PODCAST_TITLE));
    assert!(!group[0].is_same(group[1]));

    let posts = catalog.posts();
    assert!(group[0].is_same(&posts[posts.len() - 2]));
    assert!(group[1].is_same(&posts[posts.len() - 1]));
}

#[test]
fn test_boost_least_liked() {
    let catalog = catalog();

    let boosted = query::boost_least_liked(&catalog, 3, 100);

    let summary: Vec<_> = boosted
        .iter()
        .map(|p| (p.title.as_str(), p.likes))
        .collect();
    assert_eq!(
        summary,
        vec![
            (DUPLICATE_PODCAST_TITLE, 112),
            ("Why Design Systems Fail", 135),
            ("Accessibility Is Everyone's Job", 148),
        ]
    );

    // The boosted podcast is the first copy, not its look-alike
    let posts = catalog.posts();
    assert!(boosted[0].is_same(&posts[posts.len() - 2]));
    assert_eq!(posts[posts.len() - 2].likes, 12);
}

#[test]
fn test_last_post() {
    let catalog = catalog();

    let last = query::last_post(&catalog).unwrap();

    assert_eq!(last.title, DUPLICATE_PODCAST_TITLE);
    assert_eq!(last.likes, 1103);
}

#[test]
fn test_last_post_of_empty_catalog() {
    let empty = Catalog::new();
    let result = query::last_post(&empty);

    assert!(matches!(result, Err(QueryError::EmptySource)));
}

#[test]
fn test_likes_per_type() {
    let catalog = catalog();

    let expected: BTreeMap<PostType, u64> = [
        (PostType::Blog, 4093),
        (PostType::Interview, 4246),
        (PostType::Podcast, 2623),
    ]
    .into_iter()
    .collect();

    assert_eq!(query::likes_per_type(&catalog), expected);
}

#[test]
fn test_prolific_authors() {
    let catalog = catalog();

    let result = query::prolific_authors(&catalog, 3);

    let summary: Vec<_> = result
        .iter()
        .map(|(author, post)| (author.as_str(), post.title.as_str(), post.likes))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("Jitin Agarwal", "The Human Side of Digital Transformation", 720),
            ("Ken Gordon", DUPLICATE_PODCAST_TITLE, 1103),
        ]
    );
}

#[test]
fn test_new_authors() {
    let catalog = catalog();

    let known = query::read_known_authors(&authors_dir());
    let result = query::new_authors(&catalog, &known);

    let expected: BTreeSet<String> = ["Dmitry Krasovskiy", "Patrick Allen"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(result, expected);
}
