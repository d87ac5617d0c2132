//! Post records and their categories.
//!
//! A post is a value: once built, nothing in the crate changes it in place.
//! Queries that need a different like count work on copies made with
//! [`Post::with_likes`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;
use uuid::Uuid;

/// Errors raised while building a post
#[derive(Debug, Error)]
pub enum PostError {
    #[error("Invalid post URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Invalid publish date for post '{title}'")]
    InvalidDate { title: String },
}

/// Identity of a post, independent of its visible fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PostId(Uuid);

impl PostId {
    /// Generate a fresh identity
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PostId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Category of a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostType {
    /// Written article
    Blog,

    /// Conversation with a guest
    Interview,

    /// Audio episode
    Podcast,
}

impl PostType {
    /// All categories in declaration order
    pub const ALL: [PostType; 3] = [PostType::Blog, PostType::Interview, PostType::Podcast];
}

impl std::fmt::Display for PostType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PostType::Blog => write!(f, "BLOG"),
            PostType::Interview => write!(f, "INTERVIEW"),
            PostType::Podcast => write!(f, "PODCAST"),
        }
    }
}

impl std::str::FromStr for PostType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "blog" => Ok(PostType::Blog),
            "interview" => Ok(PostType::Interview),
            "podcast" => Ok(PostType::Podcast),
            _ => anyhow::bail!("Unknown post type: {}", s),
        }
    }
}

/// A single blog, interview or podcast post
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Post {
    /// Identity that survives cloning and tells apart look-alike posts
    #[serde(default)]
    pub id: PostId,

    /// Headline
    pub title: String,

    /// Authors in byline order
    pub authors: Vec<String>,

    /// Category
    pub post_type: PostType,

    /// Publish date
    pub date: NaiveDate,

    /// Canonical location of the post
    pub url: Url,

    /// Like counter
    pub likes: u32,
}

impl Post {
    /// Build a post, parsing `url` as an absolute URL
    pub fn new(
        title: impl Into<String>,
        authors: impl IntoIterator<Item = impl Into<String>>,
        post_type: PostType,
        date: NaiveDate,
        url: &str,
        likes: u32,
    ) -> Result<Self, PostError> {
        let url = Url::parse(url).map_err(|source| PostError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        Ok(Self {
            id: PostId::new(),
            title: title.into(),
            authors: authors.into_iter().map(Into::into).collect(),
            post_type,
            date,
            url,
            likes,
        })
    }

    /// Copy of this post carrying a different like count
    pub fn with_likes(&self, likes: u32) -> Self {
        Self {
            likes,
            ..self.clone()
        }
    }

    /// Whether `other` is this very post, not just a look-alike
    pub fn is_same(&self, other: &Post) -> bool {
        self.id == other.id
    }
}

impl std::fmt::Display for Post {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {} | {} | {} | {} likes | {}",
            self.post_type,
            self.date,
            self.title,
            self.authors.join(", "),
            self.likes,
            self.url
        )
    }
}
