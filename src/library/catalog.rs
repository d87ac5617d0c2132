//! Catalog of posts every query runs against.
//!
//! Simple JSON-backed, insertion-ordered list.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::debug;

use crate::domain::{Post, PostId, PostType};

/// Ordered collection of posts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Catalog format version
    pub version: u32,

    /// Posts in insertion order
    pub posts: Vec<Post>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self {
            version: 1,
            posts: Vec::new(),
        }
    }

    /// Create a catalog holding `posts` in the given order
    pub fn from_posts(posts: impl IntoIterator<Item = Post>) -> Self {
        Self {
            version: 1,
            posts: posts.into_iter().collect(),
        }
    }

    /// Load a catalog from a JSON file
    ///
    /// A missing file yields an empty catalog.
    pub async fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "Catalog file missing, starting empty");
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read catalog: {}", path.display()))?;

        let catalog: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse catalog JSON: {}", path.display()))?;

        debug!(path = %path.display(), posts = catalog.len(), "Loaded catalog");
        Ok(catalog)
    }

    /// Save the catalog as pretty-printed JSON
    pub async fn save(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await.with_context(|| {
                    format!("Failed to create catalog directory: {}", parent.display())
                })?;
            }
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)
            .await
            .with_context(|| format!("Failed to write catalog: {}", path.display()))?;

        Ok(())
    }

    /// Append a post
    pub fn push(&mut self, post: Post) {
        self.posts.push(post);
    }

    /// Get a post by identity
    pub fn get(&self, id: &PostId) -> Option<&Post> {
        self.posts.iter().find(|p| &p.id == id)
    }

    /// Iterate posts in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Post> {
        self.posts.iter()
    }

    /// All posts in insertion order
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Posts of one category, in insertion order
    pub fn filter_by_type(&self, post_type: PostType) -> Vec<&Post> {
        self.posts
            .iter()
            .filter(|post| post.post_type == post_type)
            .collect()
    }

    /// Get the number of posts
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Post;
    type IntoIter = std::slice::Iter<'a, Post>;

    fn into_iter(self) -> Self::IntoIter {
        self.posts.iter()
    }
}

impl FromIterator<Post> for Catalog {
    fn from_iter<I: IntoIterator<Item = Post>>(iter: I) -> Self {
        Self::from_posts(iter)
    }
}
