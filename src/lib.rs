//! postquery - functional-style queries over a catalog of posts
//!
//! A small catalog of blog, interview and podcast posts, and a set of
//! queries that filter, group, reduce and deduplicate it.
//!
//! # Modules
//!
//! - `domain`: Data structures (Post, PostType, PostId)
//! - `library`: The ordered catalog and the built-in sample data
//! - `query`: The catalog queries and their settings
//! - `config`: Config file and environment resolution
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Popular posts from the three months before a date
//! postquery recent --date 2020-10-26
//!
//! # Posts sharing a URL
//! postquery duplicates
//!
//! # Authors missing from the known lists
//! postquery new-authors --dir ./authors
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod library;
pub mod query;

// Re-export main types at crate root for convenience
pub use domain::{Post, PostError, PostId, PostType};
pub use library::{sample_catalog, Catalog};
pub use query::{QueryError, QuerySettings};
