//! Domain types for postquery.
//!
//! - Post: one blog, interview or podcast record
//! - PostType: the closed set of categories
//! - PostId: identity that distinguishes look-alike posts

pub mod post;

pub use post::{Post, PostError, PostId, PostType};
