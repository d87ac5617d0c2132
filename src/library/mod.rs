//! Post catalog and the built-in sample data.
//!
//! The catalog can also be persisted as JSON:
//!
//! ```text
//! {
//!   "version": 1,
//!   "posts": [
//!     { "id": "...", "title": "...", "authors": ["..."], "post_type": "blog",
//!       "date": "2020-10-15", "url": "https://www.epam.com/...", "likes": 812 }
//!   ]
//! }
//! ```

pub mod catalog;
pub mod sample;

pub use catalog::Catalog;
pub use sample::{sample_catalog, DUPLICATE_PODCAST_TITLE, DUPLICATE_PODCAST_URL};
