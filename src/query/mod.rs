//! Queries over the post catalog.
//!
//! Every query reads the catalog and derives a fresh result; none of them
//! modify it.
//!
//! | Query | Result |
//! |-------|--------|
//! | [`recent_popular`] | popular posts from the recent window, newest first |
//! | [`check_integrity`] | whether every post has a title and the expected host |
//! | [`find_duplicates`] | URL to the posts sharing it |
//! | [`boost_least_liked`] | boosted copies of the least liked posts |
//! | [`last_post`] | the last post, or [`QueryError::EmptySource`] |
//! | [`likes_per_type`] | like totals per category |
//! | [`prolific_authors`] | best post of each prolific author |
//! | [`new_authors`] | catalog authors missing from the known lists |

pub mod authors;
pub mod boost;
pub mod error;
pub mod grouping;
pub mod selection;
pub mod settings;

pub use authors::{new_authors, read_author_file, read_known_authors};
pub use boost::boost_least_liked;
pub use error::QueryError;
pub use grouping::{find_duplicates, likes_per_type, posts_by_author, prolific_authors};
pub use selection::{
    check_integrity, integrity_violations, last_post, recent_popular, IntegrityIssue,
};
pub use settings::QuerySettings;
