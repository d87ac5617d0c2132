//! Errors returned by catalog queries.

use thiserror::Error;

/// Errors that can occur while querying the catalog
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("No such element: catalog is empty")]
    EmptySource,
}
