//! Errors surfaced when parsing user-facing names into the crate's closed enums.
//!
//! Everything else in the crate reports "nothing happened" through plain `bool`s (adding a
//! duplicate, removing a missing value) so this stays small.

use thiserror::Error;

/// The error type for this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The given name isn't one of the [`Traversal`][crate::traversal::Traversal] kinds.
    #[error("invalid traversal type provided: {0:?}")]
    InvalidTraversal(String),

    /// The given name isn't one of the [`Sorter`][crate::sort::Sorter] algorithms.
    #[error("invalid sorter provided: {0:?}")]
    InvalidSorter(String),
}

/// Shorthand for results with this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
