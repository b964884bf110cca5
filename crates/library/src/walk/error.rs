//! Error types for the [`walk`](super) module.
//!
//! Uses [`exn`] for automatic location tracking and error tree construction,
//! matching the scheme used across the workspace.

use derive_more::{Display, Error};
use std::path::PathBuf;

/// A walk error with automatic location tracking via [`exn::Exn`].
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for walk operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Classifies the origin of a walk failure.
#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    /// Listing a directory's entries failed.
    #[display("could not list directory {}", _0.display())]
    ReadDir(#[error(not(source))] PathBuf),
    /// A file could not be organized into its destination.
    Organize,
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            _ => false,
        }
    }
}
