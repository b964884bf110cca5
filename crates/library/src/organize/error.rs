//! Error types for the [`organize`](super) module.
//!
//! Uses [`exn`] for automatic location tracking and error tree construction,
//! matching the scheme used across the workspace.

use derive_more::{Display, Error};
use std::io::Error as IoError;
use std::path::PathBuf;

/// An organize error with automatic location tracking via [`exn::Exn`].
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for organize operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Classifies the origin of an organize failure.
#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    /// The filename has no dot-plus-three-letter extension to insert the
    /// copy marker before. Fails only the affected file; its source is left
    /// untouched.
    #[display("no extension found in {}", _0.display())]
    NoExtension(#[error(not(source))] PathBuf),
    /// The destination directory could not be derived or created.
    Destination,
    /// Moving the file failed.
    #[display("I/O error: {_0}")]
    Io(IoError),
}

impl From<IoError> for ErrorKind {
    fn from(err: IoError) -> Self {
        Self::Io(err)
    }
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}
