//! Locale Error Types
//!
//! Structured errors using `exn` for automatic location tracking and error
//! tree construction, following the same scheme as the other crates in this
//! workspace.

use derive_more::{Display, Error};

/// A locale error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for locale operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The language tag is not one of the supported set.
    #[display("unsupported language tag: {_0:?}")]
    UnsupportedLanguage(#[error(not(source))] String),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // A language tag is either supported or it's not.
        false
    }
}
