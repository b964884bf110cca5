//! Library Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction. The walker and the per-file
//! organize step carry their own error kinds; the variants here classify
//! which of the two failed, plus the failures of destination resolution
//! itself.

use derive_more::{Display, Error};
use fotomes_locale::Language;
use std::path::PathBuf;

/// A library error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    /// The month code has no label in the selected language.
    #[display("no {language} label for month code {month:?}")]
    UnknownMonth {
        /// The two-digit code lifted out of the filename.
        month: String,
        /// The language whose table was consulted.
        language: Language,
    },
    /// A destination directory could not be created.
    #[display("could not create destination directory: {}", _0.display())]
    Destination(#[error(not(source))] PathBuf),
    /// Organizing a single file failed.
    #[display("failed to organize file into its destination")]
    Organize,
    /// Walking the input tree failed.
    #[display("directory walk failed")]
    Walk,
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            _ => false,
        }
    }
}
