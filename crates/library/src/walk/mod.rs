//! Recursive traversal of the input tree.
//!
//! Visits every directory under the input root depth-first, organizing the
//! files at each level before descending into its subdirectories. The whole
//! traversal is strictly sequential: one blocking filesystem call after
//! another, no parallelism across files or branches.

pub mod error;
mod tree;

pub use self::tree::{Summary, walk};
