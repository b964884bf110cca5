//! Classification and collision-safe moving of a single file.
//!
//! Each file makes exactly one transition: either it is skipped (no date
//! token in its name, or a month code with no label) or it is moved into the
//! `<year>/<month>_<label>` directory derived from its name. When the target
//! name is already occupied, a copy marker is inserted immediately before
//! the extension, escalating through numbered markers until a free name is
//! found.
//!
//! The primary entry point is [`organize_file`]; the returned [`Action`]
//! tells the caller which of the transitions happened.

mod conflict;
pub mod error;
mod file;

pub use self::file::{Action, Skip, organize_file};
pub(crate) use self::file::organize_file_inner;
