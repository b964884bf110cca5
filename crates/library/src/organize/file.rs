use crate::dest;
use crate::error::{ErrorKind as LibraryErrorKind, Result as LibraryResult};
use crate::organize::conflict::place;
use crate::organize::error::{ErrorKind as OrganizeErrorKind, Result as OrganizeResult};
use crate::token::DateToken;
use exn::ResultExt;
use fotomes_locale::Language;
use std::ops::Deref;
use std::path::{Path, PathBuf};

/// The outcome of (successfully) processing a single file.
///
/// Each variant carries what the caller needs to log or count: the new
/// location for the two moved variants, and the reason for the skipped one.
#[derive(Debug)]
pub enum Action {
    /// File was moved to its destination under its original name.
    Moved(PathBuf),
    /// The original name was taken at the destination; the file was moved
    /// under a copy-marked name instead.
    Disambiguated(PathBuf),
    /// File was left untouched at its original path.
    Skipped(Skip),
}

/// Why a file was left in place.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Skip {
    /// The filename carries no embedded date token.
    NoDateToken,
    /// The token's month code has no label in the selected language.
    UnknownMonth(String),
}

/// Classifies a file by the date token in its name and moves it into the
/// matching `<year>/<month>_<label>` directory under `output_root`.
///
/// Names without a token, and tokens whose month code has no label in
/// `language`, leave the file in place and report [`Action::Skipped`];
/// neither is an error. A name collision at the destination is resolved by
/// inserting a copy marker before the extension; see the module docs for
/// the exact scheme.
///
/// # Errors
/// Returns [`LibraryErrorKind::Organize`] raised from an inner
/// [`OrganizeErrorKind`]: [`NoExtension`](OrganizeErrorKind::NoExtension)
/// when a collision cannot be disambiguated, or
/// [`Io`](OrganizeErrorKind::Io)/[`Destination`](OrganizeErrorKind::Destination)
/// for filesystem failures.
pub fn organize_file(path: &Path, output_root: &Path, language: Language) -> LibraryResult<Action> {
    organize_file_inner(path, output_root, language).or_raise(|| LibraryErrorKind::Organize)
}

pub(crate) fn organize_file_inner(
    path: &Path,
    output_root: &Path,
    language: Language,
) -> OrganizeResult<Action> {
    // A non-UTF8 name cannot contain a date token; treat it like any other
    // name without one.
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return Ok(Action::Skipped(Skip::NoDateToken));
    };
    let Some(token) = DateToken::extract(name) else {
        return Ok(Action::Skipped(Skip::NoDateToken));
    };
    let destination = match dest::resolve(output_root, &token, language) {
        Ok(destination) => destination,
        // An unmapped month code is a property of the filename, not an
        // operational failure. Leave the file alone.
        Err(e) if matches!(e.deref(), LibraryErrorKind::UnknownMonth { .. }) => {
            return Ok(Action::Skipped(Skip::UnknownMonth(token.month)));
        },
        Err(e) => return Err(e).or_raise(|| OrganizeErrorKind::Destination),
    };
    place(path, &destination, name)
}
