use crate::consts::EXTENSION_REGEX;
use crate::organize::Action;
use crate::organize::error::{ErrorKind, Result};
use std::fs;
use std::io;
use std::path::Path;

/// Marker inserted before the extension on the first collision.
const COPY_MARKER: &str = "_copy";

/// Moves `source` into `destination_dir`, keeping `name` when it is free.
///
/// When the name is taken, the file is moved under a disambiguated name
/// instead: `_copy` inserted immediately before the extension, then
/// `_copy2`, `_copy3`, … until a free name is found. The extension is the
/// **first** match of a literal dot followed by exactly three alphabetic
/// characters; a name with no such match fails with
/// [`ErrorKind::NoExtension`] and the source is left untouched.
pub(crate) fn place(source: &Path, destination_dir: &Path, name: &str) -> Result<Action> {
    let candidate = destination_dir.join(name);
    if !candidate.exists() {
        relocate(source, &candidate)?;
        return Ok(Action::Moved(candidate));
    }
    let Some((stem, rest)) = split_at_extension(name) else {
        exn::bail!(ErrorKind::NoExtension(source.to_path_buf()));
    };
    let mut attempt: u32 = 1;
    loop {
        let disambiguated = match attempt {
            1 => format!("{stem}{COPY_MARKER}{rest}"),
            n => format!("{stem}{COPY_MARKER}{n}{rest}"),
        };
        let candidate = destination_dir.join(disambiguated);
        if !candidate.exists() {
            relocate(source, &candidate)?;
            return Ok(Action::Disambiguated(candidate));
        }
        attempt += 1;
    }
}

/// Splits a filename at its extension: the first `\.[a-zA-Z]{3}` match.
///
/// The split is positional, mirroring where the marker lands: `photo.jpeg`
/// becomes `("photo", ".jpeg")` (the match is `.jpe`, the trailing `g` rides
/// along in the remainder) and `archive.tar.gz` becomes
/// `("archive", ".tar.gz")`.
fn split_at_extension(name: &str) -> Option<(&str, &str)> {
    let found = EXTENSION_REGEX.find(name)?;
    Some((&name[..found.start()], &name[found.start()..]))
}

/// Moves a file, falling back to copy-then-delete when the destination sits
/// on a different filesystem. The source is removed only after the copy has
/// succeeded.
fn relocate(source: &Path, destination: &Path) -> Result<()> {
    match fs::rename(source, destination) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            fs::copy(source, destination).map_err(ErrorKind::Io)?;
            fs::remove_file(source).map_err(ErrorKind::Io)?;
            Ok(())
        },
        Err(e) => exn::bail!(ErrorKind::Io(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("photo.jpg", "photo", ".jpg")]
    #[case("photo.jpeg", "photo", ".jpeg")]
    #[case("archive.tar.gz", "archive", ".tar.gz")]
    #[case("UPPER.JPG", "UPPER", ".JPG")]
    // The first dot-plus-three-letters run wins, wherever it falls.
    #[case("dotted.name.png", "dotted", ".name.png")]
    #[case(".gitignore_20230101.jpg", "", ".gitignore_20230101.jpg")]
    fn splits_at_first_three_letter_extension(
        #[case] name: &str,
        #[case] stem: &str,
        #[case] rest: &str,
    ) {
        assert_eq!(split_at_extension(name), Some((stem, rest)));
    }

    #[rstest]
    #[case("noextension")]
    #[case("short.js")]
    #[case("numbers.mp4")]
    #[case("trailingdot.")]
    fn no_extension_to_split_at(#[case] name: &str) {
        assert_eq!(split_at_extension(name), None);
    }

    #[test]
    fn escalates_through_numbered_markers() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        for occupant in ["a20220501.jpg", "a20220501_copy.jpg", "a20220501_copy2.jpg"] {
            fs::write(output.path().join(occupant), b"occupied").unwrap();
        }
        let source = input.path().join("a20220501.jpg");
        fs::write(&source, b"incoming").unwrap();

        let action = place(&source, output.path(), "a20220501.jpg").unwrap();
        let expected = output.path().join("a20220501_copy3.jpg");
        assert!(matches!(action, Action::Disambiguated(ref to) if *to == expected));
        assert_eq!(fs::read(expected).unwrap(), b"incoming");
        assert!(!source.exists());
    }

    #[test]
    fn free_name_moves_without_marker() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        let source = input.path().join("a20220501.jpg");
        fs::write(&source, b"incoming").unwrap();

        let action = place(&source, output.path(), "a20220501.jpg").unwrap();
        assert!(matches!(action, Action::Moved(ref to) if *to == output.path().join("a20220501.jpg")));
        assert!(!source.exists());
    }
}
