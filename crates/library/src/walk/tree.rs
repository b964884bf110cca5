use crate::error::{ErrorKind as LibraryErrorKind, Result as LibraryResult};
use crate::organize::error::ErrorKind as OrganizeErrorKind;
use crate::organize::{Action, Skip, organize_file_inner};
use crate::walk::error::{ErrorKind, Result as WalkResult};
use exn::ResultExt;
use fotomes_locale::Language;
use std::fs;
use std::ops::Deref;
use std::path::{Path, PathBuf};

/// Counters for one run over an input tree.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Summary {
    /// Files moved under their original name.
    pub moved: u64,
    /// Files moved under a copy-marked name after a collision.
    pub disambiguated: u64,
    /// Files left in place: no date token, or no label for the month code.
    pub skipped: u64,
    /// Files whose collision could not be disambiguated.
    pub failed: u64,
}

/// Walks every directory under `input_root` depth-first, moving each dated
/// file into its destination under `output_root`.
///
/// Files at each level are processed before descending into that level's
/// subdirectories; order among siblings is filesystem enumeration order.
/// Symlinks and other non-file, non-directory entries are ignored, so the
/// traversal never follows a link cycle.
///
/// A file whose collision cannot be disambiguated (no recognizable
/// extension) is logged and counted in [`Summary::failed`]; the walk
/// continues with the next file. Everything else that goes wrong, such as a
/// directory that cannot be listed or a move that fails at the filesystem
/// level, is fatal and propagates.
///
/// # Errors
/// Returns [`LibraryErrorKind::Walk`] raised from an inner
/// [walk error](ErrorKind).
pub fn walk(input_root: &Path, output_root: &Path, language: Language) -> LibraryResult<Summary> {
    let mut summary = Summary::default();
    walk_dir(input_root, output_root, language, &mut summary).or_raise(|| LibraryErrorKind::Walk)?;
    Ok(summary)
}

fn walk_dir(
    dir: &Path,
    output_root: &Path,
    language: Language,
    summary: &mut Summary,
) -> WalkResult<()> {
    tracing::info!(path = %dir.display(), "checking directory");
    let mut files: Vec<PathBuf> = Vec::new();
    let mut subdirs: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(dir).or_raise(|| ErrorKind::ReadDir(dir.to_path_buf()))? {
        let entry = entry.or_raise(|| ErrorKind::ReadDir(dir.to_path_buf()))?;
        let file_type = entry.file_type().or_raise(|| ErrorKind::ReadDir(dir.to_path_buf()))?;
        if file_type.is_dir() {
            subdirs.push(entry.path());
        } else if file_type.is_file() {
            files.push(entry.path());
        }
        // Anything else is most likely a broken symlink; leave it alone.
    }

    for file in files {
        match organize_file_inner(&file, output_root, language) {
            Ok(Action::Moved(to)) => {
                tracing::debug!(from = %file.display(), to = %to.display(), "moved");
                summary.moved += 1;
            },
            Ok(Action::Disambiguated(to)) => {
                tracing::debug!(from = %file.display(), to = %to.display(), "moved under copy-marked name");
                summary.disambiguated += 1;
            },
            Ok(Action::Skipped(Skip::NoDateToken)) => {
                tracing::debug!(path = %file.display(), "no date token, skipping");
                summary.skipped += 1;
            },
            Ok(Action::Skipped(Skip::UnknownMonth(month))) => {
                tracing::warn!(path = %file.display(), month = %month, "month code has no label, skipping");
                summary.skipped += 1;
            },
            // A missing extension fails only the affected file.
            Err(e) if matches!(e.deref(), OrganizeErrorKind::NoExtension(_)) => {
                tracing::error!(path = %file.display(), "{}", &*e);
                summary.failed += 1;
            },
            Err(e) => return Err(e).or_raise(|| ErrorKind::Organize),
        }
    }

    for subdir in subdirs {
        walk_dir(&subdir, output_root, language, summary)?;
    }
    Ok(())
}
