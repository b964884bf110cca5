//! Destination path resolution.
//!
//! Derives `<output_root>/<year>/<month>_<localized name>` from a date token
//! and makes sure the directory exists before anything is moved into it.

use crate::error::{ErrorKind, Result};
use crate::token::DateToken;
use exn::{OptionExt, ResultExt};
use fotomes_locale::Language;
use std::fs;
use std::path::{Path, PathBuf};

/// Computes the destination directory for a date token, creating it (and any
/// missing parents) if absent.
///
/// The month segment is `<code>_<localized name>`, e.g. `05_mayo` or
/// `05_may`. Creation is idempotent: directories left over from a previous
/// run are reused as-is, never truncated. Returns the directory path, not
/// including any filename.
///
/// # Errors
/// Returns [`ErrorKind::UnknownMonth`] when the token's month code has no
/// label in `language`, and [`ErrorKind::Destination`] when the directory
/// cannot be created.
pub fn resolve(output_root: &Path, token: &DateToken, language: Language) -> Result<PathBuf> {
    let label = language
        .month_label(&token.month)
        .ok_or_raise(|| ErrorKind::UnknownMonth { month: token.month.clone(), language })?;
    let destination = output_root.join(&token.year).join(format!("{}_{label}", token.month));
    // Creates the year level along the way; existing directories are a no-op.
    fs::create_dir_all(&destination).or_raise(|| ErrorKind::Destination(destination.clone()))?;
    Ok(destination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn token(year: &str, month: &str, day: &str) -> DateToken {
        DateToken { year: year.into(), month: month.into(), day: day.into() }
    }

    #[rstest]
    #[case(Language::Es, "2023", "05", "2023/05_mayo")]
    #[case(Language::En, "2023", "05", "2023/05_may")]
    #[case(Language::Es, "2001", "12", "2001/12_diciembre")]
    #[case(Language::En, "2099", "01", "2099/01_january")]
    fn composes_year_and_month_segments(
        #[case] language: Language,
        #[case] year: &str,
        #[case] month: &str,
        #[case] expected: &str,
    ) {
        let temp_dir = tempfile::tempdir().unwrap();
        let destination = resolve(temp_dir.path(), &token(year, month, "01"), language).unwrap();
        assert_eq!(destination, temp_dir.path().join(expected));
        assert!(destination.is_dir());
    }

    #[test]
    fn creation_is_idempotent() {
        let temp_dir = tempfile::tempdir().unwrap();
        let first = resolve(temp_dir.path(), &token("2022", "05", "01"), Language::En).unwrap();
        // Pre-existing contents survive a second resolution.
        fs::write(first.join("existing.jpg"), b"data").unwrap();
        let second = resolve(temp_dir.path(), &token("2022", "05", "02"), Language::En).unwrap();
        assert_eq!(first, second);
        assert!(first.join("existing.jpg").exists());
    }

    #[rstest]
    #[case("00")]
    #[case("13")]
    #[case("99")]
    fn unmapped_month_code_is_an_error(#[case] month: &str) {
        let temp_dir = tempfile::tempdir().unwrap();
        let err = resolve(temp_dir.path(), &token("2023", month, "01"), Language::Es).unwrap_err();
        assert!(matches!(&*err, ErrorKind::UnknownMonth { .. }));
        // Nothing was created for the unmapped code.
        assert!(!temp_dir.path().join("2023").exists());
    }
}
