//! Date token extraction from filenames.
//!
//! A date token is an 8-character digit run beginning `"20"`, read
//! positionally as year/month/day. The surrounding characters don't matter:
//! `IMG_20230714_party.jpg` and `20230714.jpg` both carry the same token.
//! Classification is filename-text only; file contents and metadata (EXIF
//! dates included) are never inspected.

use crate::consts::DATE_TOKEN_REGEX;

/// A year/month/day triple lifted out of a filename.
///
/// The year always begins `"20"`. Month and day are whatever two digits
/// occupied those positions; whether the month code maps to a real folder
/// label is decided later, at [lookup](fotomes_locale::Language::month_label)
/// time. The day is never validated at all.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DateToken {
    /// Four digits, always beginning `"20"`.
    pub year: String,
    /// Two digits, not constrained to `01`–`12`.
    pub month: String,
    /// Two digits, not constrained to a real calendar day.
    pub day: String,
}

impl DateToken {
    /// Extracts the first date token embedded in `filename`.
    ///
    /// Only the leftmost match is used; any further date-like runs in the
    /// same name are ignored. `None` means the name carries no token and the
    /// file should be left where it is. That is the normal outcome for
    /// anything that isn't a dated photo, not an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use fotomes_library::DateToken;
    ///
    /// let token = DateToken::extract("IMG_20230714_party.jpg").unwrap();
    /// assert_eq!(token.year, "2023");
    /// assert_eq!(token.month, "07");
    /// assert_eq!(token.day, "14");
    /// assert!(DateToken::extract("notes.txt").is_none());
    /// ```
    pub fn extract(filename: &str) -> Option<Self> {
        let token = DATE_TOKEN_REGEX.find(filename)?.as_str();
        Some(Self {
            year: token[..4].to_string(),
            month: token[4..6].to_string(),
            day: token[6..8].to_string(),
        })
    }
}
