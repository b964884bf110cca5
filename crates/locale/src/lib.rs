//! Language tags and localized month labels for destination folder names.
//!
//! Month folders are named `<two-digit month code>_<localized month name>`,
//! and the localized half is looked up from one of the static tables in this
//! crate. The tables are fully populated for every supported language at
//! initialization and never mutated afterwards.

pub mod error;

use crate::error::ErrorKind;
use derive_more::Display;
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::LazyLock;

/// Language used for the localized half of month folder names.
///
/// The set is closed: parsing anything other than the supported tags is
/// rejected with [`ErrorKind::UnsupportedLanguage`]. Selected once at program
/// start and immutable for the rest of the run.
#[derive(Clone, Copy, Debug, Default, Display, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Language {
    /// Spanish month names (`enero` … `diciembre`).
    #[default]
    #[display("es")]
    Es,
    /// English month names (`january` … `december`).
    #[display("en")]
    En,
}

impl Language {
    /// Returns the localized name for a two-digit month code.
    ///
    /// Codes outside `"01".."12"` have no label and return `None`; it is up
    /// to the caller whether that means skipping the file or failing.
    ///
    /// # Examples
    ///
    /// ```
    /// use fotomes_locale::Language;
    /// assert_eq!(Language::Es.month_label("05"), Some("mayo"));
    /// assert_eq!(Language::En.month_label("05"), Some("may"));
    /// assert_eq!(Language::En.month_label("13"), None);
    /// ```
    pub fn month_label(&self, month: &str) -> Option<&'static str> {
        let table = match self {
            Self::Es => &MONTHS_ES,
            Self::En => &MONTHS_EN,
        };
        table.get(month).copied()
    }
}
impl FromStr for Language {
    type Err = error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "es" => Ok(Self::Es),
            "en" => Ok(Self::En),
            other => exn::bail!(ErrorKind::UnsupportedLanguage(other.to_string())),
        }
    }
}

/// Spanish month names, keyed by two-digit month code.
static MONTHS_ES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("01", "enero"),
        ("02", "febrero"),
        ("03", "marzo"),
        ("04", "abril"),
        ("05", "mayo"),
        ("06", "junio"),
        ("07", "julio"),
        ("08", "agosto"),
        ("09", "septiembre"),
        ("10", "octubre"),
        ("11", "noviembre"),
        ("12", "diciembre"),
    ])
});

/// English month names, keyed by two-digit month code.
static MONTHS_EN: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("01", "january"),
        ("02", "february"),
        ("03", "march"),
        ("04", "april"),
        ("05", "may"),
        ("06", "june"),
        ("07", "july"),
        ("08", "august"),
        ("09", "september"),
        ("10", "october"),
        ("11", "november"),
        ("12", "december"),
    ])
});

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Language::Es, "01", "enero")]
    #[case(Language::Es, "09", "septiembre")]
    #[case(Language::Es, "12", "diciembre")]
    #[case(Language::En, "01", "january")]
    #[case(Language::En, "05", "may")]
    #[case(Language::En, "12", "december")]
    fn label_for_valid_code(#[case] language: Language, #[case] code: &str, #[case] expected: &str) {
        assert_eq!(language.month_label(code), Some(expected));
    }

    #[rstest]
    #[case("00")]
    #[case("13")]
    #[case("99")]
    // Codes are looked up as-is; "1" is not a valid two-digit code.
    #[case("1")]
    #[case("")]
    #[case("ab")]
    fn no_label_for_invalid_code(#[case] code: &str) {
        assert_eq!(Language::Es.month_label(code), None);
        assert_eq!(Language::En.month_label(code), None);
    }

    #[test]
    fn every_month_has_a_label_in_both_languages() {
        for month in 1..=12u8 {
            let code = format!("{month:02}");
            assert!(Language::Es.month_label(&code).is_some());
            assert!(Language::En.month_label(&code).is_some());
        }
    }

    #[test]
    fn parses_supported_tags() {
        assert_eq!("es".parse::<Language>().unwrap(), Language::Es);
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
    }

    #[rstest]
    #[case("de")]
    #[case("ES")]
    #[case("english")]
    #[case("")]
    fn rejects_unsupported_tags(#[case] tag: &str) {
        let err = tag.parse::<Language>().unwrap_err();
        assert!(matches!(&*err, ErrorKind::UnsupportedLanguage(_)));
    }

    #[test]
    fn default_is_spanish() {
        assert_eq!(Language::default(), Language::Es);
    }
}
