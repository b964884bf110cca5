use regex::Regex;
use std::sync::LazyLock;

macro_rules! regex {
    ($name:ident, $regex:expr) => {
        pub(crate) static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($regex).unwrap());
    };
}

// An 8-digit run starting "20". The century window is the only validation
// performed here; the month and day digits are accepted as-is.
regex!(DATE_TOKEN_REGEX, r"20[0-9]{6}");
// A literal dot followed by exactly three alphabetic characters.
regex!(EXTENSION_REGEX, r"\.[a-zA-Z]{3}");
