//! Site languages and the language-preference cookie contract

use serde::{Deserialize, Serialize};

/// Name of the persisted language-preference cookie
pub const LANGUAGE_COOKIE: &str = "language";

/// Cookie lifetime in seconds (one year), refreshed on each navigation
pub const LANGUAGE_COOKIE_MAX_AGE: u64 = 365 * 24 * 60 * 60;

/// Supported site languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Fr,
}

impl Language {
    /// Language code as it appears in URLs and the cookie value
    pub fn as_str(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
        }
    }

    /// Parse a language code. Anything other than an exact "en"/"fr"
    /// yields None; callers fall back to the site default.
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::En),
            "fr" => Some(Language::Fr),
            _ => None,
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::En
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_codes() {
        assert_eq!(Language::parse("en"), Some(Language::En));
        assert_eq!(Language::parse("fr"), Some(Language::Fr));
    }

    #[test]
    fn test_parse_rejects_everything_else() {
        assert_eq!(Language::parse("EN"), None);
        assert_eq!(Language::parse("fr-FR"), None);
        assert_eq!(Language::parse("de"), None);
        assert_eq!(Language::parse(""), None);
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::default(), Language::En);
    }
}
