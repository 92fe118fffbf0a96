use std::fmt;

use crate::errors::{AppError, AppResult};

/// Closed set of languages the enrichment pipeline supports. Adding a
/// language means adding a variant, which forces every match site to handle
/// it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Language {
    French,
    English,
}

impl Language {
    /// Parses a two-letter wire code. Anything outside the supported set is
    /// rejected before generation work starts.
    pub fn from_code(code: &str) -> AppResult<Self> {
        match code {
            "fr" => Ok(Language::French),
            "en" => Ok(Language::English),
            other => Err(AppError::UnsupportedLanguage(other.to_string())),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::French => "fr",
            Language::English => "en",
        }
    }

    /// Full lowercase name, as substituted into prompt path templates.
    pub fn full_name(&self) -> &'static str {
        match self {
            Language::French => "french",
            Language::English => "english",
        }
    }

    pub fn all() -> [Language; 2] {
        [Language::French, Language::English]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_code_accepts_supported_languages() {
        assert_eq!(Language::from_code("fr").unwrap(), Language::French);
        assert_eq!(Language::from_code("en").unwrap(), Language::English);
    }

    #[test]
    fn from_code_rejects_unsupported_languages() {
        for code in ["de", "es", "FR", "", "english"] {
            let result = Language::from_code(code);
            assert!(
                matches!(result, Err(AppError::UnsupportedLanguage(ref c)) if c == code),
                "expected UnsupportedLanguage for {code:?}"
            );
        }
    }

    #[test]
    fn code_and_full_name_round_trip() {
        for language in Language::all() {
            assert_eq!(Language::from_code(language.code()).unwrap(), language);
            assert!(!language.full_name().is_empty());
        }
    }
}
