//! UI languages and the supported-language set.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// A UI language supported by this version.
///
/// The supported-language set is exactly [`Language::ALL`], so any
/// `Language` value is a valid default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Arabic.
    #[default]
    Ar,
    /// English.
    En,
}

impl Language {
    /// Every supported language.
    pub const ALL: [Self; 2] = [Self::Ar, Self::En];

    /// Two-letter ISO 639-1 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Ar => "ar",
            Self::En => "en",
        }
    }

    /// Whether text in this language runs right to left.
    #[must_use]
    pub const fn is_right_to_left(self) -> bool {
        matches!(self, Self::Ar)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.code())
    }
}

impl FromStr for Language {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|l| l.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::UnknownLanguage(String::from(s)))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_default_is_arabic_and_supported() {
        // Arrange & Act
        let lang = Language::default();

        // Assert
        assert_eq!(lang, Language::Ar);
        assert!(Language::ALL.contains(&lang));
    }

    #[test]
    fn test_codes() {
        // Arrange & Act
        let codes: Vec<_> = Language::ALL.iter().map(|l| l.code()).collect();

        // Assert
        assert_eq!(codes, ["ar", "en"]);
    }

    #[test]
    fn test_from_str() {
        // Arrange & Act & Assert
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
        assert_eq!(" AR ".parse::<Language>().unwrap(), Language::Ar);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_direction() {
        // Arrange & Act & Assert
        assert!(Language::Ar.is_right_to_left());
        assert!(!Language::En.is_right_to_left());
    }
}
