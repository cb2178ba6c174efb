//! # Character Classes and Input Normalization
//!
//! Every BBAN field and BIC component declares one of three character
//! classes. Validation is byte-oriented: identifiers are ASCII by
//! definition, so anything outside ASCII fails its class.

use serde::{Deserialize, Serialize};

/// Character class a field's content must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharClass {
    /// ASCII digits `0-9`.
    Digits,
    /// ASCII uppercase letters `A-Z`.
    Letters,
    /// ASCII digits or uppercase letters.
    Alnum,
}

impl CharClass {
    /// Whether a single character belongs to this class.
    pub fn contains(&self, c: char) -> bool {
        match self {
            Self::Digits => c.is_ascii_digit(),
            Self::Letters => c.is_ascii_uppercase(),
            Self::Alnum => c.is_ascii_digit() || c.is_ascii_uppercase(),
        }
    }

    /// Whether every character of `s` belongs to this class.
    pub fn matches(&self, s: &str) -> bool {
        s.chars().all(|c| self.contains(c))
    }

    /// The snake_case identifier for this class.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Digits => "digits",
            Self::Letters => "letters",
            Self::Alnum => "alnum",
        }
    }
}

impl std::fmt::Display for CharClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalize raw identifier input: strip all whitespace and uppercase.
///
/// This is the only transformation applied before validation; characters
/// that remain invalid after normalization are the caller's problem and
/// will fail the structural checks.
pub fn clean(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_class() {
        assert!(CharClass::Digits.matches("0123456789"));
        assert!(!CharClass::Digits.matches("012a"));
        assert!(!CharClass::Digits.matches("01 2"));
    }

    #[test]
    fn letters_class() {
        assert!(CharClass::Letters.matches("NWBK"));
        assert!(!CharClass::Letters.matches("nwbk"));
        assert!(!CharClass::Letters.matches("NW1K"));
    }

    #[test]
    fn alnum_class() {
        assert!(CharClass::Alnum.matches("12345678901"));
        assert!(CharClass::Alnum.matches("0500013M026"));
        assert!(!CharClass::Alnum.matches("0500013m026"));
        assert!(!CharClass::Alnum.matches("0500-13"));
    }

    #[test]
    fn empty_string_matches_every_class() {
        assert!(CharClass::Digits.matches(""));
        assert!(CharClass::Letters.matches(""));
        assert!(CharClass::Alnum.matches(""));
    }

    #[test]
    fn clean_strips_whitespace_and_uppercases() {
        assert_eq!(clean("de89 3704 0044 0532 0130 00"), "DE89370400440532013000");
        assert_eq!(clean("\tBE68\n5390 0754 7034 "), "BE68539007547034");
        assert_eq!(clean(""), "");
    }

    #[test]
    fn clean_preserves_invalid_characters() {
        // Normalization is not sanitization.
        assert_eq!(clean("de-89"), "DE-89");
    }
}
