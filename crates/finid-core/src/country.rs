//! # Country Code Newtype
//!
//! ISO 3166-1 alpha-2 shape: exactly two ASCII uppercase letters,
//! validated at construction time. Whether a code is actually *known* is
//! the registry's concern, not this type's — `CountryCode` guarantees
//! shape, the registry guarantees existence.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A two-letter country code, well-formed by construction.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CountryCode(String);

impl CountryCode {
    /// Create a country code, validating the two-uppercase-letter shape.
    ///
    /// Lowercase input is accepted and stored uppercased.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCountryCode`] if the value is
    /// not exactly two ASCII letters.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        let upper = raw.to_ascii_uppercase();
        if upper.len() != 2 || !upper.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(ValidationError::InvalidCountryCode { code: raw });
        }
        Ok(Self(upper))
    }

    /// Access the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for CountryCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for CountryCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for CountryCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_two_uppercase_letters() {
        let cc = CountryCode::new("DE").unwrap();
        assert_eq!(cc.as_str(), "DE");
    }

    #[test]
    fn uppercases_input() {
        let cc = CountryCode::new("fr").unwrap();
        assert_eq!(cc.as_str(), "FR");
    }

    #[test]
    fn rejects_invalid_shapes() {
        assert!(CountryCode::new("").is_err());
        assert!(CountryCode::new("D").is_err());
        assert!(CountryCode::new("DEU").is_err());
        assert!(CountryCode::new("D1").is_err());
        assert!(CountryCode::new("D-").is_err());
    }

    #[test]
    fn ordering_is_lexicographic() {
        let at = CountryCode::new("AT").unwrap();
        let be = CountryCode::new("BE").unwrap();
        assert!(at < be);
    }

    #[test]
    fn serde_roundtrip() {
        let cc = CountryCode::new("NL").unwrap();
        let json = serde_json::to_string(&cc).unwrap();
        assert_eq!(json, "\"NL\"");
        let back: CountryCode = serde_json::from_str(&json).unwrap();
        assert_eq!(cc, back);
    }

    #[test]
    fn deserialize_rejects_invalid() {
        assert!(serde_json::from_str::<CountryCode>("\"D1\"").is_err());
    }
}
