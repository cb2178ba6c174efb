//! # BIC Entity
//!
//! ISO 9362 Business Identifier Code: 4-character business party prefix,
//! 2-letter country code, 2-character location code, optional 3-character
//! branch code. ISO 9362:2022 allows digits in the prefix; the stricter
//! legacy SWIFT convention (letters only) is available behind an option.
//!
//! An 8-character BIC addresses the head office and is equivalent to the
//! same code with an explicit `XXX` branch for comparison and lookup,
//! but its canonical string keeps the original length.

use finid_core::{clean, CharClass, IdentifierKind, ValidationError};
use finid_registry::Registry;

use crate::resolver;

/// The branch code addressing the head office.
pub const PRIMARY_BRANCH: &str = "XXX";

/// Options for BIC parsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BicParseOptions {
    /// Restrict the business party prefix to letters, per the legacy
    /// SWIFT convention, instead of the ISO 9362:2022 alphanumeric rule.
    pub enforce_swift_compliance: bool,
}

impl BicParseOptions {
    /// Options with the legacy SWIFT prefix restriction enabled.
    pub fn swift_compliant() -> Self {
        Self {
            enforce_swift_compliance: true,
        }
    }
}

/// A validated Business Identifier Code.
///
/// Equality, ordering, and hashing are by the canonical (unformatted,
/// uppercase) string; use [`Bic::equivalent`] for 8 ↔ 11 comparison.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bic {
    code: String,
}

impl Bic {
    /// Parse and validate a BIC under ISO 9362:2022 rules, against the
    /// builtin registry.
    ///
    /// # Errors
    ///
    /// The first failing stage's [`ValidationError`]: length, country
    /// code, then component character classes.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        Self::parse_in(Registry::builtin(), value, BicParseOptions::default())
    }

    /// Parse with explicit [`BicParseOptions`], against the builtin
    /// registry.
    pub fn parse_with(value: &str, options: BicParseOptions) -> Result<Self, ValidationError> {
        Self::parse_in(Registry::builtin(), value, options)
    }

    /// Parse against an explicit registry snapshot.
    pub fn parse_in(
        registry: &Registry,
        value: &str,
        options: BicParseOptions,
    ) -> Result<Self, ValidationError> {
        let code = clean(value);
        if code.len() != 8 && code.len() != 11 {
            return Err(ValidationError::InvalidLength {
                kind: IdentifierKind::Bic,
                expected: if code.len() < 8 { 8 } else { 11 },
                actual: code.len(),
            });
        }

        let country = code.get(4..6).unwrap_or("");
        if registry.spec(country).is_none() {
            return Err(ValidationError::InvalidCountryCode {
                code: country.to_string(),
            });
        }

        let prefix = code.get(0..4).unwrap_or("");
        let prefix_class = if options.enforce_swift_compliance {
            CharClass::Letters
        } else {
            CharClass::Alnum
        };
        if prefix.len() != 4 || !prefix_class.matches(prefix) {
            return Err(ValidationError::InvalidStructure {
                field: "business_party_prefix",
                value: prefix.to_string(),
            });
        }

        let location = code.get(6..8).unwrap_or("");
        if location.len() != 2 || !CharClass::Alnum.matches(location) {
            return Err(ValidationError::InvalidStructure {
                field: "location_code",
                value: location.to_string(),
            });
        }

        if code.len() == 11 {
            let branch = code.get(8..11).unwrap_or("");
            if branch.len() != 3 || !CharClass::Alnum.matches(branch) {
                return Err(ValidationError::InvalidStructure {
                    field: "branch_code",
                    value: branch.to_string(),
                });
            }
        }

        Ok(Self { code })
    }

    /// Deferred-error construction: never fails, collects the outcome.
    pub fn parse_lenient(value: &str) -> BicCandidate {
        BicCandidate::parse_in(Registry::builtin(), value, BicParseOptions::default())
    }

    /// Resolve the most generic BIC for a domestic bank code, against
    /// the builtin registry.
    ///
    /// # Errors
    ///
    /// [`ValidationError::InvalidBankCode`] when the directory has no
    /// row for the pair.
    pub fn from_bank_code(country_code: &str, bank_code: &str) -> Result<Self, ValidationError> {
        resolver::resolve_in(Registry::builtin(), country_code, bank_code)
    }

    /// Resolve against an explicit registry snapshot.
    pub fn from_bank_code_in(
        registry: &Registry,
        country_code: &str,
        bank_code: &str,
    ) -> Result<Self, ValidationError> {
        resolver::resolve_in(registry, country_code, bank_code)
    }

    /// Every BIC the directory associates with a domestic bank code, in
    /// directory order; materialized, possibly empty.
    pub fn candidates_from_bank_code(country_code: &str, bank_code: &str) -> Vec<Self> {
        resolver::candidates_in(Registry::builtin(), country_code, bank_code)
    }

    /// Candidates against an explicit registry snapshot.
    pub fn candidates_from_bank_code_in(
        registry: &Registry,
        country_code: &str,
        bank_code: &str,
    ) -> Vec<Self> {
        resolver::candidates_in(registry, country_code, bank_code)
    }

    /// The 4-character business party prefix.
    pub fn business_party_prefix(&self) -> &str {
        &self.code[0..4]
    }

    /// Alias for [`Bic::business_party_prefix`], matching common usage.
    pub fn bank_code(&self) -> &str {
        self.business_party_prefix()
    }

    /// The ISO country code.
    pub fn country_code(&self) -> &str {
        &self.code[4..6]
    }

    /// The 2-character location code.
    pub fn location_code(&self) -> &str {
        &self.code[6..8]
    }

    /// The branch code, when the 11-character form carries one.
    pub fn branch_code(&self) -> Option<&str> {
        self.code.get(8..11)
    }

    /// Whether this BIC addresses the head office: no branch code, or
    /// the explicit `XXX` primary branch.
    pub fn is_generic(&self) -> bool {
        matches!(self.branch_code(), None | Some(PRIMARY_BRANCH))
    }

    /// Whether two BICs address the same party, treating the 8-character
    /// form as carrying an implicit `XXX` branch.
    pub fn equivalent(&self, other: &Bic) -> bool {
        self.code[0..8] == other.code[0..8]
            && self.branch_code().unwrap_or(PRIMARY_BRANCH)
                == other.branch_code().unwrap_or(PRIMARY_BRANCH)
    }

    /// Domestic bank codes the directory maps to this BIC, using the
    /// builtin registry.
    pub fn domestic_bank_codes(&self) -> Vec<String> {
        self.domestic_bank_codes_in(Registry::builtin())
    }

    /// Domestic bank codes against an explicit registry snapshot.
    pub fn domestic_bank_codes_in(&self, registry: &Registry) -> Vec<String> {
        resolver::domestic_bank_codes_in(registry, self)
    }

    /// Length of the canonical code (8 or 11).
    pub fn len(&self) -> usize {
        self.code.len()
    }

    /// A validated BIC is never empty.
    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    /// The canonical code string.
    pub fn as_str(&self) -> &str {
        &self.code
    }
}

impl PartialEq<str> for Bic {
    fn eq(&self, other: &str) -> bool {
        self.code == other
    }
}

impl PartialEq<&str> for Bic {
    fn eq(&self, other: &&str) -> bool {
        self.code == *other
    }
}

impl std::fmt::Display for Bic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.code)
    }
}

impl std::str::FromStr for Bic {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Bic {
    fn as_ref(&self) -> &str {
        &self.code
    }
}

impl serde::Serialize for Bic {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.code)
    }
}

impl<'de> serde::Deserialize<'de> for Bic {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Outcome of the deferred-error BIC construction mode.
#[derive(Debug, Clone)]
pub struct BicCandidate {
    code: String,
    outcome: Result<Bic, ValidationError>,
}

impl BicCandidate {
    /// Normalize and validate, never failing.
    pub fn parse(value: &str) -> Self {
        Self::parse_in(Registry::builtin(), value, BicParseOptions::default())
    }

    /// Normalize and validate against an explicit registry and options.
    pub fn parse_in(registry: &Registry, value: &str, options: BicParseOptions) -> Self {
        let code = clean(value);
        let outcome = Bic::parse_in(registry, &code, options);
        Self { code, outcome }
    }

    /// Whether the input validated.
    pub fn is_valid(&self) -> bool {
        self.outcome.is_ok()
    }

    /// The collected validation error, when invalid.
    pub fn validation_error(&self) -> Option<&ValidationError> {
        self.outcome.as_ref().err()
    }

    /// The validated entity, when valid.
    pub fn bic(&self) -> Option<&Bic> {
        self.outcome.as_ref().ok()
    }

    /// The normalized input, valid or not.
    pub fn as_str(&self) -> &str {
        &self.code
    }

    /// Convert into the ordinary fail-fast result.
    pub fn into_result(self) -> Result<Bic, ValidationError> {
        self.outcome
    }
}

impl std::fmt::Display for BicCandidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.code)
    }
}
