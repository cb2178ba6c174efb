//! # Error Types — Validation Failure Taxonomy
//!
//! One umbrella [`ValidationError`] covers every way an untrusted IBAN or
//! BIC string can fail, so callers can match broadly or on a specific
//! failure stage. All errors use `thiserror` for derive-based `Display`
//! and `Error` implementations.
//!
//! ## Design
//!
//! - Validation is fail-fast: an error always describes the *first*
//!   failing stage, never an aggregate.
//! - [`ValidationError::UnsupportedChecksum`] is not an invalidity
//!   signal. It reports "this national checksum cannot be checked", which
//!   callers must be able to distinguish from "checked and failed".
//! - [`RegistryError`] is separate on purpose: a broken registry layout
//!   is a data bug in the snapshot, not a property of caller input.

use thiserror::Error;

/// The kind of identifier a validation failure refers to.
///
/// Carried by errors that are shared between the IBAN and BIC pipelines
/// so messages stay self-describing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    /// International Bank Account Number (ISO 13616).
    Iban,
    /// Business Identifier Code (ISO 9362).
    Bic,
}

impl std::fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Iban => write!(f, "IBAN"),
            Self::Bic => write!(f, "BIC"),
        }
    }
}

/// Validation failure for an IBAN or BIC built from untrusted input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The two-letter country code does not resolve in the registry.
    #[error("unknown country code: {code:?}")]
    InvalidCountryCode {
        /// The country code as found in the input.
        code: String,
    },

    /// The input has the wrong overall length for its kind and country.
    #[error("invalid {kind} length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Which identifier kind was being parsed.
        kind: IdentifierKind,
        /// Length mandated by the spec for this input.
        expected: usize,
        /// Length actually observed.
        actual: usize,
    },

    /// A field violates its declared character class or layout.
    #[error("invalid structure in field {field}: {value:?}")]
    InvalidStructure {
        /// Name of the offending field (e.g. `account_code`, `location_code`).
        field: &'static str,
        /// The offending slice of the input.
        value: String,
    },

    /// The IBAN-wide mod-97 check digits do not verify.
    #[error("check digits do not satisfy mod-97 verification: {code}")]
    InvalidChecksumDigits {
        /// The normalized IBAN that failed.
        code: String,
    },

    /// The country-specific national checksum failed.
    #[error("national checksum mismatch in BBAN {bban} ({country})")]
    InvalidBbanChecksum {
        /// Country whose rule was applied.
        country: String,
        /// The BBAN that failed the rule.
        bban: String,
    },

    /// A bank code supplied for generation does not fit its field, or a
    /// bank code has no registry entry during BIC resolution.
    #[error("invalid bank code {value:?} for {country}")]
    InvalidBankCode {
        /// Country the bank code was interpreted against.
        country: String,
        /// The offending bank code.
        value: String,
    },

    /// A branch code supplied for generation does not fit its field, or
    /// was supplied for a country whose BBAN has no branch field.
    #[error("invalid branch code {value:?} for {country}")]
    InvalidBranchCode {
        /// Country the branch code was interpreted against.
        country: String,
        /// The offending branch code.
        value: String,
    },

    /// An account code supplied for generation does not fit its field.
    #[error("invalid account code {value:?} for {country}")]
    InvalidAccountCode {
        /// Country the account code was interpreted against.
        country: String,
        /// The offending account code.
        value: String,
    },

    /// No national checksum algorithm is available for this input.
    ///
    /// Raised when the country registers no algorithm, or when the
    /// algorithm's own dispatch cannot cover the input (Germany: bank
    /// code absent from the method table). Distinct from
    /// [`ValidationError::InvalidBbanChecksum`]: the checksum was never
    /// evaluated.
    #[error("no national checksum algorithm for {country} (bank code {bank_code:?})")]
    UnsupportedChecksum {
        /// Country whose BBAN could not be checked.
        country: String,
        /// Bank code involved, when the gap is bank-specific.
        bank_code: Option<String>,
    },
}

/// Data incoherence detected while building a [registry snapshot].
///
/// These indicate bugs in registry data, not bad caller input, and are
/// only surfaced at snapshot construction time.
///
/// [registry snapshot]: https://docs.rs/finid-registry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Two country specs share a country code.
    #[error("duplicate country spec: {country}")]
    DuplicateCountry {
        /// The doubly-declared country code.
        country: String,
    },

    /// A spec's fields do not tile its declared BBAN length.
    #[error("incoherent BBAN layout for {country}: {reason}")]
    IncoherentLayout {
        /// Country with the broken layout.
        country: String,
        /// What is wrong with the field list.
        reason: String,
    },

    /// A bank directory row references a country with no spec.
    #[error("bank entry {bank_code} references unknown country {country}")]
    UnknownBankCountry {
        /// Country code on the bank row.
        country: String,
        /// Bank code on the bank row.
        bank_code: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_context() {
        let err = ValidationError::InvalidCountryCode {
            code: "DX".to_string(),
        };
        assert!(err.to_string().contains("DX"));

        let err = ValidationError::InvalidLength {
            kind: IdentifierKind::Iban,
            expected: 22,
            actual: 21,
        };
        let msg = err.to_string();
        assert!(msg.contains("IBAN"));
        assert!(msg.contains("22"));
        assert!(msg.contains("21"));
    }

    #[test]
    fn unsupported_is_not_invalid() {
        // The two checksum outcomes must stay distinguishable.
        let unsupported = ValidationError::UnsupportedChecksum {
            country: "DE".to_string(),
            bank_code: Some("99999999".to_string()),
        };
        let failed = ValidationError::InvalidBbanChecksum {
            country: "DE".to_string(),
            bban: "290909008840017000".to_string(),
        };
        assert_ne!(unsupported, failed);
    }

    #[test]
    fn errors_are_cloneable_and_comparable() {
        let err = ValidationError::InvalidStructure {
            field: "account_code",
            value: "12a".to_string(),
        };
        assert_eq!(err.clone(), err);
    }
}
