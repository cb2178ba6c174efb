//! # BBAN Parser/Validator
//!
//! Splits a raw BBAN against its country's layout and validates each
//! field's character class. Slicing is positional; which slice means
//! what comes from the field roles, so layouts where the check letter or
//! branch code precedes the bank code need no special casing.

use finid_core::{
    clean, CountryCode, CountrySpec, FieldRole, IdentifierKind, ValidationError,
};
use finid_registry::Registry;

use crate::checksum::{self, Verdict};

/// A structurally valid BBAN, tied to the country it was parsed against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bban {
    raw: String,
    country: CountryCode,
}

/// Validate a raw BBAN string against a layout: length, then each
/// field's character class, fail-fast in positional order.
pub(crate) fn validate_structure(spec: &CountrySpec, raw: &str) -> Result<(), ValidationError> {
    if raw.len() != spec.bban_length {
        return Err(ValidationError::InvalidLength {
            kind: IdentifierKind::Iban,
            expected: spec.bban_length,
            actual: raw.len(),
        });
    }
    for field in &spec.fields {
        // Fields tile the checked length; slicing only fails when a
        // non-ASCII byte sequence breaks the char boundaries.
        let Some(value) = field.slice(raw) else {
            return Err(ValidationError::InvalidStructure {
                field: field.role.as_str(),
                value: raw.to_string(),
            });
        };
        if !field.char_class.matches(value) {
            return Err(ValidationError::InvalidStructure {
                field: field.role.as_str(),
                value: value.to_string(),
            });
        }
    }
    Ok(())
}

impl Bban {
    /// Parse and validate a BBAN against the builtin registry.
    ///
    /// # Errors
    ///
    /// [`ValidationError::InvalidCountryCode`] for unknown countries,
    /// [`ValidationError::InvalidLength`] and
    /// [`ValidationError::InvalidStructure`] for layout violations.
    pub fn parse(country_code: &str, raw: &str) -> Result<Self, ValidationError> {
        Self::parse_in(Registry::builtin(), country_code, raw)
    }

    /// Parse and validate a BBAN against an explicit registry snapshot.
    pub fn parse_in(
        registry: &Registry,
        country_code: &str,
        raw: &str,
    ) -> Result<Self, ValidationError> {
        let spec = registry
            .spec(country_code)
            .ok_or_else(|| ValidationError::InvalidCountryCode {
                code: country_code.to_string(),
            })?;
        let raw = clean(raw);
        validate_structure(spec, &raw)?;
        Ok(Self {
            raw,
            country: spec.country_code.clone(),
        })
    }

    /// The normalized BBAN string.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The country this BBAN was parsed against.
    pub fn country_code(&self) -> &CountryCode {
        &self.country
    }

    /// BBAN length in bytes.
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// A BBAN is never empty; present for `len`/`is_empty` pairing.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Slice a field's content by role, resolving the layout from the
    /// given registry.
    pub fn field_in<'a>(&'a self, registry: &Registry, role: FieldRole) -> Option<&'a str> {
        registry
            .spec(self.country.as_str())
            .and_then(|spec| spec.field_value(role, &self.raw))
    }

    /// Slice a field's content by role, using the builtin registry.
    pub fn field(&self, role: FieldRole) -> Option<&str> {
        self.field_in(Registry::builtin(), role)
    }

    /// Run the national checksum for this BBAN.
    ///
    /// # Errors
    ///
    /// [`ValidationError::InvalidBbanChecksum`] when the national rule
    /// rejects the BBAN. [`Verdict::Unsupported`] means nothing was
    /// checked.
    pub fn national_checksum_in(&self, registry: &Registry) -> Result<Verdict, ValidationError> {
        match registry.spec(self.country.as_str()) {
            Some(spec) => checksum::verify_national(spec, &self.raw),
            None => Ok(Verdict::Unsupported),
        }
    }
}

impl std::fmt::Display for Bban {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_slices_by_role() {
        let bban = Bban::parse("DE", "370400440532013000").unwrap();
        assert_eq!(bban.field(FieldRole::BankCode), Some("37040044"));
        assert_eq!(bban.field(FieldRole::AccountCode), Some("0532013000"));
        assert_eq!(bban.field(FieldRole::BranchCode), None);
        assert_eq!(bban.len(), 18);
    }

    #[test]
    fn normalizes_input() {
        let bban = Bban::parse("DE", "3704 0044 0532 0130 00").unwrap();
        assert_eq!(bban.as_str(), "370400440532013000");
    }

    #[test]
    fn positional_slicing_handles_leading_check_letter() {
        let bban = Bban::parse("IT", "X0542811101000000123456").unwrap();
        assert_eq!(bban.field(FieldRole::NationalCheckDigits), Some("X"));
        assert_eq!(bban.field(FieldRole::BankCode), Some("05428"));
        assert_eq!(bban.field(FieldRole::BranchCode), Some("11101"));
        assert_eq!(bban.field(FieldRole::AccountCode), Some("000000123456"));
    }

    #[test]
    fn unknown_country_is_rejected() {
        let err = Bban::parse("DX", "370400440532013000").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidCountryCode { .. }));
    }

    #[test]
    fn wrong_length_is_rejected() {
        let err = Bban::parse("DE", "37040044053201300").unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidLength {
                expected: 18,
                actual: 17,
                ..
            }
        ));
    }

    #[test]
    fn character_class_violation_names_the_field() {
        let err = Bban::parse("DE", "37040044053201300A").unwrap_err();
        match err {
            ValidationError::InvalidStructure { field, .. } => {
                assert_eq!(field, "account_code");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        // GB bank codes are letters; digits there are structural errors too.
        let err = Bban::parse("GB", "123456161331926819").unwrap_err();
        match err {
            ValidationError::InvalidStructure { field, .. } => {
                assert_eq!(field, "bank_code");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn national_checksum_is_optional_dispatch() {
        let checked = Bban::parse("BE", "539007547034").unwrap();
        assert_eq!(
            checked.national_checksum_in(Registry::builtin()).unwrap(),
            Verdict::Passed
        );

        let unchecked = Bban::parse("NL", "ABNA0417164300").unwrap();
        assert_eq!(
            unchecked.national_checksum_in(Registry::builtin()).unwrap(),
            Verdict::Unsupported
        );
    }
}
