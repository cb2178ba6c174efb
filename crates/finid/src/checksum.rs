//! # National Checksum Dispatcher
//!
//! Selects and runs the country-specific account checksum for a parsed
//! BBAN. Dispatch is on [`ChecksumAlgorithm`], carried by the country
//! spec — never on the country code itself — so countries sharing a rule
//! (San Marino/Italy, Monaco/France) share a match arm.
//!
//! The dispatcher has three outcomes, and callers must be able to tell
//! them apart:
//!
//! | Outcome | Meaning |
//! |---------|---------|
//! | `Ok(Verdict::Passed)` | checked, and the rule holds |
//! | `Ok(Verdict::Unsupported)` | no rule available — *not checked* |
//! | `Err(InvalidBbanChecksum)` | checked, and the rule fails |
//!
//! Germany adds a nested dispatch: the bank code selects the method, and
//! a bank code absent from the method table is `Unsupported`, not a
//! failure.

pub mod belgium;
pub mod france;
pub mod germany;
pub mod italy;

use finid_core::{ChecksumAlgorithm, CountrySpec, FieldRole, ValidationError};

/// Result of a national checksum evaluation that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The national rule was evaluated and holds.
    Passed,
    /// No national rule could be applied; nothing was checked.
    Unsupported,
}

/// Slice a role's content out of the BBAN, or report the layout gap.
///
/// A spec that names an algorithm but lacks one of its fields is a data
/// gap: the checksum is unsupported for that layout, not failed.
fn role_value<'a>(spec: &CountrySpec, bban: &'a str, role: FieldRole) -> Option<&'a str> {
    let value = spec.field_value(role, bban);
    if value.is_none() {
        tracing::warn!(
            country = %spec.country_code,
            role = role.as_str(),
            "layout lacks a field its checksum algorithm needs"
        );
    }
    value
}

/// Run the country's national checksum against a structurally valid BBAN.
///
/// # Errors
///
/// [`ValidationError::InvalidBbanChecksum`] when the selected rule
/// rejects the BBAN. Absence of a rule is the `Ok(Verdict::Unsupported)`
/// outcome, not an error.
pub fn verify_national(spec: &CountrySpec, bban: &str) -> Result<Verdict, ValidationError> {
    let Some(algorithm) = spec.checksum_algorithm else {
        return Ok(Verdict::Unsupported);
    };

    let country = spec.country_code.as_str();
    match algorithm {
        ChecksumAlgorithm::Germany => {
            let (Some(bank), Some(account)) = (
                role_value(spec, bban, FieldRole::BankCode),
                role_value(spec, bban, FieldRole::AccountCode),
            ) else {
                return Ok(Verdict::Unsupported);
            };
            germany::verify(bank, account)
        }
        ChecksumAlgorithm::Italy => {
            let Some(check) = role_value(spec, bban, FieldRole::NationalCheckDigits) else {
                return Ok(Verdict::Unsupported);
            };
            // Everything after the leading check letter, positionally.
            let rest = &bban[check.len()..];
            italy::verify(country, check, rest)?;
            Ok(Verdict::Passed)
        }
        ChecksumAlgorithm::Belgium => {
            let (Some(bank), Some(account), Some(stored)) = (
                role_value(spec, bban, FieldRole::BankCode),
                role_value(spec, bban, FieldRole::AccountCode),
                role_value(spec, bban, FieldRole::NationalCheckDigits),
            ) else {
                return Ok(Verdict::Unsupported);
            };
            belgium::verify(bank, account, stored)?;
            Ok(Verdict::Passed)
        }
        ChecksumAlgorithm::France => {
            let (Some(bank), Some(branch), Some(account), Some(stored)) = (
                role_value(spec, bban, FieldRole::BankCode),
                role_value(spec, bban, FieldRole::BranchCode),
                role_value(spec, bban, FieldRole::AccountCode),
                role_value(spec, bban, FieldRole::NationalCheckDigits),
            ) else {
                return Ok(Verdict::Unsupported);
            };
            france::verify(country, bank, branch, account, stored)?;
            Ok(Verdict::Passed)
        }
    }
}
