//! # Bank Registry Resolver
//!
//! Maps (country, domestic bank code) pairs to BIC candidates using the
//! registry's bank directory, and answers the reverse question for a
//! given BIC. The registry is static per process, so candidate sequences
//! are materialized, finite, and order-stable.

use finid_registry::Registry;

use finid_core::ValidationError;

use crate::bic::{Bic, BicParseOptions};

/// Every BIC the directory associates with a bank code, in directory
/// order.
///
/// Rows without a BIC are skipped; rows whose BIC fails structural
/// validation are skipped with a warning rather than poisoning the
/// lookup.
pub fn candidates_in(registry: &Registry, country_code: &str, bank_code: &str) -> Vec<Bic> {
    registry
        .bank_entries(country_code, bank_code)
        .iter()
        .filter_map(|entry| {
            let raw = entry.bic.as_deref()?;
            match Bic::parse_in(registry, raw, BicParseOptions::default()) {
                Ok(bic) => Some(bic),
                Err(error) => {
                    tracing::warn!(
                        bic = raw,
                        bank_code = %entry.bank_code,
                        %error,
                        "skipping malformed BIC in bank directory"
                    );
                    None
                }
            }
        })
        .collect()
}

/// Resolve one BIC for a bank code: the most generic candidate (absent
/// or `XXX` branch), falling back to the first in directory order.
///
/// # Errors
///
/// [`ValidationError::InvalidBankCode`] when the directory has no usable
/// row for the pair.
pub fn resolve_in(
    registry: &Registry,
    country_code: &str,
    bank_code: &str,
) -> Result<Bic, ValidationError> {
    let candidates = candidates_in(registry, country_code, bank_code);
    candidates
        .iter()
        .find(|bic| bic.is_generic())
        .or_else(|| candidates.first())
        .cloned()
        .ok_or_else(|| ValidationError::InvalidBankCode {
            country: country_code.to_string(),
            value: bank_code.to_string(),
        })
}

/// Domestic bank codes the directory maps to a BIC, under 8 ↔ 11
/// equivalence, in directory order.
pub fn domestic_bank_codes_in(registry: &Registry, bic: &Bic) -> Vec<String> {
    let mut codes: Vec<String> = registry
        .all_bank_entries()
        .filter(|entry| {
            entry
                .bic
                .as_deref()
                .and_then(|raw| Bic::parse_in(registry, raw, BicParseOptions::default()).ok())
                .is_some_and(|candidate| candidate.equivalent(bic))
        })
        .map(|entry| entry.bank_code.clone())
        .collect();
    codes.dedup();
    codes
}
