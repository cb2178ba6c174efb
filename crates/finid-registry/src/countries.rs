//! # Builtin Country BBAN Layouts
//!
//! Per-region data modules, one constructor per country, aggregated by
//! [`all_specs`]. Layouts follow the published ISO 13616 registry; every
//! one is exercised against a published sample IBAN in the facade
//! crate's integration tests.
//!
//! | Region | Countries |
//! |--------|-----------|
//! | western | AT BE CH DE FR GB IE LU MC NL |
//! | northern | DK EE FI IS LT LV NO SE |
//! | southern | BG CY ES GR HR IT MT PT RO SM |
//! | central | CZ HU PL SI SK |

use finid_core::{BbanField, CharClass, CountryCode, CountrySpec, FieldRole};

pub mod central;
pub mod northern;
pub mod southern;
pub mod western;

/// Build a [`CountryCode`] from a static two-letter literal.
pub(crate) fn cc(code: &str) -> CountryCode {
    CountryCode::new(code).expect("static country code literal is well-formed")
}

/// Shorthand for a [`BbanField`] row in the layout tables.
pub(crate) fn field(
    role: FieldRole,
    offset: usize,
    length: usize,
    char_class: CharClass,
) -> BbanField {
    BbanField {
        role,
        offset,
        length,
        char_class,
    }
}

/// All builtin country specs, in no particular order.
pub fn all_specs() -> Vec<CountrySpec> {
    let mut all = Vec::new();
    all.extend(western::specs());
    all.extend(northern::specs());
    all.extend(southern::specs());
    all.extend(central::specs());
    all
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn covers_expected_countries() {
        let codes: BTreeSet<String> = all_specs()
            .iter()
            .map(|s| s.country_code.as_str().to_string())
            .collect();
        for code in [
            "AT", "BE", "BG", "CH", "CY", "CZ", "DE", "DK", "EE", "ES", "FI", "FR", "GB", "GR",
            "HR", "HU", "IE", "IS", "IT", "LT", "LU", "LV", "MC", "MT", "NL", "NO", "PL", "PT",
            "RO", "SE", "SI", "SK", "SM",
        ] {
            assert!(codes.contains(code), "missing layout for {code}");
        }
        assert_eq!(codes.len(), all_specs().len(), "duplicate country spec");
    }

    #[test]
    fn every_layout_is_coherent() {
        for spec in all_specs() {
            assert_eq!(
                spec.layout_coherent(),
                Ok(()),
                "broken layout for {}",
                spec.country_code
            );
        }
    }

    #[test]
    fn every_layout_has_bank_and_account_fields() {
        for spec in all_specs() {
            assert!(
                spec.field(FieldRole::BankCode).is_some(),
                "{} has no bank code field",
                spec.country_code
            );
            assert!(
                spec.field(FieldRole::AccountCode).is_some(),
                "{} has no account code field",
                spec.country_code
            );
        }
    }

    #[test]
    fn iban_lengths_match_published_registry() {
        // Cross-checked against the ISO 13616 length table.
        let expected = [
            ("AT", 20),
            ("BE", 16),
            ("BG", 22),
            ("CH", 21),
            ("CY", 28),
            ("CZ", 24),
            ("DE", 22),
            ("DK", 18),
            ("EE", 20),
            ("ES", 24),
            ("FI", 18),
            ("FR", 27),
            ("GB", 22),
            ("GR", 27),
            ("HR", 21),
            ("HU", 28),
            ("IE", 22),
            ("IS", 26),
            ("IT", 27),
            ("LT", 20),
            ("LU", 20),
            ("LV", 21),
            ("MC", 27),
            ("MT", 31),
            ("NL", 18),
            ("NO", 15),
            ("PL", 28),
            ("PT", 25),
            ("RO", 24),
            ("SE", 24),
            ("SI", 19),
            ("SK", 24),
            ("SM", 27),
        ];
        let specs = all_specs();
        for (code, len) in expected {
            let spec = specs
                .iter()
                .find(|s| s.country_code.as_str() == code)
                .unwrap_or_else(|| panic!("missing {code}"));
            assert_eq!(spec.iban_length(), len, "wrong IBAN length for {code}");
        }
    }

    #[test]
    fn no_iban_exceeds_iso_maximum() {
        for spec in all_specs() {
            assert!(spec.iban_length() <= 34, "{} too long", spec.country_code);
        }
    }
}
