//! Central European BBAN layouts.
//!
//! Poland and Slovenia embed national check digits without a registered
//! algorithm; their checksum validation reports unsupported.

use finid_core::{CharClass, CountrySpec, FieldRole};

use super::{cc, field};

/// Czechia — 4-digit bank, 16-digit prefixed account.
pub fn czechia() -> CountrySpec {
    CountrySpec {
        country_code: cc("CZ"),
        bban_length: 20,
        fields: vec![
            field(FieldRole::BankCode, 0, 4, CharClass::Digits),
            field(FieldRole::AccountCode, 4, 16, CharClass::Digits),
        ],
        checksum_algorithm: None,
    }
}

/// Hungary — 3-digit bank, 4-digit branch, 17-digit account.
pub fn hungary() -> CountrySpec {
    CountrySpec {
        country_code: cc("HU"),
        bban_length: 24,
        fields: vec![
            field(FieldRole::BankCode, 0, 3, CharClass::Digits),
            field(FieldRole::BranchCode, 3, 4, CharClass::Digits),
            field(FieldRole::AccountCode, 7, 17, CharClass::Digits),
        ],
        checksum_algorithm: None,
    }
}

/// Poland — bank, branch, 1 check digit mid-string, 16-digit account.
pub fn poland() -> CountrySpec {
    CountrySpec {
        country_code: cc("PL"),
        bban_length: 24,
        fields: vec![
            field(FieldRole::BankCode, 0, 3, CharClass::Digits),
            field(FieldRole::BranchCode, 3, 4, CharClass::Digits),
            field(FieldRole::NationalCheckDigits, 7, 1, CharClass::Digits),
            field(FieldRole::AccountCode, 8, 16, CharClass::Digits),
        ],
        checksum_algorithm: None,
    }
}

/// Slovenia — bank, branch, account, 2 trailing national check digits.
pub fn slovenia() -> CountrySpec {
    CountrySpec {
        country_code: cc("SI"),
        bban_length: 15,
        fields: vec![
            field(FieldRole::BankCode, 0, 2, CharClass::Digits),
            field(FieldRole::BranchCode, 2, 3, CharClass::Digits),
            field(FieldRole::AccountCode, 5, 8, CharClass::Digits),
            field(FieldRole::NationalCheckDigits, 13, 2, CharClass::Digits),
        ],
        checksum_algorithm: None,
    }
}

/// Slovakia — 4-digit bank, 16-digit prefixed account.
pub fn slovakia() -> CountrySpec {
    CountrySpec {
        country_code: cc("SK"),
        bban_length: 20,
        fields: vec![
            field(FieldRole::BankCode, 0, 4, CharClass::Digits),
            field(FieldRole::AccountCode, 4, 16, CharClass::Digits),
        ],
        checksum_algorithm: None,
    }
}

/// All central European layouts.
pub fn specs() -> Vec<CountrySpec> {
    vec![czechia(), hungary(), poland(), slovenia(), slovakia()]
}
