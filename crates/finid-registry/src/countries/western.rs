//! Western European BBAN layouts.
//!
//! Germany, Belgium, and France carry national checksum algorithms;
//! Monaco shares the French RIB key rule.

use finid_core::{CharClass, ChecksumAlgorithm, CountrySpec, FieldRole};

use super::{cc, field};

/// Austria — 5-digit Bankleitzahl, 11-digit account.
pub fn austria() -> CountrySpec {
    CountrySpec {
        country_code: cc("AT"),
        bban_length: 16,
        fields: vec![
            field(FieldRole::BankCode, 0, 5, CharClass::Digits),
            field(FieldRole::AccountCode, 5, 11, CharClass::Digits),
        ],
        checksum_algorithm: None,
    }
}

/// Belgium — 3-digit bank, 7-digit account, 2 national check digits.
pub fn belgium() -> CountrySpec {
    CountrySpec {
        country_code: cc("BE"),
        bban_length: 12,
        fields: vec![
            field(FieldRole::BankCode, 0, 3, CharClass::Digits),
            field(FieldRole::AccountCode, 3, 7, CharClass::Digits),
            field(FieldRole::NationalCheckDigits, 10, 2, CharClass::Digits),
        ],
        checksum_algorithm: Some(ChecksumAlgorithm::Belgium),
    }
}

/// Switzerland — 5-digit clearing number, 12-char account.
pub fn switzerland() -> CountrySpec {
    CountrySpec {
        country_code: cc("CH"),
        bban_length: 17,
        fields: vec![
            field(FieldRole::BankCode, 0, 5, CharClass::Digits),
            field(FieldRole::AccountCode, 5, 12, CharClass::Alnum),
        ],
        checksum_algorithm: None,
    }
}

/// Germany — 8-digit Bankleitzahl, 10-digit account; bank-code-indexed
/// checksum methods.
pub fn germany() -> CountrySpec {
    CountrySpec {
        country_code: cc("DE"),
        bban_length: 18,
        fields: vec![
            field(FieldRole::BankCode, 0, 8, CharClass::Digits),
            field(FieldRole::AccountCode, 8, 10, CharClass::Digits),
        ],
        checksum_algorithm: Some(ChecksumAlgorithm::Germany),
    }
}

/// France — banque, guichet, alphanumeric account, 2-digit RIB key.
pub fn france() -> CountrySpec {
    CountrySpec {
        country_code: cc("FR"),
        bban_length: 23,
        fields: vec![
            field(FieldRole::BankCode, 0, 5, CharClass::Digits),
            field(FieldRole::BranchCode, 5, 5, CharClass::Digits),
            field(FieldRole::AccountCode, 10, 11, CharClass::Alnum),
            field(FieldRole::NationalCheckDigits, 21, 2, CharClass::Digits),
        ],
        checksum_algorithm: Some(ChecksumAlgorithm::France),
    }
}

/// United Kingdom — 4-letter bank, 6-digit sort code, 8-digit account.
pub fn united_kingdom() -> CountrySpec {
    CountrySpec {
        country_code: cc("GB"),
        bban_length: 18,
        fields: vec![
            field(FieldRole::BankCode, 0, 4, CharClass::Letters),
            field(FieldRole::BranchCode, 4, 6, CharClass::Digits),
            field(FieldRole::AccountCode, 10, 8, CharClass::Digits),
        ],
        checksum_algorithm: None,
    }
}

/// Ireland — same shape as the United Kingdom.
pub fn ireland() -> CountrySpec {
    CountrySpec {
        country_code: cc("IE"),
        bban_length: 18,
        fields: vec![
            field(FieldRole::BankCode, 0, 4, CharClass::Letters),
            field(FieldRole::BranchCode, 4, 6, CharClass::Digits),
            field(FieldRole::AccountCode, 10, 8, CharClass::Digits),
        ],
        checksum_algorithm: None,
    }
}

/// Luxembourg — 3-digit bank, 13-char account.
pub fn luxembourg() -> CountrySpec {
    CountrySpec {
        country_code: cc("LU"),
        bban_length: 16,
        fields: vec![
            field(FieldRole::BankCode, 0, 3, CharClass::Digits),
            field(FieldRole::AccountCode, 3, 13, CharClass::Alnum),
        ],
        checksum_algorithm: None,
    }
}

/// Monaco — French layout, French RIB key.
pub fn monaco() -> CountrySpec {
    CountrySpec {
        country_code: cc("MC"),
        bban_length: 23,
        fields: vec![
            field(FieldRole::BankCode, 0, 5, CharClass::Digits),
            field(FieldRole::BranchCode, 5, 5, CharClass::Digits),
            field(FieldRole::AccountCode, 10, 11, CharClass::Alnum),
            field(FieldRole::NationalCheckDigits, 21, 2, CharClass::Digits),
        ],
        checksum_algorithm: Some(ChecksumAlgorithm::France),
    }
}

/// Netherlands — 4-letter bank, 10-digit account.
pub fn netherlands() -> CountrySpec {
    CountrySpec {
        country_code: cc("NL"),
        bban_length: 14,
        fields: vec![
            field(FieldRole::BankCode, 0, 4, CharClass::Letters),
            field(FieldRole::AccountCode, 4, 10, CharClass::Digits),
        ],
        checksum_algorithm: None,
    }
}

/// All western European layouts.
pub fn specs() -> Vec<CountrySpec> {
    vec![
        austria(),
        belgium(),
        switzerland(),
        germany(),
        france(),
        united_kingdom(),
        ireland(),
        luxembourg(),
        monaco(),
        netherlands(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monaco_shares_the_french_rule() {
        assert_eq!(
            monaco().checksum_algorithm,
            Some(ChecksumAlgorithm::France)
        );
        assert_eq!(monaco().fields, france().fields);
    }

    #[test]
    fn germany_dispatches_by_bank_code() {
        assert_eq!(
            germany().checksum_algorithm,
            Some(ChecksumAlgorithm::Germany)
        );
    }

    #[test]
    fn belgium_embeds_check_digits_at_the_tail() {
        let spec = belgium();
        let check = spec.field(FieldRole::NationalCheckDigits).unwrap();
        assert_eq!(check.offset, 10);
        assert_eq!(check.length, 2);
    }
}
