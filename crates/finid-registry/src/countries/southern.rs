//! Southern European BBAN layouts.
//!
//! Italy's check letter (CIN) leads the BBAN — field order is positional,
//! logical identity comes from the role. San Marino shares the Italian
//! rule and layout.

use finid_core::{CharClass, ChecksumAlgorithm, CountrySpec, FieldRole};

use super::{cc, field};

/// Bulgaria — 4-letter bank, 4-digit branch, 10-char account.
pub fn bulgaria() -> CountrySpec {
    CountrySpec {
        country_code: cc("BG"),
        bban_length: 18,
        fields: vec![
            field(FieldRole::BankCode, 0, 4, CharClass::Letters),
            field(FieldRole::BranchCode, 4, 4, CharClass::Digits),
            field(FieldRole::AccountCode, 8, 10, CharClass::Alnum),
        ],
        checksum_algorithm: None,
    }
}

/// Cyprus — 3-digit bank, 5-digit branch, 16-char account.
pub fn cyprus() -> CountrySpec {
    CountrySpec {
        country_code: cc("CY"),
        bban_length: 24,
        fields: vec![
            field(FieldRole::BankCode, 0, 3, CharClass::Digits),
            field(FieldRole::BranchCode, 3, 5, CharClass::Digits),
            field(FieldRole::AccountCode, 8, 16, CharClass::Alnum),
        ],
        checksum_algorithm: None,
    }
}

/// Spain — bank, branch, 2 national check digits mid-string, account.
pub fn spain() -> CountrySpec {
    CountrySpec {
        country_code: cc("ES"),
        bban_length: 20,
        fields: vec![
            field(FieldRole::BankCode, 0, 4, CharClass::Digits),
            field(FieldRole::BranchCode, 4, 4, CharClass::Digits),
            field(FieldRole::NationalCheckDigits, 8, 2, CharClass::Digits),
            field(FieldRole::AccountCode, 10, 10, CharClass::Digits),
        ],
        checksum_algorithm: None,
    }
}

/// Greece — 3-digit bank, 4-digit branch, 16-char account.
pub fn greece() -> CountrySpec {
    CountrySpec {
        country_code: cc("GR"),
        bban_length: 23,
        fields: vec![
            field(FieldRole::BankCode, 0, 3, CharClass::Digits),
            field(FieldRole::BranchCode, 3, 4, CharClass::Digits),
            field(FieldRole::AccountCode, 7, 16, CharClass::Alnum),
        ],
        checksum_algorithm: None,
    }
}

/// Croatia — 7-digit bank, 10-digit account.
pub fn croatia() -> CountrySpec {
    CountrySpec {
        country_code: cc("HR"),
        bban_length: 17,
        fields: vec![
            field(FieldRole::BankCode, 0, 7, CharClass::Digits),
            field(FieldRole::AccountCode, 7, 10, CharClass::Digits),
        ],
        checksum_algorithm: None,
    }
}

/// Italy — leading CIN check letter, ABI, CAB, 12-char account.
pub fn italy() -> CountrySpec {
    CountrySpec {
        country_code: cc("IT"),
        bban_length: 23,
        fields: vec![
            field(FieldRole::NationalCheckDigits, 0, 1, CharClass::Letters),
            field(FieldRole::BankCode, 1, 5, CharClass::Digits),
            field(FieldRole::BranchCode, 6, 5, CharClass::Digits),
            field(FieldRole::AccountCode, 11, 12, CharClass::Alnum),
        ],
        checksum_algorithm: Some(ChecksumAlgorithm::Italy),
    }
}

/// Malta — 4-letter bank, 5-digit branch, 18-char account.
pub fn malta() -> CountrySpec {
    CountrySpec {
        country_code: cc("MT"),
        bban_length: 27,
        fields: vec![
            field(FieldRole::BankCode, 0, 4, CharClass::Letters),
            field(FieldRole::BranchCode, 4, 5, CharClass::Digits),
            field(FieldRole::AccountCode, 9, 18, CharClass::Alnum),
        ],
        checksum_algorithm: None,
    }
}

/// Portugal — bank, branch, account, 2 trailing national check digits.
pub fn portugal() -> CountrySpec {
    CountrySpec {
        country_code: cc("PT"),
        bban_length: 21,
        fields: vec![
            field(FieldRole::BankCode, 0, 4, CharClass::Digits),
            field(FieldRole::BranchCode, 4, 4, CharClass::Digits),
            field(FieldRole::AccountCode, 8, 11, CharClass::Digits),
            field(FieldRole::NationalCheckDigits, 19, 2, CharClass::Digits),
        ],
        checksum_algorithm: None,
    }
}

/// Romania — 4-letter bank, 16-char account.
pub fn romania() -> CountrySpec {
    CountrySpec {
        country_code: cc("RO"),
        bban_length: 20,
        fields: vec![
            field(FieldRole::BankCode, 0, 4, CharClass::Letters),
            field(FieldRole::AccountCode, 4, 16, CharClass::Alnum),
        ],
        checksum_algorithm: None,
    }
}

/// San Marino — Italian layout, Italian CIN rule.
pub fn san_marino() -> CountrySpec {
    CountrySpec {
        country_code: cc("SM"),
        bban_length: 23,
        fields: vec![
            field(FieldRole::NationalCheckDigits, 0, 1, CharClass::Letters),
            field(FieldRole::BankCode, 1, 5, CharClass::Digits),
            field(FieldRole::BranchCode, 6, 5, CharClass::Digits),
            field(FieldRole::AccountCode, 11, 12, CharClass::Alnum),
        ],
        checksum_algorithm: Some(ChecksumAlgorithm::Italy),
    }
}

/// All southern European layouts.
pub fn specs() -> Vec<CountrySpec> {
    vec![
        bulgaria(),
        cyprus(),
        spain(),
        greece(),
        croatia(),
        italy(),
        malta(),
        portugal(),
        romania(),
        san_marino(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn san_marino_shares_the_italian_rule() {
        assert_eq!(
            san_marino().checksum_algorithm,
            Some(ChecksumAlgorithm::Italy)
        );
        assert_eq!(san_marino().fields, italy().fields);
    }

    #[test]
    fn italian_check_letter_precedes_the_bank_code() {
        let spec = italy();
        let check = spec.field(FieldRole::NationalCheckDigits).unwrap();
        let bank = spec.field(FieldRole::BankCode).unwrap();
        assert!(check.offset < bank.offset);
        assert_eq!(check.char_class, CharClass::Letters);
    }

    #[test]
    fn spain_embeds_check_digits_mid_string() {
        let spec = spain();
        let check = spec.field(FieldRole::NationalCheckDigits).unwrap();
        let account = spec.field(FieldRole::AccountCode).unwrap();
        assert!(check.offset < account.offset);
        assert!(spec.checksum_algorithm.is_none());
    }
}
