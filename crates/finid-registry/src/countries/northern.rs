//! Northern European BBAN layouts.
//!
//! Norway declares a trailing national check digit but no algorithm is
//! registered for it, so checksum validation reports it as unsupported.

use finid_core::{CharClass, CountrySpec, FieldRole};

use super::{cc, field};

/// Denmark — 4-digit registration number, 10-digit account.
pub fn denmark() -> CountrySpec {
    CountrySpec {
        country_code: cc("DK"),
        bban_length: 14,
        fields: vec![
            field(FieldRole::BankCode, 0, 4, CharClass::Digits),
            field(FieldRole::AccountCode, 4, 10, CharClass::Digits),
        ],
        checksum_algorithm: None,
    }
}

/// Estonia — 2-digit bank prefix, 14-digit account.
pub fn estonia() -> CountrySpec {
    CountrySpec {
        country_code: cc("EE"),
        bban_length: 16,
        fields: vec![
            field(FieldRole::BankCode, 0, 2, CharClass::Digits),
            field(FieldRole::AccountCode, 2, 14, CharClass::Digits),
        ],
        checksum_algorithm: None,
    }
}

/// Finland — 6-digit bank and branch prefix, 8-digit account.
pub fn finland() -> CountrySpec {
    CountrySpec {
        country_code: cc("FI"),
        bban_length: 14,
        fields: vec![
            field(FieldRole::BankCode, 0, 6, CharClass::Digits),
            field(FieldRole::AccountCode, 6, 8, CharClass::Digits),
        ],
        checksum_algorithm: None,
    }
}

/// Iceland — 4-digit bank, 18-digit account (incl. kennitala).
pub fn iceland() -> CountrySpec {
    CountrySpec {
        country_code: cc("IS"),
        bban_length: 22,
        fields: vec![
            field(FieldRole::BankCode, 0, 4, CharClass::Digits),
            field(FieldRole::AccountCode, 4, 18, CharClass::Digits),
        ],
        checksum_algorithm: None,
    }
}

/// Lithuania — 5-digit bank, 11-digit account.
pub fn lithuania() -> CountrySpec {
    CountrySpec {
        country_code: cc("LT"),
        bban_length: 16,
        fields: vec![
            field(FieldRole::BankCode, 0, 5, CharClass::Digits),
            field(FieldRole::AccountCode, 5, 11, CharClass::Digits),
        ],
        checksum_algorithm: None,
    }
}

/// Latvia — 4-letter bank, 13-char account.
pub fn latvia() -> CountrySpec {
    CountrySpec {
        country_code: cc("LV"),
        bban_length: 17,
        fields: vec![
            field(FieldRole::BankCode, 0, 4, CharClass::Letters),
            field(FieldRole::AccountCode, 4, 13, CharClass::Alnum),
        ],
        checksum_algorithm: None,
    }
}

/// Norway — 4-digit bank, 6-digit account, 1 national check digit.
pub fn norway() -> CountrySpec {
    CountrySpec {
        country_code: cc("NO"),
        bban_length: 11,
        fields: vec![
            field(FieldRole::BankCode, 0, 4, CharClass::Digits),
            field(FieldRole::AccountCode, 4, 6, CharClass::Digits),
            field(FieldRole::NationalCheckDigits, 10, 1, CharClass::Digits),
        ],
        checksum_algorithm: None,
    }
}

/// Sweden — 3-digit bank, 17-digit account.
pub fn sweden() -> CountrySpec {
    CountrySpec {
        country_code: cc("SE"),
        bban_length: 20,
        fields: vec![
            field(FieldRole::BankCode, 0, 3, CharClass::Digits),
            field(FieldRole::AccountCode, 3, 17, CharClass::Digits),
        ],
        checksum_algorithm: None,
    }
}

/// All northern European layouts.
pub fn specs() -> Vec<CountrySpec> {
    vec![
        denmark(),
        estonia(),
        finland(),
        iceland(),
        lithuania(),
        latvia(),
        norway(),
        sweden(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn norway_check_digit_has_no_algorithm() {
        let spec = norway();
        assert!(spec.field(FieldRole::NationalCheckDigits).is_some());
        assert!(spec.checksum_algorithm.is_none());
    }
}
