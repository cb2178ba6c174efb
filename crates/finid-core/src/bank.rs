//! # Bank Directory Rows
//!
//! One row per (domestic bank code, BIC) association. A domestic bank
//! code may own several rows — head office plus branch BIC variants —
//! and a row may carry no BIC at all (banks without SWIFT connectivity).

use serde::{Deserialize, Serialize};

use crate::country::CountryCode;

/// A read-only bank directory row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankEntry {
    /// Country the domestic bank code belongs to.
    pub country_code: CountryCode,
    /// Domestic bank code as it appears in the BBAN's bank code field.
    pub bank_code: String,
    /// The BIC associated with this row, if the bank has one.
    pub bic: Option<String>,
    /// Human-readable institution name.
    pub bank_name: Option<String>,
}

impl BankEntry {
    /// Convenience constructor for a row with a BIC.
    pub fn new(
        country_code: CountryCode,
        bank_code: impl Into<String>,
        bic: impl Into<String>,
        bank_name: impl Into<String>,
    ) -> Self {
        Self {
            country_code,
            bank_code: bank_code.into(),
            bic: Some(bic.into()),
            bank_name: Some(bank_name.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_roundtrip() {
        let entry = BankEntry::new(
            CountryCode::new("DE").unwrap(),
            "37040044",
            "COBADEFFXXX",
            "Commerzbank",
        );
        let json = serde_json::to_string(&entry).unwrap();
        let back: BankEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, back);
    }
}
