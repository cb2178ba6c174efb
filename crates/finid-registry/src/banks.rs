//! # Builtin Bank Directory
//!
//! Domestic bank code → BIC rows, keyed the way each country's BBAN bank
//! code field reads (digits for most, 4-letter codes for GB/NL-style
//! layouts). Row order within one bank code is meaningful: resolution
//! returns candidates in directory order.

use finid_core::{BankEntry, CountryCode};

use crate::countries::cc;

fn entry(country: &str, bank_code: &str, bic: &str, name: &str) -> BankEntry {
    BankEntry::new(cc(country), bank_code, bic, name)
}

fn entry_without_bic(country: &str, bank_code: &str, name: &str) -> BankEntry {
    BankEntry {
        country_code: cc(country),
        bank_code: bank_code.to_string(),
        bic: None,
        bank_name: Some(name.to_string()),
    }
}

/// German Bankleitzahl rows.
pub fn germany() -> Vec<BankEntry> {
    vec![
        entry("DE", "10010010", "PBNKDEFF", "Postbank"),
        entry("DE", "37040044", "COBADEFFXXX", "Commerzbank"),
        entry("DE", "43060967", "GENODEM1GLS", "GLS Gemeinschaftsbank"),
        entry("DE", "50010517", "INGDDEFFXXX", "ING-DiBa"),
        // Regional institute without SWIFT connectivity.
        entry_without_bic("DE", "21750000", "Sparkasse Nordfriesland"),
    ]
}

/// French code banque rows. BNP Paribas deliberately lists a branch BIC
/// ahead of the head-office BIC: resolution must prefer the generic one
/// regardless of directory order.
pub fn france() -> Vec<BankEntry> {
    vec![
        entry("FR", "30004", "BNPAFRPPIFN", "BNP Paribas (international clients)"),
        entry("FR", "30004", "BNPAFRPPXXX", "BNP Paribas"),
        entry("FR", "30004", "BNPAFRPPCRN", "BNP Paribas (Créteil)"),
        entry("FR", "30002", "CRLYFRPPXXX", "LCL Crédit Lyonnais"),
        entry("FR", "30003", "SOGEFRPPXXX", "Société Générale"),
    ]
}

/// Remaining builtin rows.
pub fn other() -> Vec<BankEntry> {
    vec![
        entry("AT", "20111", "GIBAATWWXXX", "Erste Bank"),
        entry("BE", "001", "GEBABEBBXXX", "BNP Paribas Fortis"),
        entry("BE", "000", "BPOTBEB1XXX", "bpost bank"),
        // Head office BIC carries a real branch suffix; there is no
        // generic variant for this clearing number.
        entry("CH", "00700", "ZKBKCHZZ80A", "Zürcher Kantonalbank"),
        entry("ES", "2100", "CAIXESBBXXX", "CaixaBank"),
        entry("GB", "NWBK", "NWBKGB2LXXX", "NatWest"),
        entry("GB", "BARC", "BARCGB22XXX", "Barclays"),
        entry("IT", "01005", "BNLIITRRXXX", "Banca Nazionale del Lavoro"),
        entry("IT", "02008", "UNCRITMMXXX", "UniCredit"),
        entry("NL", "ABNA", "ABNANL2AXXX", "ABN AMRO"),
        entry("NL", "INGB", "INGBNL2AXXX", "ING"),
        entry("PT", "0033", "BCOMPTPLXXX", "Millennium BCP"),
    ]
}

/// All builtin bank directory rows.
pub fn all_entries() -> Vec<BankEntry> {
    let mut all = Vec::new();
    all.extend(germany());
    all.extend(france());
    all.extend(other());
    all
}

/// Countries with at least one directory row (used by coverage tests).
pub fn covered_countries() -> Vec<CountryCode> {
    let mut countries: Vec<CountryCode> = all_entries()
        .into_iter()
        .map(|e| e.country_code)
        .collect();
    countries.sort();
    countries.dedup();
    countries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bnp_lists_multiple_bics_for_one_bank_code() {
        let rows: Vec<_> = france()
            .into_iter()
            .filter(|e| e.bank_code == "30004")
            .collect();
        assert!(rows.len() >= 2);
        for row in &rows {
            let bic = row.bic.as_deref().unwrap();
            assert!(bic.starts_with("BNPA"), "unexpected BIC {bic}");
        }
    }

    #[test]
    fn directory_rows_reference_plausible_bics() {
        for row in all_entries() {
            if let Some(bic) = &row.bic {
                assert!(
                    bic.len() == 8 || bic.len() == 11,
                    "bad BIC length in directory: {bic}"
                );
                assert_eq!(
                    &bic[4..6],
                    row.country_code.as_str(),
                    "BIC country mismatch for {bic}"
                );
            }
        }
    }

    #[test]
    fn at_least_one_row_has_no_bic() {
        assert!(all_entries().iter().any(|e| e.bic.is_none()));
    }
}
