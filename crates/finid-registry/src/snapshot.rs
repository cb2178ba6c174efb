//! # Immutable Registry Snapshot
//!
//! A [`Registry`] bundles the country layout table and the bank
//! directory into one immutable value. Validators receive it by shared
//! reference, which keeps the dependency explicit and lets tests
//! substitute a purpose-built snapshot.
//!
//! The builtin snapshot is constructed once, on first use, behind a
//! `OnceLock`; after that it is read without synchronization from any
//! number of threads. There is no mutation API — replacing registry data
//! means building a new snapshot value.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use finid_core::{BankEntry, CountryCode, CountrySpec, RegistryError};

use crate::{banks, countries};

static BUILTIN: OnceLock<Registry> = OnceLock::new();

/// Immutable country layout and bank directory snapshot.
#[derive(Debug, Clone)]
pub struct Registry {
    specs: BTreeMap<CountryCode, CountrySpec>,
    bank_rows: BTreeMap<(CountryCode, String), Vec<BankEntry>>,
    // Row count, kept for logging; the map above groups by bank code.
    row_count: usize,
}

impl Registry {
    /// Build a snapshot from layout specs and bank directory rows,
    /// validating data coherence.
    ///
    /// # Errors
    ///
    /// Returns a [`RegistryError`] when two specs share a country code,
    /// a spec's fields do not tile its declared BBAN length, or a bank
    /// row references a country with no spec.
    pub fn from_parts(
        specs: Vec<CountrySpec>,
        bank_entries: Vec<BankEntry>,
    ) -> Result<Self, RegistryError> {
        let mut spec_map = BTreeMap::new();
        for spec in specs {
            spec.layout_coherent()
                .map_err(|reason| RegistryError::IncoherentLayout {
                    country: spec.country_code.to_string(),
                    reason,
                })?;
            let code = spec.country_code.clone();
            if spec_map.insert(code.clone(), spec).is_some() {
                return Err(RegistryError::DuplicateCountry {
                    country: code.to_string(),
                });
            }
        }

        let mut bank_rows: BTreeMap<(CountryCode, String), Vec<BankEntry>> = BTreeMap::new();
        let mut row_count = 0usize;
        for entry in bank_entries {
            if !spec_map.contains_key(&entry.country_code) {
                return Err(RegistryError::UnknownBankCountry {
                    country: entry.country_code.to_string(),
                    bank_code: entry.bank_code.clone(),
                });
            }
            let key = (entry.country_code.clone(), entry.bank_code.clone());
            bank_rows.entry(key).or_default().push(entry);
            row_count += 1;
        }

        Ok(Self {
            specs: spec_map,
            bank_rows,
            row_count,
        })
    }

    /// The process-wide builtin snapshot, initialized on first access.
    pub fn builtin() -> &'static Registry {
        BUILTIN.get_or_init(|| {
            let registry = Registry::from_parts(countries::all_specs(), banks::all_entries())
                .expect("builtin registry data is coherent");
            tracing::debug!(
                countries = registry.specs.len(),
                bank_rows = registry.row_count,
                "builtin registry snapshot initialized"
            );
            registry
        })
    }

    /// Look up the BBAN layout for a country code string.
    ///
    /// Malformed codes resolve to `None`, same as unknown ones.
    pub fn spec(&self, country_code: &str) -> Option<&CountrySpec> {
        let code = CountryCode::new(country_code).ok()?;
        self.specs.get(&code)
    }

    /// Bank directory rows for a (country, domestic bank code) pair, in
    /// directory order. Empty when nothing matches.
    pub fn bank_entries(&self, country_code: &str, bank_code: &str) -> &[BankEntry] {
        CountryCode::new(country_code)
            .ok()
            .and_then(|code| {
                self.bank_rows
                    .get(&(code, bank_code.to_string()))
                    .map(Vec::as_slice)
            })
            .unwrap_or(&[])
    }

    /// Every country layout in the snapshot, ordered by country code.
    pub fn country_specs(&self) -> impl Iterator<Item = &CountrySpec> {
        self.specs.values()
    }

    /// Every bank directory row in the snapshot.
    pub fn all_bank_entries(&self) -> impl Iterator<Item = &BankEntry> {
        self.bank_rows.values().flatten()
    }
}
