//! # BBAN Layout Data Model
//!
//! A [`CountrySpec`] describes how one country tiles its BBAN into
//! fields. Field identity is logical ([`FieldRole`]) and placement is
//! physical (`offset`): the two are independent, because several
//! countries order fields unconventionally (Italy's check letter comes
//! first, Poland buries its check digit mid-string).
//!
//! The national checksum is referenced by [`ChecksumAlgorithm`], not by
//! country code — San Marino reuses Italy's rule, Monaco reuses
//! France's. One enum, total matches everywhere: adding an algorithm
//! forces every consumer to handle it at compile time.

use serde::{Deserialize, Serialize};

use crate::charset::CharClass;
use crate::country::CountryCode;

/// Logical identity of a BBAN field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldRole {
    /// Domestic bank identifier.
    BankCode,
    /// Domestic branch identifier (sort code, ABI/CAB, guichet, …).
    BranchCode,
    /// The account number proper.
    AccountCode,
    /// National check digit(s) or check letter.
    NationalCheckDigits,
}

impl FieldRole {
    /// The snake_case identifier for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BankCode => "bank_code",
            Self::BranchCode => "branch_code",
            Self::AccountCode => "account_code",
            Self::NationalCheckDigits => "national_check_digits",
        }
    }
}

impl std::fmt::Display for FieldRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// National checksum algorithm families.
///
/// Countries sharing a rule share a variant; dispatch is always on this
/// enum, never on the country code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChecksumAlgorithm {
    /// Bank-code-indexed weighted-sum methods (nested dispatch).
    Germany,
    /// CIN check letter, odd/even position tables mod 26 (also San Marino).
    Italy,
    /// Bank+account modulo 97, remainder 0 stored as 97.
    Belgium,
    /// RIB key: letter substitution and the 89/15/3 weighted key (also Monaco).
    France,
}

impl ChecksumAlgorithm {
    /// All supported algorithms in canonical order.
    pub fn all() -> &'static [ChecksumAlgorithm] {
        &[Self::Germany, Self::Italy, Self::Belgium, Self::France]
    }

    /// The snake_case identifier for this algorithm.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Germany => "germany",
            Self::Italy => "italy",
            Self::Belgium => "belgium",
            Self::France => "france",
        }
    }
}

impl std::fmt::Display for ChecksumAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ChecksumAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "germany" => Ok(Self::Germany),
            "italy" => Ok(Self::Italy),
            "belgium" => Ok(Self::Belgium),
            "france" => Ok(Self::France),
            other => Err(format!("unknown checksum algorithm: {other}")),
        }
    }
}

/// One field of a BBAN layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BbanField {
    /// Logical identity of the field.
    pub role: FieldRole,
    /// Byte offset of the field within the BBAN.
    pub offset: usize,
    /// Field width in bytes.
    pub length: usize,
    /// Character class the field content must satisfy.
    pub char_class: CharClass,
}

impl BbanField {
    /// The half-open byte range this field occupies in the BBAN.
    pub fn range(&self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.length
    }

    /// Slice this field out of a BBAN string.
    ///
    /// Returns `None` when the BBAN is shorter than the field's range;
    /// callers validate length before slicing.
    pub fn slice<'a>(&self, bban: &'a str) -> Option<&'a str> {
        bban.get(self.range())
    }
}

/// Per-country BBAN layout: the fields, their order, and the national
/// checksum rule, if any.
///
/// Immutable once loaded into a registry snapshot; shared freely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountrySpec {
    /// The country this layout belongs to.
    pub country_code: CountryCode,
    /// Declared BBAN length; fields must tile exactly this many bytes.
    pub bban_length: usize,
    /// Fields in physical (positional) order.
    pub fields: Vec<BbanField>,
    /// National checksum rule, when one exists.
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
}

impl CountrySpec {
    /// Full IBAN length for this country: country code + check digits + BBAN.
    pub fn iban_length(&self) -> usize {
        4 + self.bban_length
    }

    /// Look up a field by its logical role.
    pub fn field(&self, role: FieldRole) -> Option<&BbanField> {
        self.fields.iter().find(|f| f.role == role)
    }

    /// Slice a role's content out of a BBAN string.
    pub fn field_value<'a>(&self, role: FieldRole, bban: &'a str) -> Option<&'a str> {
        self.field(role).and_then(|f| f.slice(bban))
    }

    /// Check that the declared fields tile the declared BBAN length:
    /// contiguous from offset 0, non-overlapping, summing to
    /// `bban_length`, each non-empty.
    pub fn layout_coherent(&self) -> Result<(), String> {
        let mut cursor = 0usize;
        for field in &self.fields {
            if field.length == 0 {
                return Err(format!("field {} has zero length", field.role));
            }
            if field.offset != cursor {
                return Err(format!(
                    "field {} starts at {} but previous field ends at {cursor}",
                    field.role, field.offset
                ));
            }
            cursor += field.length;
        }
        if cursor != self.bban_length {
            return Err(format!(
                "fields cover {cursor} bytes but bban_length is {}",
                self.bban_length
            ));
        }
        Ok(())
    }
}
