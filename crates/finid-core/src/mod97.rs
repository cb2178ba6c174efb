//! # ISO 7064 MOD 97-10 Engine
//!
//! The IBAN-wide checksum. The rearranged string `bban + country + check`
//! is read as a decimal number with letters expanded to two digits
//! (`A` → 10 … `Z` → 35) and reduced modulo 97.
//!
//! A 30-character BBAN expands to roughly 60 decimal digits, far past any
//! native integer width, so the reduction is incremental: one character
//! at a time, never materializing the number.

use crate::error::ValidationError;

/// Reduce a rearranged IBAN string modulo 97, incrementally.
///
/// Returns `None` if the input contains a character outside `[0-9A-Z]`.
fn reduce(rearranged: &str) -> Option<u32> {
    let mut acc: u32 = 0;
    for c in rearranged.chars() {
        acc = match c {
            '0'..='9' => (acc * 10 + (c as u32 - '0' as u32)) % 97,
            // A letter contributes two digits at once: A=10 … Z=35.
            'A'..='Z' => (acc * 100 + (c as u32 - 'A' as u32 + 10)) % 97,
            _ => return None,
        };
    }
    Some(acc)
}

/// Compute the two check digits for `country_code` + `bban`.
///
/// Rearranges to `bban + country_code + "00"`, reduces mod 97 and returns
/// `98 - remainder`, zero-padded to two digits.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidStructure`] if either input contains
/// a character outside `[0-9A-Z]`.
pub fn compute_check_digits(country_code: &str, bban: &str) -> Result<String, ValidationError> {
    let rearranged = format!("{bban}{country_code}00");
    let remainder = reduce(&rearranged).ok_or_else(|| ValidationError::InvalidStructure {
        field: "bban",
        value: rearranged.clone(),
    })?;
    Ok(format!("{:02}", 98 - remainder))
}

/// Verify the check digits of a decomposed IBAN.
///
/// Valid iff the rearranged string `bban + country_code + check_digits`
/// reduces to 1 modulo 97. Inputs with characters outside `[0-9A-Z]`
/// simply fail verification.
pub fn verify(country_code: &str, check_digits: &str, bban: &str) -> bool {
    let rearranged = format!("{bban}{country_code}{check_digits}");
    reduce(&rearranged) == Some(1)
}
