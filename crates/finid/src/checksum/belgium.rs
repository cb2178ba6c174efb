//! # Belgian National Check Digits
//!
//! The bank code and account number concatenate to a ten-digit number;
//! its remainder modulo 97 is the stored two-digit check value, with
//! remainder 0 stored as 97 — a stored value of 00 never occurs.

use finid_core::ValidationError;

/// Compute the two-digit check value for bank code + account number.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidStructure`] on non-digit input.
pub fn compute(bank_code: &str, account_code: &str) -> Result<u32, ValidationError> {
    let mut acc: u32 = 0;
    for c in bank_code.chars().chain(account_code.chars()) {
        let digit = c.to_digit(10).ok_or(ValidationError::InvalidStructure {
            field: "account_code",
            value: format!("{bank_code}{account_code}"),
        })?;
        acc = (acc * 10 + digit) % 97;
    }
    // Remainder 0 is stored as 97, never 00.
    Ok(if acc == 0 { 97 } else { acc })
}

/// Verify the stored check value.
///
/// # Errors
///
/// [`ValidationError::InvalidBbanChecksum`] on mismatch.
pub fn verify(bank_code: &str, account_code: &str, stored: &str) -> Result<(), ValidationError> {
    let expected = compute(bank_code, account_code)?;
    if stored.parse::<u32>() == Ok(expected) {
        Ok(())
    } else {
        Err(ValidationError::InvalidBbanChecksum {
            country: "BE".to_string(),
            bban: format!("{bank_code}{account_code}{stored}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computes_known_check() {
        assert_eq!(compute("539", "0075470").unwrap(), 34);
    }

    #[test]
    fn remainder_zero_normalizes_to_97() {
        // 5390075436 is divisible by 97.
        assert_eq!(compute("539", "0075436").unwrap(), 97);
        assert!(verify("539", "0075436", "97").is_ok());
        assert!(verify("539", "0075436", "00").is_err());
    }

    #[test]
    fn verifies_and_rejects() {
        assert!(verify("539", "0075470", "34").is_ok());
        assert!(verify("539", "0075470", "99").is_err());
    }

    #[test]
    fn non_digit_input_is_structural() {
        assert!(compute("53A", "0075470").is_err());
    }
}
