//! # French RIB Key (also Monaco)
//!
//! Letters in the account number are first replaced by digits through
//! the fixed RIB substitution (A,J→1; B,K,S→2; … I,R,Z→9), then the key
//! is `97 − (89·bank + 15·branch + 3·account) mod 97`. The three terms
//! are reduced digit-by-digit, so the 11-character account never needs
//! an integer wider than `u32`.

use finid_core::ValidationError;

/// RIB letter substitution.
fn substitute(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32),
        'A' | 'J' => Some(1),
        'B' | 'K' | 'S' => Some(2),
        'C' | 'L' | 'T' => Some(3),
        'D' | 'M' | 'U' => Some(4),
        'E' | 'N' | 'V' => Some(5),
        'F' | 'O' | 'W' => Some(6),
        'G' | 'P' | 'X' => Some(7),
        'H' | 'Q' | 'Y' => Some(8),
        'I' | 'R' | 'Z' => Some(9),
        _ => None,
    }
}

/// Reduce a RIB component modulo 97 after letter substitution.
fn reduce(component: &str, field: &'static str) -> Result<u32, ValidationError> {
    let mut acc: u32 = 0;
    for c in component.chars() {
        let digit = substitute(c).ok_or(ValidationError::InvalidStructure {
            field,
            value: component.to_string(),
        })?;
        acc = (acc * 10 + digit) % 97;
    }
    Ok(acc)
}

/// Compute the two-digit RIB key for a bank/branch/account triple.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidStructure`] when a component holds
/// a character outside `[0-9A-Z]`.
pub fn compute(
    bank_code: &str,
    branch_code: &str,
    account_code: &str,
) -> Result<u32, ValidationError> {
    let bank = reduce(bank_code, "bank_code")?;
    let branch = reduce(branch_code, "branch_code")?;
    let account = reduce(account_code, "account_code")?;
    let sum = (89 * bank + 15 * branch + 3 * account) % 97;
    Ok(97 - sum)
}

/// Verify the stored RIB key.
///
/// # Errors
///
/// [`ValidationError::InvalidBbanChecksum`] on mismatch.
pub fn verify(
    country: &str,
    bank_code: &str,
    branch_code: &str,
    account_code: &str,
    stored: &str,
) -> Result<(), ValidationError> {
    let expected = compute(bank_code, branch_code, account_code)?;
    if stored.parse::<u32>() == Ok(expected) {
        Ok(())
    } else {
        Err(ValidationError::InvalidBbanChecksum {
            country: country.to_string(),
            bban: format!("{bank_code}{branch_code}{account_code}{stored}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computes_known_keys() {
        assert_eq!(compute("30006", "00001", "12345678901").unwrap(), 89);
        // Letters substitute before weighting: M → 4.
        assert_eq!(compute("20041", "01005", "0500013M026").unwrap(), 6);
    }

    #[test]
    fn monaco_uses_the_same_key() {
        assert_eq!(compute("11222", "00001", "01234567890").unwrap(), 30);
    }

    #[test]
    fn verifies_and_rejects() {
        assert!(verify("FR", "30006", "00001", "12345678901", "89").is_ok());
        assert!(verify("FR", "30006", "00001", "12345678901", "12").is_err());
    }

    #[test]
    fn single_digit_keys_accept_padded_form() {
        assert!(verify("FR", "20041", "01005", "0500013M026", "06").is_ok());
    }

    #[test]
    fn invalid_characters_are_structural() {
        assert!(compute("30006", "00001", "1234567-901").is_err());
    }
}
