//! Input token sanitization.

use num_bigint::BigUint;
use tracing::debug;

use crate::spell::SpellError;
use crate::tables;
use crate::unicode::fold_fullwidth_digit;

/// Clean and parse a raw token into a non-negative integer.
///
/// Whitespace (including the ideographic space U+3000) is stripped anywhere
/// in the token and full-width digits are folded to ASCII. The remainder
/// must be one or more decimal digits — no sign, no decimal point. Values
/// with more than 72 significant digits exceed the largest named place
/// (10^68) and are rejected rather than truncated.
pub fn sanitize(raw: &str) -> Result<BigUint, SpellError> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(fold_fullwidth_digit)
        .collect();

    if cleaned.is_empty() || !cleaned.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SpellError::InvalidInput);
    }

    let significant = cleaned.trim_start_matches('0');
    if significant.len() > tables::MAX_DIGITS {
        debug!(digits = significant.len(), "magnitude beyond place table");
        return Err(SpellError::UnsupportedMagnitude {
            digits: significant.len(),
        });
    }

    cleaned.parse().map_err(|_| SpellError::InvalidInput)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_digits() {
        assert_eq!(sanitize("123").unwrap(), BigUint::from(123u8));
        assert_eq!(sanitize("0").unwrap(), BigUint::from(0u8));
    }

    #[test]
    fn test_interior_whitespace_stripped() {
        assert_eq!(sanitize("1 2 3").unwrap(), BigUint::from(123u8));
        assert_eq!(sanitize(" 42 ").unwrap(), BigUint::from(42u8));
        assert_eq!(sanitize("1\u{3000}0").unwrap(), BigUint::from(10u8));
    }

    #[test]
    fn test_fullwidth_digits_folded() {
        assert_eq!(sanitize("１２３").unwrap(), BigUint::from(123u8));
        assert_eq!(sanitize("１2３").unwrap(), BigUint::from(123u8));
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(sanitize("007").unwrap(), BigUint::from(7u8));
    }

    #[test]
    fn test_invalid_inputs() {
        for raw in ["", "   ", "12a", "-5", "3.14", "+7", "一二三"] {
            assert_eq!(sanitize(raw), Err(SpellError::InvalidInput), "raw = {:?}", raw);
        }
    }

    #[test]
    fn test_magnitude_cap() {
        let max = "9".repeat(72);
        assert!(sanitize(&max).is_ok());

        let over = "1".repeat(73);
        assert_eq!(
            sanitize(&over),
            Err(SpellError::UnsupportedMagnitude { digits: 73 })
        );

        // Leading zeros do not count against the cap
        let padded = format!("000{}", "9".repeat(72));
        assert!(sanitize(&padded).is_ok());
    }
}
