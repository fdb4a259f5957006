//! Money Conversion Module
//!
//! Conversion between client-facing amount strings and the exact `Decimal`
//! values stored on accounts. Every string that becomes a balance or a
//! transfer amount goes through here.
//!
//! ## Accepted format
//! - Digits with an optional single fractional part: `100`, `1000.12345`
//! - No sign, no exponent, no `.5` / `5.` shorthand
//! - At most [`MAX_SCALE`] fractional digits (no silent truncation)
//!
//! ## Usage
//! ```rust
//! use account_transfer::money::{format_amount, parse_amount};
//!
//! let amount = parse_amount("100.50").unwrap();
//! assert_eq!(format_amount(amount), "100.50");
//! ```

use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

/// Largest fractional precision `Decimal` can carry
pub const MAX_SCALE: u32 = 28;

// ============================================================================
// Error Types
// ============================================================================

/// Money conversion errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Precision overflow: provided {provided} decimals, max allowed {max}")]
    PrecisionOverflow { provided: u32, max: u32 },

    #[error("Amount must be positive")]
    InvalidAmount,

    #[error("Amount too large, would overflow")]
    Overflow,

    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

// ============================================================================
// Parse: Client → Decimal
// ============================================================================

/// Parse a transfer amount. Zero is rejected.
///
/// # Errors
/// * `InvalidAmount` - zero, or a leading sign
/// * `PrecisionOverflow` - more than [`MAX_SCALE`] fractional digits
/// * `Overflow` - larger than `Decimal` can hold
/// * `InvalidFormat` - anything else that is not a plain decimal
pub fn parse_amount(amount_str: &str) -> Result<Decimal, MoneyError> {
    let amount = parse_unsigned(amount_str)?;
    if amount.is_zero() {
        return Err(MoneyError::InvalidAmount);
    }
    Ok(amount)
}

/// Parse an opening balance. Zero is allowed, negatives are not.
pub fn parse_balance(balance_str: &str) -> Result<Decimal, MoneyError> {
    parse_unsigned(balance_str)
}

fn parse_unsigned(raw: &str) -> Result<Decimal, MoneyError> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(MoneyError::InvalidFormat("empty string".into()));
    }

    if s.starts_with('-') || s.starts_with('+') {
        return Err(MoneyError::InvalidAmount);
    }

    let parts: Vec<&str> = s.split('.').collect();
    let (whole, frac) = match parts.len() {
        1 => (parts[0], ""),
        2 => {
            // Both sides of the dot must be present
            if parts[0].is_empty() {
                return Err(MoneyError::InvalidFormat(
                    "missing leading zero (e.g., use 0.5 instead of .5)".into(),
                ));
            }
            if parts[1].is_empty() {
                return Err(MoneyError::InvalidFormat(
                    "missing fractional part (e.g., use 5.0 instead of 5.)".into(),
                ));
            }
            (parts[0], parts[1])
        }
        _ => return Err(MoneyError::InvalidFormat("multiple decimal points".into())),
    };

    if !whole.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MoneyError::InvalidFormat(format!(
            "invalid character in whole part: {}",
            whole
        )));
    }
    if !frac.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MoneyError::InvalidFormat(format!(
            "invalid character in fractional part: {}",
            frac
        )));
    }

    if frac.len() > MAX_SCALE as usize {
        return Err(MoneyError::PrecisionOverflow {
            provided: frac.len() as u32,
            max: MAX_SCALE,
        });
    }

    // Digits-only input can only fail on magnitude
    Decimal::from_str(s).map_err(|_| MoneyError::Overflow)
}

/// Validate an already-typed amount for a transfer
pub fn ensure_positive(amount: Decimal) -> Result<Decimal, MoneyError> {
    if amount.is_sign_negative() || amount.is_zero() {
        return Err(MoneyError::InvalidAmount);
    }
    Ok(amount)
}

// ============================================================================
// Format: Decimal → Client
// ============================================================================

/// Render a decimal as a plain string, keeping its scale (`900.12345`, `2100`).
pub fn format_amount(value: Decimal) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_whole_and_fraction() {
        assert_eq!(parse_amount("100").unwrap(), Decimal::from(100));
        assert_eq!(
            parse_amount("1000.12345").unwrap(),
            Decimal::from_str("1000.12345").unwrap()
        );
        assert_eq!(parse_amount(" 7.5 ").unwrap(), Decimal::new(75, 1));
    }

    #[test]
    fn test_parse_amount_rejects_zero_and_signs() {
        assert_eq!(parse_amount("0"), Err(MoneyError::InvalidAmount));
        assert_eq!(parse_amount("0.000"), Err(MoneyError::InvalidAmount));
        assert_eq!(parse_amount("-5"), Err(MoneyError::InvalidAmount));
        assert_eq!(parse_amount("+5"), Err(MoneyError::InvalidAmount));
    }

    #[test]
    fn test_parse_balance_allows_zero() {
        assert_eq!(parse_balance("0").unwrap(), Decimal::ZERO);
        assert_eq!(parse_balance("2000").unwrap(), Decimal::from(2000));
    }

    #[test]
    fn test_parse_rejects_ambiguous_formats() {
        assert!(matches!(parse_amount(".5"), Err(MoneyError::InvalidFormat(_))));
        assert!(matches!(parse_amount("5."), Err(MoneyError::InvalidFormat(_))));
        assert!(matches!(parse_amount("1.2.3"), Err(MoneyError::InvalidFormat(_))));
        assert!(matches!(parse_amount("1e5"), Err(MoneyError::InvalidFormat(_))));
        assert!(matches!(parse_amount("abc"), Err(MoneyError::InvalidFormat(_))));
        assert!(matches!(parse_amount(""), Err(MoneyError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_precision_overflow() {
        let too_precise = format!("1.{}", "1".repeat(29));
        assert_eq!(
            parse_amount(&too_precise),
            Err(MoneyError::PrecisionOverflow {
                provided: 29,
                max: MAX_SCALE
            })
        );
    }

    #[test]
    fn test_parse_overflow() {
        let huge = "9".repeat(40);
        assert_eq!(parse_amount(&huge), Err(MoneyError::Overflow));
    }

    #[test]
    fn test_ensure_positive() {
        assert!(ensure_positive(Decimal::from(1)).is_ok());
        assert_eq!(ensure_positive(Decimal::ZERO), Err(MoneyError::InvalidAmount));
        assert_eq!(
            ensure_positive(Decimal::from(-3)),
            Err(MoneyError::InvalidAmount)
        );
    }

    #[test]
    fn test_format_amount_keeps_scale() {
        let balance = Decimal::from_str("1000.12345").unwrap() - Decimal::from(100);
        assert_eq!(format_amount(balance), "900.12345");
        assert_eq!(format_amount(Decimal::from(2100)), "2100");
    }
}
