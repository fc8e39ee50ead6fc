//! Validation utilities

use bigdecimal::BigDecimal;
use std::str::FromStr;

use crate::types::{LedgerError, LedgerResult};

/// Validate that a required form field is filled in
pub fn validate_required(field: &str, value: &str) -> LedgerResult<()> {
    if value.trim().is_empty() {
        Err(LedgerError::Validation(format!("{field} cannot be empty")))
    } else {
        Ok(())
    }
}

/// Coerce a numeric text field to an integer
pub fn parse_integer_field(field: &str, value: &str) -> LedgerResult<u32> {
    value.trim().parse().map_err(|_| {
        LedgerError::Validation(format!("{field} must be a whole number, got '{value}'"))
    })
}

/// Coerce a numeric text field to a decimal amount
pub fn parse_amount_field(field: &str, value: &str) -> LedgerResult<BigDecimal> {
    BigDecimal::from_str(value.trim())
        .map_err(|_| LedgerError::Validation(format!("{field} must be a number, got '{value}'")))
}

/// Validate that a movement amount is positive
pub fn validate_positive_amount(amount: &BigDecimal) -> LedgerResult<()> {
    if *amount <= BigDecimal::from(0) {
        Err(LedgerError::Validation(
            "Amount must be positive".to_string(),
        ))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_fields_may_not_be_whitespace() {
        assert!(validate_required("Bank name", "Acme").is_ok());
        assert!(validate_required("Bank name", "").is_err());
        assert!(validate_required("Bank name", "  \t").is_err());
    }

    #[test]
    fn integer_fields_tolerate_surrounding_whitespace() {
        assert_eq!(parse_integer_field("Agency number", " 42 ").unwrap(), 42);
        assert!(parse_integer_field("Agency number", "42.5").is_err());
        assert!(parse_integer_field("Agency number", "-1").is_err());
    }

    #[test]
    fn amounts_accept_decimals() {
        assert_eq!(
            parse_amount_field("Balance", "10.25").unwrap(),
            BigDecimal::from_str("10.25").unwrap()
        );
        assert!(parse_amount_field("Balance", "ten").is_err());
    }

    #[test]
    fn positive_amount_check_rejects_zero_and_below() {
        assert!(validate_positive_amount(&BigDecimal::from(1)).is_ok());
        assert!(validate_positive_amount(&BigDecimal::from(0)).is_err());
        assert!(validate_positive_amount(&BigDecimal::from(-3)).is_err());
    }
}
