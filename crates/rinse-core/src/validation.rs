//! # Validation Module
//!
//! Input validation for order intake, customer records, and the payment
//! terminal.
//!
//! Two kinds of function live here:
//! - `validate_*`: business-rule checks run when a record is saved.
//! - `parse_*`: boundary coercions that turn raw form text into the
//!   canonical type (order ids, tendered amounts) instead of letting
//!   malformed text reach a query.
//!
//! Lenient weight parsing for the live preview is on
//! [`crate::weight::Weight::parse_lenient`]; the functions here are the
//! strict save-path counterparts.

use crate::error::ValidationError;
use crate::money::Money;
use crate::weight::Weight;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Upper bound on a single order's weight, in grams (1000 kg, the order
/// form's input limit).
pub const MAX_WEIGHT_GRAMS: i64 = 1_000_000;

/// Upper bound on name fields.
pub const MAX_NAME_LEN: usize = 200;

// =============================================================================
// Save-Path Validators
// =============================================================================

/// Validates an order weight: strictly positive, at most 1000 kg.
pub fn validate_weight(weight: Weight) -> ValidationResult<()> {
    if !weight.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "weight".to_string(),
        });
    }

    if weight.grams() > MAX_WEIGHT_GRAMS {
        return Err(ValidationError::OutOfRange {
            field: "weight".to_string(),
            min: 1,
            max: MAX_WEIGHT_GRAMS,
        });
    }

    Ok(())
}

/// Validates a customer reference on an order.
pub fn validate_customer_ref(customer_id: i64) -> ValidationResult<()> {
    if customer_id <= 0 {
        return Err(ValidationError::Required {
            field: "customer".to_string(),
        });
    }

    Ok(())
}

/// Validates a customer name: required, bounded length.
pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    validate_name("name", name)
}

/// Validates an inventory item name.
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    validate_name("item name", name)
}

fn validate_name(field: &str, name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a stock count: never negative.
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::OutOfRange {
            field: "stock".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a unit purchase price: never negative.
pub fn validate_unit_cost(unit_cost: i64) -> ValidationResult<()> {
    if unit_cost < 0 {
        return Err(ValidationError::OutOfRange {
            field: "unit cost".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Boundary Parsers
// =============================================================================

/// Parses an order id typed into the invoice/payment form.
///
/// The id must be a positive integer; anything else fails here rather
/// than propagating into a lookup query.
pub fn parse_order_id(input: &str) -> ValidationResult<i64> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ValidationError::Required {
            field: "order id".to_string(),
        });
    }

    let id: i64 = input.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "order id".to_string(),
        reason: "must be a number".to_string(),
    })?;

    if id <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "order id".to_string(),
        });
    }

    Ok(id)
}

/// Parses a tendered amount typed into the payment form.
///
/// Accepts an optional `Rp` prefix and `.`/`,` grouping separators
/// ("Rp 20,000", "20.000", "20000"). Blank input reads as zero, which
/// then fails the sufficiency check for any priced order. Negative or
/// non-numeric input is a validation failure.
pub fn parse_amount(input: &str) -> ValidationResult<Money> {
    let mut text = input.trim();
    if let Some(rest) = text.strip_prefix("Rp").or_else(|| text.strip_prefix("rp")) {
        text = rest.trim_start();
    }

    let digits: String = text
        .chars()
        .filter(|c| !matches!(c, ',' | '.' | ' '))
        .collect();

    if digits.is_empty() {
        return Ok(Money::zero());
    }

    if digits.starts_with('-') {
        return Err(ValidationError::MustBePositive {
            field: "amount".to_string(),
        });
    }

    let amount: i64 = digits.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "amount".to_string(),
        reason: "must be a number".to_string(),
    })?;

    Ok(Money::new(amount))
}

// =============================================================================
// Unit Tests
// =============================================================================
