//! Input rules for new ledger entries.
//!
//! Every check returns `StockError::Validation` with a reason a form or CLI
//! can show verbatim.

use crate::error::{Result, StockError};

/// Smallest quantity a receipt or order may carry.
pub const MIN_QUANTITY: f64 = 0.1;

/// Trim a product name and reject it when nothing is left.
pub fn validate_product(product: &str) -> Result<String> {
    let trimmed = product.trim();
    if trimmed.is_empty() {
        return Err(StockError::validation("product must not be empty"));
    }
    Ok(trimmed.to_string())
}

/// Require a finite quantity of at least `MIN_QUANTITY`.
pub fn validate_quantity(quantity: f64) -> Result<f64> {
    if !quantity.is_finite() {
        return Err(StockError::validation("quantity must be a number"));
    }
    if quantity < MIN_QUANTITY {
        return Err(StockError::validation(format!(
            "quantity must be at least {}",
            MIN_QUANTITY
        )));
    }
    Ok(quantity)
}

/// Require a finite, non-negative unit price.
pub fn validate_price(price: f64) -> Result<f64> {
    if !price.is_finite() {
        return Err(StockError::validation("price must be a number"));
    }
    if price < 0.0 {
        return Err(StockError::validation("price must not be negative"));
    }
    Ok(price)
}

/// Parse user-entered text as a number, naming the field on failure.
pub fn parse_number(field: &str, raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| StockError::validation(format!("{} must be a number", field)))
}

/// Trim free-text customer fields. Empty values are allowed.
pub fn normalize_text(value: &str) -> String {
    value.trim().to_string()
}
