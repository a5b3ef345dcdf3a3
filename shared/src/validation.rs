//! Validation utilities for the inventory platform

use rust_decimal::Decimal;

/// Maximum SKU length accepted by the catalog
pub const MAX_SKU_LENGTH: usize = 64;

// ============================================================================
// Catalog Validations
// ============================================================================

/// Validate SKU format: 1-64 characters of ASCII letters, digits, `-` or `_`
pub fn validate_sku(sku: &str) -> Result<(), &'static str> {
    if sku.is_empty() {
        return Err("SKU must not be empty");
    }
    if sku.len() > MAX_SKU_LENGTH {
        return Err("SKU must be at most 64 characters");
    }
    if !sku
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err("SKU may only contain letters, digits, '-' and '_'");
    }
    Ok(())
}

/// Validate product price (non-negative, at most 2 decimal places)
pub fn validate_price(price: Decimal) -> Result<(), &'static str> {
    if price < Decimal::ZERO {
        return Err("Price cannot be negative");
    }
    if price.normalize().scale() > 2 {
        return Err("Price must have at most 2 decimal places");
    }
    Ok(())
}

/// Validate a stock quantity
pub fn validate_quantity(quantity: i32) -> Result<(), &'static str> {
    if quantity < 0 {
        return Err("Quantity cannot be negative");
    }
    Ok(())
}

/// Validate a low-stock threshold
pub fn validate_threshold(threshold: i32) -> Result<(), &'static str> {
    if threshold < 0 {
        return Err("Low stock threshold cannot be negative");
    }
    Ok(())
}

// ============================================================================
// General Validations
// ============================================================================

/// Validate that an identifier from a path or body is positive
pub fn validate_id(id: i32) -> Result<(), &'static str> {
    if id <= 0 {
        return Err("Identifier must be a positive integer");
    }
    Ok(())
}

/// Validate email format (basic check)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.contains('@') && email.contains('.') && email.len() >= 5 {
        Ok(())
    } else {
        Err("Invalid email format")
    }
}
