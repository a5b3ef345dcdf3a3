//! Catalog and inventory input validation tests
//!
//! Tests for the checks applied before product creation and stock
//! adjustments reach the database.

use proptest::prelude::*;
use rust_decimal::Decimal;
use shared::models::{ChangeType, Product, DEFAULT_LOW_STOCK_THRESHOLD};
use shared::{
    validate_email, validate_id, validate_price, validate_quantity, validate_sku, validate_threshold,
};
use std::str::FromStr;

// Helper to create Decimal from string
fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_product_creation_payload_fields() {
        assert!(validate_sku("WID-001").is_ok());
        assert!(validate_price(dec("12.50")).is_ok());
        assert!(validate_quantity(100).is_ok());
        assert!(validate_id(1).is_ok());
    }

    #[test]
    fn test_price_precision() {
        assert!(validate_price(dec("0.01")).is_ok());
        assert!(validate_price(dec("0.001")).is_err());
    }

    #[test]
    fn test_negative_quantity_and_threshold_rejected() {
        assert!(validate_quantity(0).is_ok());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_threshold(0).is_ok());
        assert!(validate_threshold(-5).is_err());
    }

    #[test]
    fn test_default_threshold_constant() {
        assert_eq!(DEFAULT_LOW_STOCK_THRESHOLD, 10);
    }

    #[test]
    fn test_unset_threshold_deserializes_to_default() {
        let product: Product = serde_json::from_str(
            r#"{"id": 1, "name": "Widget", "sku": "W-1", "price": "9.99"}"#,
        )
        .unwrap();

        assert_eq!(product.low_stock_threshold, None);
        assert_eq!(product.effective_threshold(), DEFAULT_LOW_STOCK_THRESHOLD);
        assert!(!product.is_bundle);
    }

    #[test]
    fn test_change_type_json() {
        let t: ChangeType = serde_json::from_str(r#""initial_stock""#).unwrap();
        assert_eq!(t, ChangeType::InitialStock);
        assert_eq!(serde_json::to_string(&ChangeType::Restock).unwrap(), r#""restock""#);
    }

    #[test]
    fn test_supplier_email() {
        assert!(validate_email("orders@supplier.test").is_ok());
        assert!(validate_email("supplier").is_err());
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    /// Strategy for generating valid prices with two decimal places
    fn price_strategy() -> impl Strategy<Value = Decimal> {
        (0i64..=10_000_000i64).prop_map(|n| Decimal::new(n, 2))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_valid_skus_accepted(sku in "[A-Za-z0-9_-]{1,64}") {
            prop_assert!(validate_sku(&sku).is_ok());
        }

        #[test]
        fn prop_skus_with_whitespace_rejected(
            prefix in "[A-Z]{1,10}",
            suffix in "[0-9]{1,10}"
        ) {
            let sku = format!("{} {}", prefix, suffix);
            prop_assert!(validate_sku(&sku).is_err());
        }

        #[test]
        fn prop_two_decimal_prices_accepted(price in price_strategy()) {
            prop_assert!(validate_price(price).is_ok());
        }

        #[test]
        fn prop_negative_prices_rejected(price in price_strategy()) {
            prop_assume!(price > Decimal::ZERO);
            prop_assert!(validate_price(-price).is_err());
        }

        #[test]
        fn prop_non_positive_ids_rejected(id in i32::MIN..=0) {
            prop_assert!(validate_id(id).is_err());
        }
    }
}
