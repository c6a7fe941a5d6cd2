//! Property-based tests for the resolver's arithmetic and
//! normalization rules.
//!
//! Run with: `cargo test --test proptest_tests`

#![cfg(feature = "core")]

use std::future::Future;

use async_trait::async_trait;
use proptest::prelude::*;
use rust_decimal::Decimal;
use sales_tax::{
    NumberValidator, SalesTax, Validation, ValidationServiceError, is_validation_country,
    rate_entry,
};

/// Always resolves the same validity answer.
struct Fixed(bool);

#[async_trait]
impl NumberValidator for Fixed {
    async fn validate(&self, _: &str, _: &str) -> Result<Validation, ValidationServiceError> {
        Ok(Validation { valid: self.0 })
    }
}

fn block_on<F: Future>(fut: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
        .block_on(fut)
}

// ── Strategies ──────────────────────────────────────────────────────────────

/// Generate a reasonable price (0.01 to 99999.99).
fn arb_price() -> impl Strategy<Value = Decimal> {
    (1u64..10_000_000u64).prop_map(|cents| Decimal::new(cents as i64, 2))
}

/// A spread of table hits (VAT, GST, zero-rate) and misses.
fn arb_country() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("DE"),
        Just("FR"),
        Just("HU"),
        Just("AU"),
        Just("SG"),
        Just("HK"),
        Just("US"),
        Just("XX"),
    ]
}

proptest! {
    #[test]
    fn total_is_price_times_one_plus_rate(country in arb_country(), price in arb_price()) {
        let resolver = SalesTax::new(Fixed(false));
        let priced = block_on(resolver.get_amount_with_sales_tax(country, price, None)).unwrap();
        prop_assert_eq!(priced.price, price);
        prop_assert_eq!(priced.total, (Decimal::ONE + priced.rate) * price);
    }

    #[test]
    fn exemption_requires_positive_rate_and_recognized_jurisdiction(
        country in arb_country(),
        price in arb_price(),
    ) {
        let resolver = SalesTax::new(Fixed(true));
        let priced = block_on(
            resolver.get_amount_with_sales_tax(country, price, Some("123456789")),
        )
        .unwrap();

        let table_rate = rate_entry(country).map(|e| e.rate).unwrap_or(Decimal::ZERO);
        let expected_exempt = table_rate > Decimal::ZERO && is_validation_country(country);
        prop_assert_eq!(priced.exempt, expected_exempt);
        if priced.exempt {
            prop_assert_eq!(priced.rate, Decimal::ZERO);
            prop_assert_eq!(priced.total, price);
        }
    }

    #[test]
    fn random_casing_never_changes_resolution(
        country in arb_country(),
        flags in proptest::collection::vec(any::<bool>(), 2),
    ) {
        let mixed: String = country
            .chars()
            .zip(flags)
            .map(|(c, upper)| {
                if upper {
                    c.to_ascii_uppercase()
                } else {
                    c.to_ascii_lowercase()
                }
            })
            .collect();

        let resolver = SalesTax::new(Fixed(false));
        let a = block_on(resolver.get_sales_tax(&mixed, None)).unwrap();
        let b = block_on(resolver.get_sales_tax(country, None)).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn has_sales_tax_matches_table_presence(country in arb_country()) {
        let resolver = SalesTax::new(Fixed(false));
        prop_assert_eq!(
            resolver.has_sales_tax(country),
            rate_entry(country).is_some()
        );
    }
}
