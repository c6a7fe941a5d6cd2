//! # sales-tax
//!
//! Sales-tax (VAT/GST) resolution by country, with tax-exempt status
//! derived from validating a tax number against the EU VIES service.
//!
//! A static rate table maps ISO 3166-1 alpha-2 country codes to their
//! standard VAT/GST rate. Rates and totals use
//! [`rust_decimal::Decimal`], never floating point. The external
//! validation service sits behind the [`NumberValidator`] trait so
//! tests run against deterministic stubs.
//!
//! ## Quick Start
//!
//! ```rust
//! use async_trait::async_trait;
//! use rust_decimal_macros::dec;
//! use sales_tax::{NumberValidator, SalesTax, Validation, ValidationServiceError};
//!
//! // Stand-in for the VIES-backed validator (`SalesTax::vies()`).
//! struct AlwaysValid;
//!
//! #[async_trait]
//! impl NumberValidator for AlwaysValid {
//!     async fn validate(&self, _: &str, _: &str) -> Result<Validation, ValidationServiceError> {
//!         Ok(Validation { valid: true })
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), ValidationServiceError> {
//! let resolver = SalesTax::new(AlwaysValid);
//! assert!(resolver.has_sales_tax("FR"));
//!
//! // No tax number: the table rate applies
//! let tax = resolver.get_sales_tax("FR", None).await?;
//! assert_eq!(tax.rate, dec!(0.20));
//! assert!(!tax.exempt);
//!
//! // A valid tax number zeroes the effective rate
//! let tax = resolver.get_sales_tax("FR", Some("87524172699")).await?;
//! assert!(tax.exempt);
//! assert_eq!(tax.rate, dec!(0));
//!
//! let priced = resolver.get_amount_with_sales_tax("DE", dec!(100.00), None).await?;
//! assert_eq!(priced.total, dec!(119.00));
//! # Ok(())
//! # }
//! ```
//!
//! Checking a number against the real VIES API requires the `vies`
//! feature and network access:
//!
//! ```ignore
//! let resolver = SalesTax::vies();
//! let tax = resolver.get_sales_tax("DE", Some("123456789")).await?;
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Resolver, rate table, validator trait, format checks |
//! | `vies` | VIES REST client (`reqwest`-based) |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod resolver;

#[cfg(feature = "core")]
pub mod validate;

// Re-export the public surface at the crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
#[cfg(feature = "core")]
pub use crate::resolver::SalesTax;
#[cfg(feature = "core")]
pub use crate::validate::{
    NumberValidator, TaxNumberFormatError, Validation, validate_tax_number_format,
};
#[cfg(feature = "vies")]
pub use crate::validate::{ViesError, ViesResult, ViesValidator, check_vies};
