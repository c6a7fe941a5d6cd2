//! Core value types, the error type, and static reference data.

mod countries;
mod error;
mod rates;
mod types;

pub use countries::{VALIDATION_COUNTRIES, is_validation_country};
pub use error::ValidationServiceError;
pub use rates::{has_rate_entry, rate_entry};
pub use types::{RateEntry, TaxContext, TaxKind, TaxedAmount};
