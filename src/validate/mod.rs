//! Tax-number validation: the injectable service capability, an
//! offline format checker, and the VIES client behind the `vies`
//! feature.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::ValidationServiceError;

mod format;
#[cfg(feature = "vies")]
mod vies;

pub use format::{TaxNumberFormatError, validate_tax_number_format};
#[cfg(feature = "vies")]
pub use vies::{ViesError, ViesResult, ViesValidator, check_vies};

/// Outcome of a tax-number validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validation {
    /// Whether the service reports the number as currently valid.
    pub valid: bool,
}

/// External capability that checks a tax number for a jurisdiction.
///
/// The production implementation ([`ViesValidator`]) calls the EU VIES
/// REST API; tests substitute deterministic stubs. Implementations
/// receive an uppercase country code and the bare number without
/// country prefix, and must fail with [`ValidationServiceError`] only
/// on service breakdown, never on an invalid number.
#[async_trait]
pub trait NumberValidator: Send + Sync {
    async fn validate(
        &self,
        country_code: &str,
        tax_number: &str,
    ) -> Result<Validation, ValidationServiceError>;
}
