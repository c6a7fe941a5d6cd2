//! Country sales-tax resolution.
//!
//! [`SalesTax`] combines the static rate table with the injected
//! tax-number validation capability. Resolution is a single linear
//! async chain per call: amount → context → exemption → number
//! validation → external service. The only suspension point is the
//! service call, and it is reached only when the country has a
//! positive rate, a tax number was supplied, and the country is in
//! the recognized validation set.

use rust_decimal::Decimal;

use crate::core::{
    RateEntry, TaxContext, TaxedAmount, ValidationServiceError, has_rate_entry,
    is_validation_country, rate_entry,
};
use crate::validate::NumberValidator;
#[cfg(feature = "vies")]
use crate::validate::ViesValidator;

/// Resolves the sales-tax context of a country, optionally factoring
/// in exemption from a validated tax number.
///
/// Holds no mutable state; a single instance can serve arbitrarily
/// many concurrent calls.
#[derive(Debug, Clone, Default)]
pub struct SalesTax<V> {
    validator: V,
}

impl<V: NumberValidator> SalesTax<V> {
    /// Create a resolver around a validation capability.
    pub fn new(validator: V) -> Self {
        Self { validator }
    }

    /// Whether the country appears in the rate table at all.
    ///
    /// Presence is not the same as a nonzero rate: jurisdictions that
    /// levy no sales tax carry an explicit zero-rate entry and still
    /// report `true` here. Case-insensitive, infallible.
    pub fn has_sales_tax(&self, country_code: &str) -> bool {
        has_rate_entry(&normalize(country_code))
    }

    /// Resolve the tax context for a country.
    ///
    /// Unknown countries resolve to `{none, 0, not exempt}`. The
    /// validation service is consulted only when the country's base
    /// rate is positive and a tax number was supplied; a zero-rate
    /// country short-circuits, since there is no tax to be exempt
    /// from.
    ///
    /// # Errors
    ///
    /// Fails only when the validation service itself fails.
    pub async fn get_sales_tax(
        &self,
        country_code: &str,
        tax_number: Option<&str>,
    ) -> Result<TaxContext, ValidationServiceError> {
        let country = normalize(country_code);
        let entry = rate_entry(&country).unwrap_or(RateEntry::NONE);

        if entry.rate > Decimal::ZERO {
            let exempt = self.is_tax_exempt(&country, tax_number).await?;
            Ok(TaxContext::new(entry.kind, entry.rate, exempt))
        } else {
            Ok(TaxContext::new(entry.kind, entry.rate, false))
        }
    }

    /// Resolve the tax context for a country and apply it to a net
    /// amount: `total = price × (1 + rate)`.
    ///
    /// # Errors
    ///
    /// Propagates any failure from [`get_sales_tax`](Self::get_sales_tax)
    /// unchanged.
    pub async fn get_amount_with_sales_tax(
        &self,
        country_code: &str,
        amount: Decimal,
        tax_number: Option<&str>,
    ) -> Result<TaxedAmount, ValidationServiceError> {
        let tax = self.get_sales_tax(country_code, tax_number).await?;
        Ok(tax.apply(amount))
    }

    /// Whether a tax number makes the buyer exempt in a country.
    ///
    /// An absent or empty number is never exempt and never reaches
    /// the validation service. A present number is exempt exactly
    /// when [`validate_tax_number`](Self::validate_tax_number)
    /// resolves `true`.
    ///
    /// # Errors
    ///
    /// A validation service failure propagates; it does not silently
    /// become "not exempt".
    pub async fn is_tax_exempt(
        &self,
        country_code: &str,
        tax_number: Option<&str>,
    ) -> Result<bool, ValidationServiceError> {
        match tax_number {
            Some(number) if !number.is_empty() => {
                self.validate_tax_number(country_code, number).await
            }
            _ => Ok(false),
        }
    }

    /// Validate a tax number for a country.
    ///
    /// Countries outside [`VALIDATION_COUNTRIES`] resolve `false`
    /// immediately: a number whose jurisdiction the service does not
    /// understand is definitively invalid, and the service is never
    /// asked about it. For recognized countries the injected
    /// capability decides.
    ///
    /// [`VALIDATION_COUNTRIES`]: crate::core::VALIDATION_COUNTRIES
    ///
    /// # Errors
    ///
    /// Fails with the validation service's error, unchanged.
    pub async fn validate_tax_number(
        &self,
        country_code: &str,
        tax_number: &str,
    ) -> Result<bool, ValidationServiceError> {
        let country = normalize(country_code);
        if !is_validation_country(&country) {
            return Ok(false);
        }

        let validation = self.validator.validate(&country, tax_number).await?;
        Ok(validation.valid)
    }
}

#[cfg(feature = "vies")]
impl SalesTax<ViesValidator> {
    /// Resolver backed by the EU VIES service.
    pub fn vies() -> Self {
        Self::new(ViesValidator::new())
    }
}

fn normalize(country_code: &str) -> String {
    country_code.to_ascii_uppercase()
}
