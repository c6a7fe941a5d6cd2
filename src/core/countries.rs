//! Jurisdictions whose tax numbers the validation service understands.
//!
//! The set is the EU member states plus "EL" (the code VIES uses for
//! Greece) and "GB". It deliberately does not contain "GR": the rate
//! table keys Greece as GR, but a Greek VAT number is validated under
//! the EL prefix. Tax numbers from any code outside this set are
//! treated as definitively invalid without ever calling the service.

/// Country codes accepted for tax-number validation.
/// Sorted for binary search.
pub static VALIDATION_COUNTRIES: &[&str] = &[
    "AT", "BE", "BG", "CY", "CZ", "DE", "DK", "EE", "EL", "ES", "FI", "FR", "GB", "HR", "HU", "IE",
    "IT", "LT", "LU", "LV", "MT", "NL", "PL", "PT", "RO", "SE", "SI", "SK",
];

/// Whether tax numbers from `code` (uppercase) can be validated.
pub fn is_validation_country(code: &str) -> bool {
    VALIDATION_COUNTRIES.binary_search(&code).is_ok()
}
