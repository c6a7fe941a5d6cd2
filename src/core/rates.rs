//! Static country → sales-tax rate table.
//!
//! The table is a point-in-time snapshot of standard national VAT/GST
//! rates, keyed by uppercase ISO 3166-1 alpha-2 code. Jurisdictions
//! known to levy no sales tax carry an explicit zero-rate entry, so
//! "present in the table" and "nonzero rate" remain distinct facts.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::core::types::{RateEntry, TaxKind};

/// Look up the rate entry for an uppercase country code.
///
/// Returns `None` for codes absent from the table; lowercase input
/// never matches (callers normalize first).
pub fn rate_entry(country_code: &str) -> Option<RateEntry> {
    RATE_TABLE
        .binary_search_by_key(&country_code, |&(code, _, _)| code)
        .ok()
        .map(|idx| {
            let (_, kind, rate) = RATE_TABLE[idx];
            RateEntry { kind, rate }
        })
}

/// Whether the country has an entry in the rate table at all,
/// including an explicit zero-rate one.
pub fn has_rate_entry(country_code: &str) -> bool {
    RATE_TABLE
        .binary_search_by_key(&country_code, |&(code, _, _)| code)
        .is_ok()
}

/// Standard national rates. Sorted by country code for binary search.
static RATE_TABLE: &[(&str, TaxKind, Decimal)] = &[
    ("AE", TaxKind::Vat, dec!(0.05)),
    ("AL", TaxKind::Vat, dec!(0.20)),
    ("AM", TaxKind::Vat, dec!(0.20)),
    ("AR", TaxKind::Vat, dec!(0.21)),
    ("AT", TaxKind::Vat, dec!(0.20)),
    ("AU", TaxKind::Gst, dec!(0.10)),
    ("AZ", TaxKind::Vat, dec!(0.18)),
    ("BA", TaxKind::Vat, dec!(0.17)),
    ("BD", TaxKind::Vat, dec!(0.15)),
    ("BE", TaxKind::Vat, dec!(0.21)),
    ("BG", TaxKind::Vat, dec!(0.20)),
    ("BH", TaxKind::Vat, dec!(0.10)),
    ("BO", TaxKind::Vat, dec!(0.13)),
    ("BR", TaxKind::Vat, dec!(0.17)),
    ("BY", TaxKind::Vat, dec!(0.20)),
    ("CA", TaxKind::Gst, dec!(0.05)),
    ("CH", TaxKind::Vat, dec!(0.081)),
    ("CL", TaxKind::Vat, dec!(0.19)),
    ("CN", TaxKind::Vat, dec!(0.13)),
    ("CO", TaxKind::Vat, dec!(0.19)),
    ("CR", TaxKind::Vat, dec!(0.13)),
    ("CY", TaxKind::Vat, dec!(0.19)),
    ("CZ", TaxKind::Vat, dec!(0.21)),
    ("DE", TaxKind::Vat, dec!(0.19)),
    ("DK", TaxKind::Vat, dec!(0.25)),
    ("DO", TaxKind::Vat, dec!(0.18)),
    ("DZ", TaxKind::Vat, dec!(0.19)),
    ("EC", TaxKind::Vat, dec!(0.12)),
    ("EE", TaxKind::Vat, dec!(0.22)),
    ("EG", TaxKind::Vat, dec!(0.14)),
    ("ES", TaxKind::Vat, dec!(0.21)),
    ("FI", TaxKind::Vat, dec!(0.24)),
    ("FR", TaxKind::Vat, dec!(0.20)),
    ("GB", TaxKind::Vat, dec!(0.20)),
    ("GE", TaxKind::Vat, dec!(0.18)),
    ("GH", TaxKind::Vat, dec!(0.15)),
    ("GR", TaxKind::Vat, dec!(0.24)),
    ("GT", TaxKind::Vat, dec!(0.12)),
    ("HK", TaxKind::None, dec!(0.00)),
    ("HR", TaxKind::Vat, dec!(0.25)),
    ("HU", TaxKind::Vat, dec!(0.27)),
    ("ID", TaxKind::Vat, dec!(0.11)),
    ("IE", TaxKind::Vat, dec!(0.23)),
    ("IL", TaxKind::Vat, dec!(0.17)),
    ("IN", TaxKind::Gst, dec!(0.18)),
    ("IS", TaxKind::Vat, dec!(0.24)),
    ("IT", TaxKind::Vat, dec!(0.22)),
    ("JP", TaxKind::Vat, dec!(0.10)),
    ("KE", TaxKind::Vat, dec!(0.16)),
    ("KR", TaxKind::Vat, dec!(0.10)),
    ("KZ", TaxKind::Vat, dec!(0.12)),
    ("LK", TaxKind::Vat, dec!(0.15)),
    ("LT", TaxKind::Vat, dec!(0.21)),
    ("LU", TaxKind::Vat, dec!(0.17)),
    ("LV", TaxKind::Vat, dec!(0.21)),
    ("MA", TaxKind::Vat, dec!(0.20)),
    ("MD", TaxKind::Vat, dec!(0.20)),
    ("ME", TaxKind::Vat, dec!(0.21)),
    ("MK", TaxKind::Vat, dec!(0.18)),
    ("MO", TaxKind::None, dec!(0.00)),
    ("MT", TaxKind::Vat, dec!(0.18)),
    ("MX", TaxKind::Vat, dec!(0.16)),
    ("MY", TaxKind::Gst, dec!(0.06)),
    ("NG", TaxKind::Vat, dec!(0.075)),
    ("NI", TaxKind::Vat, dec!(0.15)),
    ("NL", TaxKind::Vat, dec!(0.21)),
    ("NO", TaxKind::Vat, dec!(0.25)),
    ("NZ", TaxKind::Gst, dec!(0.15)),
    ("OM", TaxKind::Vat, dec!(0.05)),
    ("PA", TaxKind::Vat, dec!(0.07)),
    ("PE", TaxKind::Vat, dec!(0.18)),
    ("PH", TaxKind::Vat, dec!(0.12)),
    ("PK", TaxKind::Vat, dec!(0.17)),
    ("PL", TaxKind::Vat, dec!(0.23)),
    ("PT", TaxKind::Vat, dec!(0.23)),
    ("PY", TaxKind::Vat, dec!(0.10)),
    ("RO", TaxKind::Vat, dec!(0.19)),
    ("RS", TaxKind::Vat, dec!(0.20)),
    ("RU", TaxKind::Vat, dec!(0.20)),
    ("SA", TaxKind::Vat, dec!(0.15)),
    ("SE", TaxKind::Vat, dec!(0.25)),
    ("SG", TaxKind::Gst, dec!(0.09)),
    ("SI", TaxKind::Vat, dec!(0.22)),
    ("SK", TaxKind::Vat, dec!(0.20)),
    ("TH", TaxKind::Vat, dec!(0.07)),
    ("TN", TaxKind::Vat, dec!(0.19)),
    ("TR", TaxKind::Vat, dec!(0.18)),
    ("TW", TaxKind::Vat, dec!(0.05)),
    ("UA", TaxKind::Vat, dec!(0.20)),
    ("UY", TaxKind::Vat, dec!(0.22)),
    ("VE", TaxKind::Vat, dec!(0.16)),
    ("VN", TaxKind::Vat, dec!(0.10)),
    ("ZA", TaxKind::Vat, dec!(0.15)),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted() {
        for window in RATE_TABLE.windows(2) {
            assert!(
                window[0].0 < window[1].0,
                "rate table not sorted: {} >= {}",
                window[0].0,
                window[1].0
            );
        }
    }

    #[test]
    fn rates_are_fractional() {
        for &(code, _, rate) in RATE_TABLE {
            assert!(
                rate >= Decimal::ZERO && rate < Decimal::ONE,
                "rate for {code} out of [0, 1): {rate}"
            );
        }
    }

    #[test]
    fn zero_rate_entries_are_kind_none() {
        for &(code, kind, rate) in RATE_TABLE {
            if rate == Decimal::ZERO {
                assert_eq!(kind, TaxKind::None, "zero-rate entry {code} must be 'none'");
            } else {
                assert_ne!(kind, TaxKind::None, "nonzero entry {code} cannot be 'none'");
            }
        }
    }

    #[test]
    fn spot_rates() {
        assert_eq!(rate_entry("DE").unwrap().rate, dec!(0.19));
        assert_eq!(rate_entry("FR").unwrap().rate, dec!(0.20));
        assert_eq!(rate_entry("HU").unwrap().rate, dec!(0.27));
        assert_eq!(rate_entry("AU").unwrap().kind, TaxKind::Gst);
        assert_eq!(rate_entry("CA").unwrap().rate, dec!(0.05));
    }

    #[test]
    fn zero_rate_jurisdictions_present() {
        let hk = rate_entry("HK").unwrap();
        assert_eq!(hk.kind, TaxKind::None);
        assert_eq!(hk.rate, Decimal::ZERO);
        assert!(has_rate_entry("MO"));
    }

    #[test]
    fn unknown_codes_miss() {
        assert!(rate_entry("XX").is_none());
        assert!(rate_entry("").is_none());
        assert!(!has_rate_entry("US"));
    }

    #[test]
    fn lowercase_never_matches() {
        assert!(rate_entry("de").is_none());
        assert!(!has_rate_entry("fr"));
    }

    #[test]
    fn table_count() {
        assert_eq!(RATE_TABLE.len(), 93);
    }
}
