use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of consumption tax a jurisdiction levies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxKind {
    /// Value-added tax.
    Vat,
    /// Goods-and-services tax.
    Gst,
    /// No sales tax.
    None,
}

impl TaxKind {
    /// Stable lowercase label: `"vat"`, `"gst"` or `"none"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Vat => "vat",
            Self::Gst => "gst",
            Self::None => "none",
        }
    }
}

impl fmt::Display for TaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A jurisdiction's entry in the rate table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateEntry {
    /// Kind of tax levied.
    pub kind: TaxKind,
    /// Fractional rate in `[0, 1)`, e.g. `0.20` for 20% VAT.
    pub rate: Decimal,
}

impl RateEntry {
    /// The entry used for countries absent from the rate table.
    pub const NONE: RateEntry = RateEntry {
        kind: TaxKind::None,
        rate: Decimal::ZERO,
    };
}

/// Resolved tax context for one country / tax-number combination.
///
/// When `exempt` is true the effective `rate` is always zero,
/// regardless of what the rate table says for the country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxContext {
    /// Kind of tax levied.
    pub kind: TaxKind,
    /// Effective fractional rate. Zero whenever `exempt` is true.
    pub rate: Decimal,
    /// Whether a validated tax number made the buyer exempt.
    pub exempt: bool,
}

impl TaxContext {
    pub(crate) fn new(kind: TaxKind, rate: Decimal, exempt: bool) -> Self {
        Self {
            kind,
            rate: if exempt { Decimal::ZERO } else { rate },
            exempt,
        }
    }

    /// Apply this context to a net amount.
    pub fn apply(self, amount: Decimal) -> TaxedAmount {
        TaxedAmount {
            kind: self.kind,
            rate: self.rate,
            exempt: self.exempt,
            price: amount,
            total: (Decimal::ONE + self.rate) * amount,
        }
    }
}

/// A net amount with its resolved tax context applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxedAmount {
    /// Kind of tax levied.
    pub kind: TaxKind,
    /// Effective fractional rate used for `total`.
    pub rate: Decimal,
    /// Whether a validated tax number made the buyer exempt.
    pub exempt: bool,
    /// The net input amount.
    pub price: Decimal,
    /// `price × (1 + rate)`, exact decimal arithmetic.
    pub total: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn exempt_context_zeroes_rate() {
        let ctx = TaxContext::new(TaxKind::Vat, dec!(0.19), true);
        assert!(ctx.exempt);
        assert_eq!(ctx.rate, Decimal::ZERO);
    }

    #[test]
    fn non_exempt_context_keeps_rate() {
        let ctx = TaxContext::new(TaxKind::Vat, dec!(0.19), false);
        assert!(!ctx.exempt);
        assert_eq!(ctx.rate, dec!(0.19));
    }

    #[test]
    fn apply_computes_exact_total() {
        let ctx = TaxContext::new(TaxKind::Vat, dec!(0.20), false);
        let amount = ctx.apply(dec!(100.00));
        assert_eq!(amount.price, dec!(100.00));
        assert_eq!(amount.total, dec!(120.00));
    }

    #[test]
    fn apply_with_zero_rate_is_identity() {
        let ctx = TaxContext::new(TaxKind::None, Decimal::ZERO, false);
        let amount = ctx.apply(dec!(42.50));
        assert_eq!(amount.total, dec!(42.50));
    }

    #[test]
    fn kind_labels() {
        assert_eq!(TaxKind::Vat.to_string(), "vat");
        assert_eq!(TaxKind::Gst.to_string(), "gst");
        assert_eq!(TaxKind::None.to_string(), "none");
    }

    #[test]
    fn kind_serde_lowercase() {
        assert_eq!(serde_json::to_string(&TaxKind::Gst).unwrap(), "\"gst\"");
        let kind: TaxKind = serde_json::from_str("\"vat\"").unwrap();
        assert_eq!(kind, TaxKind::Vat);
    }
}
