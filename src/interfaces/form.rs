//! Input adapter turning raw text fields into normalized `PricingInputs`.
//!
//! Nothing here fails: unusable values become zero (or the default VAT rate),
//! so the engine only ever sees safe, non-negative numbers.

use crate::domain::breakdown::PricingInputs;
use crate::domain::money::Money;
use crate::domain::shipping::ShippingRates;
use crate::domain::tax::DEFAULT_VAT_RATE_PERCENT;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::str::FromStr;

/// Upper clamp for any amount entering the engine.
pub const MAX_AMOUNT: Decimal = dec!(1000000000000);

const MAX_VAT_RATE_PERCENT: Decimal = dec!(100);

/// Raw, unvalidated calculator fields as typed by a user or read from CSV.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawPricingInputs {
    #[serde(default)]
    pub product_cost: Option<String>,
    #[serde(default)]
    pub vat_rate: Option<String>,
    #[serde(default)]
    pub sales_price: Option<String>,
    #[serde(default)]
    pub shipping_0_150: Option<String>,
    #[serde(default)]
    pub shipping_150_300: Option<String>,
    #[serde(default)]
    pub shipping_300_plus: Option<String>,
}

impl RawPricingInputs {
    pub fn normalize(&self) -> PricingInputs {
        PricingInputs {
            product_cost: parse_amount(self.product_cost.as_deref()),
            vat_rate_percent: parse_vat_rate(self.vat_rate.as_deref()),
            sales_price: parse_amount(self.sales_price.as_deref()),
            shipping_rates: ShippingRates::new(
                parse_amount(self.shipping_0_150.as_deref()),
                parse_amount(self.shipping_150_300.as_deref()),
                parse_amount(self.shipping_300_plus.as_deref()),
            ),
        }
    }
}

fn parse_decimal(raw: Option<&str>) -> Option<Decimal> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

/// Parses a currency amount: invalid or negative values become 0, large ones are clamped.
pub fn parse_amount(raw: Option<&str>) -> Money {
    let value = parse_decimal(raw)
        .unwrap_or(Decimal::ZERO)
        .clamp(Decimal::ZERO, MAX_AMOUNT);
    Money::new(value).round_minor()
}

/// Parses a VAT percentage, falling back to the default outside `[0, 100]`.
pub fn parse_vat_rate(raw: Option<&str>) -> Decimal {
    match parse_decimal(raw) {
        Some(rate) if rate >= Decimal::ZERO && rate <= MAX_VAT_RATE_PERCENT => rate,
        _ => DEFAULT_VAT_RATE_PERCENT,
    }
}
