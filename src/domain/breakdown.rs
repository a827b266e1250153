use crate::domain::money::Money;
use crate::domain::shipping::{ShippingBand, ShippingRates};
use crate::domain::tax::DEFAULT_VAT_RATE_PERCENT;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Normalized inputs of a single profit calculation.
///
/// Amounts are expected to be non-negative; the input adapter clamps and
/// defaults raw values before they reach the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingInputs {
    pub product_cost: Money,
    pub vat_rate_percent: Decimal,
    /// Tax-inclusive price the buyer pays.
    pub sales_price: Money,
    pub shipping_rates: ShippingRates,
}

impl Default for PricingInputs {
    fn default() -> Self {
        Self {
            product_cost: Money::ZERO,
            vat_rate_percent: DEFAULT_VAT_RATE_PERCENT,
            sales_price: Money::ZERO,
            shipping_rates: ShippingRates::default(),
        }
    }
}

/// Itemized decomposition of one sale.
///
/// Monetary components are rounded to kuruş, and `net_profit` is derived from
/// the rounded components so that
/// `net_profit + total_expenses == sales_price` holds exactly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingBreakdown {
    pub sales_price: Money,
    pub product_cost: Money,
    pub commission_label: String,
    pub commission_rate: Decimal,
    pub commission_amount: Money,
    pub vat_amount: Money,
    pub shipping_band: ShippingBand,
    pub shipping_cost: Money,
    pub withholding_amount: Money,
    pub total_expenses: Money,
    pub net_profit: Money,
    pub profit_margin_percent: Decimal,
}

impl PricingBreakdown {
    /// The all-zero breakdown shown when a calculation cannot be performed.
    pub fn zero() -> Self {
        Self {
            sales_price: Money::ZERO,
            product_cost: Money::ZERO,
            commission_label: String::new(),
            commission_rate: Decimal::ZERO,
            commission_amount: Money::ZERO,
            vat_amount: Money::ZERO,
            shipping_band: ShippingBand::UpTo150,
            shipping_cost: Money::ZERO,
            withholding_amount: Money::ZERO,
            total_expenses: Money::ZERO,
            net_profit: Money::ZERO,
            profit_margin_percent: Decimal::ZERO,
        }
    }

    /// Expense components in display order.
    pub fn expenses(&self) -> [(&'static str, Money); 5] {
        [
            ("Product cost", self.product_cost),
            ("Commission", self.commission_amount),
            ("VAT", self.vat_amount),
            ("Shipping", self.shipping_cost),
            ("Withholding", self.withholding_amount),
        ]
    }

    /// Commission rate in percent, without trailing zeros (0.184 -> 18.4).
    pub fn commission_percent(&self) -> Decimal {
        (self.commission_rate * Decimal::ONE_HUNDRED).normalize()
    }

    pub fn is_loss(&self) -> bool {
        self.net_profit.is_negative()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_inputs_use_default_vat() {
        let inputs = PricingInputs::default();
        assert_eq!(inputs.vat_rate_percent, dec!(20));
        assert_eq!(inputs.sales_price, Money::ZERO);
    }

    #[test]
    fn test_zero_breakdown() {
        let zero = PricingBreakdown::zero();
        assert!(!zero.is_loss());
        assert!(zero.expenses().iter().all(|(_, amount)| *amount == Money::ZERO));
        assert_eq!(zero.profit_margin_percent, Decimal::ZERO);
    }

    #[test]
    fn test_commission_percent() {
        let mut breakdown = PricingBreakdown::zero();
        breakdown.commission_rate = dec!(0.184);
        assert_eq!(breakdown.commission_percent().to_string(), "18.4");
        breakdown.commission_rate = dec!(0.23);
        assert_eq!(breakdown.commission_percent().to_string(), "23");
    }

    #[test]
    fn test_loss_detection() {
        let mut breakdown = PricingBreakdown::zero();
        breakdown.net_profit = Money::new(dec!(-12.40));
        assert!(breakdown.is_loss());
    }
}
