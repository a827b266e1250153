use crate::config::EngineConfig;
use crate::domain::breakdown::{PricingBreakdown, PricingInputs};
use crate::domain::commission::{CommissionSchedule, CommissionTier};
use crate::domain::money::Money;
use crate::domain::shipping::{ShippingBand, ShippingRates};
use crate::domain::tax::{self, DEFAULT_WITHHOLDING_RATE};
use crate::error::{PricingError, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Computes the profit breakdown of a marketplace sale.
///
/// `PricingEngine` holds only immutable configuration: the commission
/// schedule and the withholding rate. Every call is independent and pure.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingEngine {
    schedule: CommissionSchedule,
    withholding_rate: Decimal,
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::new(CommissionSchedule::default(), DEFAULT_WITHHOLDING_RATE)
    }
}

impl PricingEngine {
    /// Creates a new `PricingEngine`.
    ///
    /// # Arguments
    ///
    /// * `schedule` - The validated commission tiers.
    /// * `withholding_rate` - Fraction of the VAT-exclusive price withheld (0.01 = 1%).
    pub fn new(schedule: CommissionSchedule, withholding_rate: Decimal) -> Self {
        Self {
            schedule,
            withholding_rate,
        }
    }

    /// Builds an engine from a loaded configuration, validating the tiers.
    pub fn from_config(config: EngineConfig) -> Result<Self> {
        if config.withholding_rate < Decimal::ZERO || config.withholding_rate > Decimal::ONE {
            return Err(PricingError::ConfigError(format!(
                "withholding rate {} outside [0, 1]",
                config.withholding_rate
            )));
        }
        let schedule = match config.tiers {
            Some(tiers) => CommissionSchedule::new(tiers)?,
            None => CommissionSchedule::default(),
        };
        Ok(Self::new(schedule, config.withholding_rate))
    }

    pub fn schedule(&self) -> &CommissionSchedule {
        &self.schedule
    }

    pub fn withholding_rate(&self) -> Decimal {
        self.withholding_rate
    }

    pub fn select_commission_tier(&self, sales_price: Money) -> &CommissionTier {
        self.schedule.select(sales_price)
    }

    pub fn select_shipping_cost(&self, sales_price: Money, rates: &ShippingRates) -> Money {
        rates.rate_for(ShippingBand::for_price(sales_price))
    }

    pub fn compute_vat(
        &self,
        sales_price: Money,
        vat_rate_percent: Decimal,
        other_expenses_vat: Money,
    ) -> Money {
        tax::compute_vat(sales_price, vat_rate_percent, other_expenses_vat)
    }

    pub fn compute_withholding(&self, sales_price: Money, vat_rate_percent: Decimal) -> Money {
        tax::compute_withholding(sales_price, vat_rate_percent, self.withholding_rate)
    }

    /// Computes every component of the sale from scratch.
    pub fn compute_breakdown(&self, inputs: &PricingInputs) -> PricingBreakdown {
        let sales_price = inputs.sales_price.round_minor();
        let product_cost = inputs.product_cost.round_minor();

        let tier = self.select_commission_tier(sales_price);
        let commission_amount = Money::new(sales_price.value() * tier.rate).round_minor();
        let vat_amount = self
            .compute_vat(sales_price, inputs.vat_rate_percent, Money::ZERO)
            .round_minor();
        let shipping_band = ShippingBand::for_price(sales_price);
        let shipping_cost = self
            .select_shipping_cost(sales_price, &inputs.shipping_rates)
            .round_minor();
        let withholding_amount = self
            .compute_withholding(sales_price, inputs.vat_rate_percent)
            .round_minor();

        let total_expenses =
            product_cost + commission_amount + vat_amount + shipping_cost + withholding_amount;
        let net_profit = sales_price - total_expenses;
        let profit_margin_percent = profit_margin_percent(net_profit, sales_price);

        tracing::debug!(
            price = %sales_price,
            tier = %tier.label,
            band = %shipping_band,
            net = %net_profit,
            "Computed breakdown"
        );

        PricingBreakdown {
            sales_price,
            product_cost,
            commission_label: tier.label.clone(),
            commission_rate: tier.rate,
            commission_amount,
            vat_amount,
            shipping_band,
            shipping_cost,
            withholding_amount,
            total_expenses,
            net_profit,
            profit_margin_percent,
        }
    }
}

/// Net profit as a percentage of the sales price, 0 for a zero price.
fn profit_margin_percent(net_profit: Money, sales_price: Money) -> Decimal {
    if sales_price.value() <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    net_profit
        .value()
        .checked_div(sales_price.value())
        .and_then(|ratio| ratio.checked_mul(dec!(100)))
        .map(|margin| {
            let mut margin = margin.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            margin.rescale(2);
            margin
        })
        .unwrap_or(Decimal::ZERO)
}
