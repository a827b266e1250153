use crate::domain::money::{MINOR_UNITS, Money};
use crate::error::{PricingError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::iter;

/// Distance between the upper bound of a tier and the lower bound of the next one.
const TIER_STEP: Decimal = dec!(0.01);

/// A sales price range with the marketplace commission charged inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommissionTier {
    pub label: String,
    pub lower_bound: Money,
    /// `None` means the tier has no upper limit.
    #[serde(default)]
    pub upper_bound: Option<Money>,
    /// Commission as a fraction of the sales price (0.23 = 23%).
    pub rate: Decimal,
}

impl CommissionTier {
    pub fn new(
        label: impl Into<String>,
        lower_bound: Money,
        upper_bound: Option<Money>,
        rate: Decimal,
    ) -> Self {
        Self {
            label: label.into(),
            lower_bound,
            upper_bound,
            rate,
        }
    }

    /// Both ends inclusive.
    pub fn contains(&self, price: Money) -> bool {
        price >= self.lower_bound && self.upper_bound.is_none_or(|upper| price <= upper)
    }
}

/// An ordered, validated set of commission tiers.
///
/// Tiers are stored by descending lower bound. The cheapest tier is kept apart
/// so that selection can always fall back to it.
#[derive(Debug, Clone, PartialEq)]
pub struct CommissionSchedule {
    upper_tiers: Vec<CommissionTier>,
    base: CommissionTier,
}

impl CommissionSchedule {
    /// Builds a schedule, checking that the tiers partition `[0, ∞)` on the kuruş grid.
    pub fn new(tiers: Vec<CommissionTier>) -> Result<Self> {
        if let Some(first) = tiers.first() {
            if first.upper_bound.is_some() {
                return Err(PricingError::ScheduleError(format!(
                    "highest tier '{}' must have no upper bound",
                    first.label
                )));
            }
        }

        for tier in &tiers {
            if tier.rate < Decimal::ZERO || tier.rate > Decimal::ONE {
                return Err(PricingError::ScheduleError(format!(
                    "tier '{}' has rate {} outside [0, 1]",
                    tier.label, tier.rate
                )));
            }
            let off_grid = iter::once(tier.lower_bound)
                .chain(tier.upper_bound)
                .any(|bound| bound.value().normalize().scale() > MINOR_UNITS);
            if off_grid {
                return Err(PricingError::ScheduleError(format!(
                    "tier '{}' has a bound with more than {} decimals",
                    tier.label, MINOR_UNITS
                )));
            }
            if let Some(upper) = tier.upper_bound {
                if upper < tier.lower_bound {
                    return Err(PricingError::ScheduleError(format!(
                        "tier '{}' has upper bound below its lower bound",
                        tier.label
                    )));
                }
            }
        }

        for pair in tiers.windows(2) {
            let (higher, lower) = (&pair[0], &pair[1]);
            let Some(lower_upper) = lower.upper_bound else {
                return Err(PricingError::ScheduleError(format!(
                    "only the highest tier may be unbounded, found '{}'",
                    lower.label
                )));
            };
            if higher.lower_bound <= lower.lower_bound {
                return Err(PricingError::ScheduleError(format!(
                    "tiers must be ordered by descending lower bound ('{}' before '{}')",
                    higher.label, lower.label
                )));
            }
            if higher.lower_bound.value() != lower_upper.value() + TIER_STEP {
                return Err(PricingError::ScheduleError(format!(
                    "tiers '{}' and '{}' leave a gap or overlap",
                    higher.label, lower.label
                )));
            }
        }

        let mut upper_tiers = tiers;
        let Some(base) = upper_tiers.pop() else {
            return Err(PricingError::ScheduleError(
                "at least one tier is required".to_string(),
            ));
        };
        if base.lower_bound != Money::ZERO {
            return Err(PricingError::ScheduleError(format!(
                "lowest tier '{}' must start at 0",
                base.label
            )));
        }

        Ok(Self { upper_tiers, base })
    }

    /// Returns the first tier containing `price`, or the cheapest tier when none does.
    pub fn select(&self, price: Money) -> &CommissionTier {
        self.tiers()
            .find(|tier| tier.contains(price))
            .unwrap_or(&self.base)
    }

    /// Tiers in evaluation order (descending lower bound).
    pub fn tiers(&self) -> impl Iterator<Item = &CommissionTier> {
        self.upper_tiers.iter().chain(iter::once(&self.base))
    }
}

impl Default for CommissionSchedule {
    fn default() -> Self {
        Self {
            upper_tiers: vec![
                CommissionTier::new("476.28+", Money::new(dec!(476.28)), None, dec!(0.23)),
                CommissionTier::new(
                    "374.51-476.27",
                    Money::new(dec!(374.51)),
                    Some(Money::new(dec!(476.27))),
                    dec!(0.184),
                ),
            ],
            base: CommissionTier::new(
                "0-374.50",
                Money::ZERO,
                Some(Money::new(dec!(374.50))),
                dec!(0.135),
            ),
        }
    }
}
