//! Tax formulas for tax-inclusive sales prices.
//!
//! Every function here is total for non-negative inputs. Rates are given in
//! percent (20 = 20%).

use crate::domain::money::Money;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// VAT rate applied when none (or an unusable one) is supplied.
pub const DEFAULT_VAT_RATE_PERCENT: Decimal = dec!(20);

/// Withholding (stopaj) rate applied to the VAT-exclusive price.
pub const DEFAULT_WITHHOLDING_RATE: Decimal = dec!(0.01);

const HUNDRED: Decimal = dec!(100);

/// Extracts the VAT contained in a tax-inclusive `sales_price`.
///
/// `vat = price * rate / (100 + rate)`, reduced by `other_expenses_vat` and
/// floored at zero.
pub fn compute_vat(sales_price: Money, vat_rate_percent: Decimal, other_expenses_vat: Money) -> Money {
    let price = sales_price.value();
    let denominator = match HUNDRED.checked_add(vat_rate_percent) {
        Some(denominator) if denominator > Decimal::ZERO => denominator,
        _ => return Money::ZERO,
    };
    let vat = match price.checked_mul(vat_rate_percent) {
        Some(scaled) => scaled / denominator,
        // rate / (100 + rate) < 1, so this order cannot overflow.
        None => price * (vat_rate_percent / denominator),
    };
    (Money::new(vat) - other_expenses_vat).non_negative()
}

/// Sales price with the VAT removed.
pub fn price_excluding_vat(sales_price: Money, vat_rate_percent: Decimal) -> Money {
    match Decimal::ONE.checked_add(vat_rate_percent / HUNDRED) {
        Some(divisor) if divisor > Decimal::ZERO => Money::new(sales_price.value() / divisor),
        _ => Money::ZERO,
    }
}

/// Withholding tax charged on the VAT-exclusive price.
pub fn compute_withholding(
    sales_price: Money,
    vat_rate_percent: Decimal,
    withholding_rate: Decimal,
) -> Money {
    let base = price_excluding_vat(sales_price, vat_rate_percent).value();
    Money::new(base.checked_mul(withholding_rate).unwrap_or(Decimal::MAX))
}
