//! Human-readable rendering of a `PricingBreakdown`.

use crate::domain::breakdown::PricingBreakdown;
use crate::domain::money::Money;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Width in columns of a bar representing the full sales price.
pub const BAR_WIDTH: usize = 40;

const CURRENCY: &str = "TL";
const LABEL_WIDTH: usize = 24;
const AMOUNT_WIDTH: usize = 16;

pub fn format_money(amount: Money) -> String {
    format!("{amount} {CURRENCY}")
}

pub fn format_percent(value: Decimal) -> String {
    format!("{value:.2}%")
}

/// Number of bar cells for `amount` relative to `sales_price`, capped at `BAR_WIDTH`.
pub fn bar_length(amount: Money, sales_price: Money) -> usize {
    if sales_price.value() <= Decimal::ZERO || amount.value() <= Decimal::ZERO {
        return 0;
    }
    let Some(share) = amount.value().checked_div(sales_price.value()) else {
        return 0;
    };
    let cells = (share * Decimal::from(BAR_WIDTH))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .min(Decimal::from(BAR_WIDTH));
    cells.to_usize().unwrap_or(0)
}

/// Renders the breakdown as an aligned table with one bar per expense.
pub fn render_text(breakdown: &PricingBreakdown) -> String {
    let mut out = String::new();
    let price = breakdown.sales_price;

    push_line(&mut out, "Sales price", &format_money(price), "");
    for (label, amount) in breakdown.expenses() {
        let label = match label {
            "Commission" if !breakdown.commission_label.is_empty() => {
                format!("Commission ({}%)", breakdown.commission_percent())
            }
            "Shipping" => format!("Shipping ({})", breakdown.shipping_band),
            other => other.to_string(),
        };
        let bar = "#".repeat(bar_length(amount, price));
        push_line(&mut out, &label, &format_money(amount), &bar);
    }
    push_line(
        &mut out,
        "Total expenses",
        &format_money(breakdown.total_expenses),
        "",
    );
    push_line(&mut out, "Net profit", &format_money(breakdown.net_profit), "");
    push_line(
        &mut out,
        "Profit margin",
        &format_percent(breakdown.profit_margin_percent),
        "",
    );
    if breakdown.is_loss() {
        out.push_str("Warning: this sale makes a loss\n");
    }
    out
}

fn push_line(out: &mut String, label: &str, value: &str, bar: &str) {
    out.push_str(&format!(
        "{label:<LABEL_WIDTH$}{value:>AMOUNT_WIDTH$}  {bar}\n"
    ));
}
