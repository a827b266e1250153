use crate::domain::breakdown::PricingBreakdown;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct BreakdownRecord<'a> {
    sku: &'a str,
    sales_price: String,
    product_cost: String,
    commission_rate: String,
    commission: String,
    vat: String,
    shipping: String,
    withholding: String,
    total_expenses: String,
    net_profit: String,
    margin_percent: String,
}

impl<'a> BreakdownRecord<'a> {
    fn new(sku: &'a str, breakdown: &PricingBreakdown) -> Self {
        Self {
            sku,
            sales_price: breakdown.sales_price.to_string(),
            product_cost: breakdown.product_cost.to_string(),
            commission_rate: breakdown.commission_rate.normalize().to_string(),
            commission: breakdown.commission_amount.to_string(),
            vat: breakdown.vat_amount.to_string(),
            shipping: breakdown.shipping_cost.to_string(),
            withholding: breakdown.withholding_amount.to_string(),
            total_expenses: breakdown.total_expenses.to_string(),
            net_profit: breakdown.net_profit.to_string(),
            margin_percent: format!("{:.2}", breakdown.profit_margin_percent),
        }
    }
}

/// Writes breakdowns as CSV rows with two-decimal amounts.
pub struct BreakdownWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> BreakdownWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write(&mut self, sku: &str, breakdown: &PricingBreakdown) -> Result<()> {
        self.writer.serialize(BreakdownRecord::new(sku, breakdown))?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
