use crate::error::{PricingError, Result};
use crate::interfaces::form::RawPricingInputs;
use serde::Deserialize;
use std::io::Read;

/// One line of a batch pricing file.
///
/// Every column is optional text; numeric validation happens in
/// `RawPricingInputs::normalize`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PricingRow {
    #[serde(default)]
    pub sku: Option<String>,
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

impl PricingRow {
    /// Splits the row into its identifier and the raw calculator fields.
    pub fn into_parts(self) -> (String, RawPricingInputs) {
        let sku = self.sku.unwrap_or_default();
        let raw = RawPricingInputs {
            product_cost: self.product_cost,
            vat_rate: self.vat_rate,
            sales_price: self.sales_price,
            shipping_0_150: self.shipping_0_150,
            shipping_150_300: self.shipping_150_300,
            shipping_300_plus: self.shipping_300_plus,
        };
        (sku, raw)
    }
}

/// Reads pricing rows from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over `Result<PricingRow>`.
/// It trims whitespace and accepts rows with missing trailing columns.
pub struct PricingReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> PricingReader<R> {
    /// Creates a new `PricingReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes rows.
    pub fn rows(self) -> impl Iterator<Item = Result<PricingRow>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PricingError::from))
    }
}
