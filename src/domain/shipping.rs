use crate::domain::money::Money;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sales price bands used by the marketplace to price shipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShippingBand {
    #[serde(rename = "0-150")]
    UpTo150,
    #[serde(rename = "150-300")]
    From150To300,
    #[serde(rename = "300+")]
    From300,
}

impl ShippingBand {
    /// Lower band edges are inclusive: 150 is in `150-300`, 300 is in `300+`.
    pub fn for_price(price: Money) -> Self {
        if price.value() >= dec!(300) {
            ShippingBand::From300
        } else if price.value() >= dec!(150) {
            ShippingBand::From150To300
        } else {
            ShippingBand::UpTo150
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ShippingBand::UpTo150 => "0-150",
            ShippingBand::From150To300 => "150-300",
            ShippingBand::From300 => "300+",
        }
    }
}

impl fmt::Display for ShippingBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Shipping cost charged for each price band.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ShippingRates {
    pub up_to_150: Money,
    pub from_150_to_300: Money,
    pub from_300: Money,
}

impl ShippingRates {
    pub fn new(up_to_150: Money, from_150_to_300: Money, from_300: Money) -> Self {
        Self {
            up_to_150,
            from_150_to_300,
            from_300,
        }
    }

    pub fn rate_for(&self, band: ShippingBand) -> Money {
        match band {
            ShippingBand::UpTo150 => self.up_to_150,
            ShippingBand::From150To300 => self.from_150_to_300,
            ShippingBand::From300 => self.from_300,
        }
    }
}
