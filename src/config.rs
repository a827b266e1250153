use crate::domain::commission::CommissionTier;
use crate::domain::tax::DEFAULT_WITHHOLDING_RATE;
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Engine settings read from a JSON file.
///
/// Every key is optional; absent keys keep the built-in marketplace values.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    #[serde(default = "default_withholding_rate")]
    pub withholding_rate: Decimal,
    /// Replaces the built-in commission schedule when present.
    #[serde(default)]
    pub tiers: Option<Vec<CommissionTier>>,
}

fn default_withholding_rate() -> Decimal {
    DEFAULT_WITHHOLDING_RATE
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            withholding_rate: DEFAULT_WITHHOLDING_RATE,
            tiers: None,
        }
    }
}

impl EngineConfig {
    pub fn from_reader<R: Read>(source: R) -> Result<Self> {
        Ok(serde_json::from_reader(source)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}
