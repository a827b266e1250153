//! Application layer containing the pricing rules.
//!
//! This module defines the `PricingEngine`, the single entry point the
//! interfaces call to turn normalized inputs into a `PricingBreakdown`.

pub mod engine;
