//! Domain value types and pricing formulas.

pub mod breakdown;
pub mod commission;
pub mod money;
pub mod shipping;
pub mod tax;
