//! Adapters between the outside world and the pricing engine.

pub mod csv;
pub mod form;
pub mod report;
