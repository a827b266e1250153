pub mod breakdown_writer;
pub mod pricing_reader;
