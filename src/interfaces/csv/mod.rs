//! CSV input and output.

pub mod catalog_reader;
pub mod catalog_writer;
pub mod intent_reader;
pub mod receipt_writer;
