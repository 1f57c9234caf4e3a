//! Catalog provider implementations.

pub mod in_memory;
