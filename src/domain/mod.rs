//! Domain types of the point-of-sale cart.
//!
//! Everything here is synchronous and free of I/O apart from the
//! [`ports::CatalogProvider`] seam.

pub mod cart;
pub mod catalog;
pub mod intent;
pub mod money;
pub mod ports;
pub mod product;
