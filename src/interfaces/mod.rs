//! Adapters between the cart and the outside world.

pub mod csv;
