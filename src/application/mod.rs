//! Application layer coordinating the cart with its catalog.
//!
//! This module defines the `CheckoutSession` which owns the cart of one
//! register session and turns user intents into cart operations, and the
//! catalog listing behind `--list`.

pub mod listing;
pub mod session;
