//! Shopping cart module.
//!
//! Contains the session cart and its priced view.

mod cart;
mod pricing;

pub use cart::{Cart, CartEntry};
pub use pricing::{CartLine, CartView};
