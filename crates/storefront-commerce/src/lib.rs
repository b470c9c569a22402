//! Catalog, search and cart domain logic for the storefront.
//!
//! This crate holds everything the storefront knows about products and carts,
//! independent of HTTP:
//!
//! - **Catalog**: Immutable product list loaded once at startup
//! - **Search**: Named views (bestsellers, five-star, deals) and text search
//! - **Cart**: Per-session quantity bookkeeping and priced cart views
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_commerce::prelude::*;
//!
//! let catalog = Catalog::load("data/products.json")?;
//!
//! let mut cart = Cart::new();
//! cart.add(&catalog, ProductId::new(7))?;
//! cart.add(&catalog, ProductId::new(7))?;
//!
//! let view = cart.view(&catalog)?;
//! println!("Total: {}", view.total.display());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod cart;
pub mod search;

pub use cart::Cart;
pub use catalog::{Catalog, Product};
pub use error::CommerceError;
pub use ids::ProductId;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{Catalog, Product};

    // Cart
    pub use crate::cart::{Cart, CartEntry, CartLine, CartView};

    // Search
    pub use crate::search::{ProductFilter, SearchQuery, SearchResults, DEAL_PRICE_CEILING};
}
