//! HTML rendering.
//!
//! Pages are assembled from string templates. Every value that came from the
//! catalog or the request goes through [`html_escape`].

mod cart;
mod layout;
mod pages;
mod products;

pub use cart::render_cart_page;
pub use layout::Layout;
pub use pages::{render_error_page, render_listing_page, render_support_page};
pub use products::{render_product_card, render_stars};

/// Escape text for use in HTML content and attribute values.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
