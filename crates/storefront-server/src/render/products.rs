//! Product cards and grids.

use storefront_commerce::catalog::{Product, MAX_RATING};

use super::html_escape;

const PLACEHOLDER_IMAGE: &str = "/static/img/placeholder.svg";

/// Render a grid of product cards, or an empty-state message.
pub fn render_product_grid(products: &[&Product], empty_message: &str) -> String {
    if products.is_empty() {
        return format!(
            r#"<p class="empty-state">{}</p>"#,
            html_escape(empty_message)
        );
    }

    let cards: String = products.iter().map(|p| render_product_card(p)).collect();
    format!(r#"<div class="product-grid">{}</div>"#, cards)
}

/// Render a single product card with its add-to-cart button.
pub fn render_product_card(product: &Product) -> String {
    let image = product.image.as_deref().unwrap_or(PLACEHOLDER_IMAGE);

    let mut badges = String::new();
    if product.is_best_seller {
        badges.push_str(r#"<span class="badge badge-bestseller">Best Seller</span>"#);
    }
    if product.black_friday_deal {
        badges.push_str(r#"<span class="badge badge-deal">Black Friday</span>"#);
    }

    let description = product
        .description
        .as_deref()
        .map(|d| format!(r#"<p class="product-description">{}</p>"#, html_escape(d)))
        .unwrap_or_default();

    let (stock_class, stock_text) = if product.in_stock {
        ("in-stock", "In Stock")
    } else {
        ("out-of-stock", "Out of Stock")
    };

    format!(
        r#"<article class="product-card" data-product-id="{id}">
    <div class="product-image">
        <img src="{image}" alt="{name}" loading="lazy">
        {badges}
    </div>
    <div class="product-info">
        <h3 class="product-title">{name}</h3>
        {description}
        <div class="product-rating">{stars}</div>
        <div class="product-price">{price}</div>
        <div class="product-stock {stock_class}">{stock_text}</div>
    </div>
    <button class="add-to-cart-btn" data-product-id="{id}"{disabled}>Add to Cart</button>
</article>"#,
        id = product.id,
        image = html_escape(image),
        name = html_escape(&product.name),
        stars = render_stars(product.rating),
        price = product.price.display(),
        disabled = if product.in_stock { "" } else { " disabled" },
    )
}

/// Render a whole-star rating out of five.
pub fn render_stars(rating: u8) -> String {
    let full = rating.min(MAX_RATING);
    let empty = MAX_RATING - full;

    let mut html = format!(
        r#"<span class="stars" aria-label="{} out of {} stars">"#,
        full, MAX_RATING
    );
    for _ in 0..full {
        html.push_str(r#"<span class="star full">★</span>"#);
    }
    for _ in 0..empty {
        html.push_str(r#"<span class="star empty">☆</span>"#);
    }
    html.push_str("</span>");
    html
}
