//! Listing, support and error pages.

use http::StatusCode;

use super::products::render_product_grid;
use super::{html_escape, Layout};
use crate::views::{Page, PageModel};

/// Render a listing page (home, filtered views and search).
pub fn render_listing_page(model: &PageModel<'_>, store_name: &str) -> String {
    let mut layout = Layout::new(store_name, &model.title)
        .with_active(model.page)
        .with_cart_count(model.cart_count);

    let summary = match &model.search {
        Some(search) => {
            layout = layout.with_search_query(&search.query);
            if search.query.is_empty() {
                format!(
                    r#"<p class="search-summary">Showing all {} products</p>"#,
                    search.result_count
                )
            } else {
                format!(
                    r#"<p class="search-summary">{} result{} for &quot;{}&quot;</p>"#,
                    search.result_count,
                    if search.result_count == 1 { "" } else { "s" },
                    html_escape(&search.query)
                )
            }
        }
        None => String::new(),
    };

    let empty_message = match model.page {
        Page::Search => "No products match your search.",
        Page::EarlyDeals => "No deals right now. Check back soon.",
        _ => "No products to show.",
    };

    let main = format!(
        r#"<section class="listing">
    <h1 class="page-title">{}</h1>
    {}
    {}
</section>"#,
        html_escape(&model.title),
        summary,
        render_product_grid(&model.items, empty_message)
    );

    layout.render(&main)
}

/// Render the static support page.
pub fn render_support_page(store_name: &str, cart_count: i64) -> String {
    let title = Page::Support.title(store_name);
    let main = format!(
        r#"<section class="support">
    <h1 class="page-title">{title}</h1>
    <p>Questions about an order or a product? We are happy to help.</p>
    <h2>Shipping</h2>
    <p>Orders ship within two business days. Delivery usually takes three to five days.</p>
    <h2>Returns</h2>
    <p>Unused items can be returned within 30 days of delivery for a full refund.</p>
    <h2>Contact</h2>
    <p>Email <a href="mailto:support@example.com">support@example.com</a> and we will get back to you within one business day.</p>
</section>"#,
        title = html_escape(&title)
    );

    Layout::new(store_name, &title)
        .with_active(Page::Support)
        .with_cart_count(cart_count)
        .render(&main)
}

/// Render a standalone error page.
///
/// Error pages do not depend on application state so they can be produced
/// from any failure, including a panic.
pub fn render_error_page(status: StatusCode, message: &str) -> String {
    let code = status.as_u16();
    let reason = status.canonical_reason().unwrap_or("Error");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <link rel="stylesheet" href="/static/css/style.css">
    <title>{code} {reason}</title>
</head>
<body>
<main class="container error-page">
    <h1>{code}</h1>
    <h2>{reason}</h2>
    <p>{message}</p>
    <a href="/" class="button">Back to the store</a>
</main>
</body>
</html>"#,
        message = html_escape(message)
    )
}
