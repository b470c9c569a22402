//! Shared page shell: head, header navigation and footer.

use super::html_escape;
use crate::views::Page;

/// The chrome wrapped around every page.
#[derive(Debug, Clone)]
pub struct Layout<'a> {
    /// Store name shown in the header and the document title.
    pub store_name: &'a str,
    /// Page title.
    pub title: &'a str,
    /// Highlighted navigation entry.
    pub active: Option<Page>,
    /// Items in the visitor's cart.
    pub cart_count: i64,
    /// Value to pre-fill the search box with.
    pub search_query: Option<&'a str>,
}

impl<'a> Layout<'a> {
    pub fn new(store_name: &'a str, title: &'a str) -> Self {
        Self {
            store_name,
            title,
            active: None,
            cart_count: 0,
            search_query: None,
        }
    }

    pub fn with_active(mut self, page: Page) -> Self {
        self.active = Some(page);
        self
    }

    pub fn with_cart_count(mut self, count: i64) -> Self {
        self.cart_count = count;
        self
    }

    pub fn with_search_query(mut self, query: &'a str) -> Self {
        self.search_query = Some(query);
        self
    }

    /// Wrap `main_html` in the full document.
    pub fn render(&self, main_html: &str) -> String {
        let document_title = if self.title == self.store_name {
            html_escape(self.title)
        } else {
            format!("{} | {}", html_escape(self.title), html_escape(self.store_name))
        };

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <link rel="stylesheet" href="/static/css/style.css">
    <title>{document_title}</title>
</head>
<body>
{header}
<main class="container">
{main_html}
</main>
<footer class="site-footer">
    <p>&copy; {store_name}</p>
</footer>
<script src="/static/js/cart.js" defer></script>
</body>
</html>"#,
            header = self.render_header(),
            store_name = html_escape(self.store_name),
        )
    }

    fn render_header(&self) -> String {
        let nav: String = Page::NAV
            .iter()
            .map(|page| {
                let class = if self.active == Some(*page) {
                    "nav-link active"
                } else {
                    "nav-link"
                };
                format!(
                    r#"<a href="{}" class="{}">{}</a>"#,
                    page.path(),
                    class,
                    page.nav_label()
                )
            })
            .collect();

        let badge_style = if self.cart_count > 0 {
            ""
        } else {
            r#" style="display: none""#
        };

        format!(
            r#"<header class="site-header">
    <a href="/" class="brand">{store_name}</a>
    <nav class="site-nav">{nav}</nav>
    <form class="search-form" action="/search" method="get" role="search">
        <input type="search" name="query" placeholder="Search products" value="{query}">
        <button type="submit">Search</button>
    </form>
    <a href="/cart" class="cart-link" aria-label="Cart">
        Cart <span class="cart-count" data-cart-count{badge_style}>{count}</span>
    </a>
</header>"#,
            store_name = html_escape(self.store_name),
            query = html_escape(self.search_query.unwrap_or("")),
            count = self.cart_count,
        )
    }
}
