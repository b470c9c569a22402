//! Page models for the listing views.
//!
//! Building a model is a pure function of the catalog, the request
//! parameters and the visitor's cart count. Rendering happens in
//! [`crate::render`].

use storefront_commerce::prelude::*;

/// The listing pages the storefront serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    BestSellers,
    FiveStar,
    EarlyDeals,
    Search,
    Support,
}

impl Page {
    /// Navigation entries in header order.
    pub const NAV: [Page; 5] = [
        Page::Home,
        Page::BestSellers,
        Page::FiveStar,
        Page::EarlyDeals,
        Page::Support,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::BestSellers => "/bestsellers",
            Page::FiveStar => "/fivestaritems",
            Page::EarlyDeals => "/earlyblackfriday",
            Page::Search => "/search",
            Page::Support => "/support",
        }
    }

    /// Page heading and document title. The home page is titled after the
    /// store.
    pub fn title(&self, store_name: &str) -> String {
        match self {
            Page::Home => store_name.to_string(),
            Page::BestSellers => "Best-Selling Items".to_string(),
            Page::FiveStar => "Five Star Items".to_string(),
            Page::EarlyDeals => "Early Black Friday Deals".to_string(),
            Page::Search => "Search Results".to_string(),
            Page::Support => "Support".to_string(),
        }
    }

    /// Short label for the navigation bar.
    pub fn nav_label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::BestSellers => "Best Sellers",
            Page::FiveStar => "Five Star",
            Page::EarlyDeals => "Black Friday",
            Page::Search => "Search",
            Page::Support => "Support",
        }
    }

    /// The catalog filter behind a listing page. Support lists nothing and
    /// search is driven by its query.
    pub fn filter(&self) -> Option<ProductFilter> {
        match self {
            Page::Home => Some(ProductFilter::All),
            Page::BestSellers => Some(ProductFilter::BestSellers),
            Page::FiveStar => Some(ProductFilter::FiveStar),
            Page::EarlyDeals => Some(ProductFilter::EarlyDeals),
            Page::Search | Page::Support => None,
        }
    }
}

/// Query and hit count shown on the search page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSummary {
    pub query: String,
    pub result_count: usize,
}

/// Everything a listing page needs.
#[derive(Debug, Clone)]
pub struct PageModel<'a> {
    pub page: Page,
    pub title: String,
    pub items: Vec<&'a Product>,
    pub search: Option<SearchSummary>,
    pub cart_count: i64,
}

impl<'a> PageModel<'a> {
    /// Model for a filtered listing or the support page.
    pub fn listing(page: Page, catalog: &'a Catalog, store_name: &str, cart_count: i64) -> Self {
        let items = page
            .filter()
            .map(|filter| catalog.select(&filter))
            .unwrap_or_default();

        Self {
            page,
            title: page.title(store_name),
            items,
            search: None,
            cart_count,
        }
    }

    /// Model for the search page.
    pub fn search(catalog: &'a Catalog, query: &SearchQuery, cart_count: i64) -> Self {
        let results = query.run(catalog);
        Self {
            page: Page::Search,
            title: Page::Search.title(""),
            search: Some(SearchSummary {
                query: results.query,
                result_count: results.result_count,
            }),
            items: results.items,
            cart_count,
        }
    }
}
