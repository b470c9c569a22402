//! Server-rendered page handlers.

use axum::extract::{Query, State};
use axum::response::Html;
use axum::Extension;
use http::Uri;
use serde::Deserialize;
use storefront_commerce::search::SearchQuery;

use crate::error::PageError;
use crate::render;
use crate::session::ShopperSession;
use crate::state::AppState;
use crate::views::{Page, PageModel};

type PageResult = Result<Html<String>, PageError>;

fn listing(state: &AppState, shopper: &ShopperSession, page: Page) -> PageResult {
    let cart_count = shopper.cart(state)?.total_quantity();
    let store_name = &state.config.store.name;
    let model = PageModel::listing(page, &state.catalog, store_name, cart_count);
    Ok(Html(render::render_listing_page(&model, store_name)))
}

/// `GET /`
pub async fn home(
    State(state): State<AppState>,
    Extension(shopper): Extension<ShopperSession>,
) -> PageResult {
    listing(&state, &shopper, Page::Home)
}

/// `GET /bestsellers`
pub async fn best_sellers(
    State(state): State<AppState>,
    Extension(shopper): Extension<ShopperSession>,
) -> PageResult {
    listing(&state, &shopper, Page::BestSellers)
}

/// `GET /fivestaritems`
pub async fn five_star(
    State(state): State<AppState>,
    Extension(shopper): Extension<ShopperSession>,
) -> PageResult {
    listing(&state, &shopper, Page::FiveStar)
}

/// `GET /earlyblackfriday`
pub async fn early_deals(
    State(state): State<AppState>,
    Extension(shopper): Extension<ShopperSession>,
) -> PageResult {
    listing(&state, &shopper, Page::EarlyDeals)
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: String,
}

/// `GET /search?query=`
pub async fn search(
    State(state): State<AppState>,
    Extension(shopper): Extension<ShopperSession>,
    Query(params): Query<SearchParams>,
) -> PageResult {
    let cart_count = shopper.cart(&state)?.total_quantity();
    let query = SearchQuery::new(&params.query);
    let model = PageModel::search(&state.catalog, &query, cart_count);
    Ok(Html(render::render_listing_page(
        &model,
        &state.config.store.name,
    )))
}

/// `GET /support`
pub async fn support(
    State(state): State<AppState>,
    Extension(shopper): Extension<ShopperSession>,
) -> PageResult {
    let cart_count = shopper.cart(&state)?.total_quantity();
    Ok(Html(render::render_support_page(
        &state.config.store.name,
        cart_count,
    )))
}

/// `GET /cart`
pub async fn cart(
    State(state): State<AppState>,
    Extension(shopper): Extension<ShopperSession>,
) -> PageResult {
    let cart = shopper.cart(&state)?;
    let view = cart.view(&state.catalog)?;
    Ok(Html(render::render_cart_page(
        &view,
        &state.config.store.name,
    )))
}

/// Router fallback for unmatched paths.
pub async fn not_found(uri: Uri) -> PageError {
    PageError::RouteNotFound(uri.path().to_string())
}
