//! HTTP routes.

pub mod cart;
pub mod extract;
pub mod pages;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Page and API routes, without middleware.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/search", get(pages::search))
        .route("/bestsellers", get(pages::best_sellers))
        .route("/fivestaritems", get(pages::five_star))
        .route("/earlyblackfriday", get(pages::early_deals))
        .route("/support", get(pages::support))
        .route("/cart", get(pages::cart))
        .route("/api/cart/add", post(cart::add))
        .route("/api/cart/update", post(cart::update))
        .route("/api/cart/remove", post(cart::remove))
        .route("/api/cart/clear", post(cart::clear))
}
