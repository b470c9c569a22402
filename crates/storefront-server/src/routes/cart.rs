//! Cart API handlers.
//!
//! Every endpoint mutates the caller's session cart and answers with the
//! updated item count. Failures carry the current count as well.

use axum::extract::State;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use storefront_commerce::{Cart, ProductId};
use tracing::debug;

use super::extract::{number_or_string, ApiJson};
use crate::error::{ApiError, CartFailure};
use crate::session::ShopperSession;
use crate::state::AppState;

/// Body of `POST /api/cart/add` and `POST /api/cart/remove`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    #[serde(deserialize_with = "number_or_string")]
    pub product_id: ProductId,
}

/// Body of `POST /api/cart/update`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequest {
    #[serde(deserialize_with = "number_or_string")]
    pub product_id: ProductId,
    #[serde(deserialize_with = "number_or_string")]
    pub quantity: i64,
}

/// Successful cart API response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub cart_count: i64,
}

impl CartResponse {
    fn ok(cart_count: i64) -> Self {
        Self {
            success: true,
            message: None,
            cart_count,
        }
    }

    fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

type ApiResult = Result<Json<CartResponse>, CartFailure>;

/// Run `f` against the shopper's cart and store the result. A session that
/// expired after the middleware saw it acts as an empty cart.
fn with_cart<R>(
    state: &AppState,
    shopper: &ShopperSession,
    f: impl FnOnce(&mut Cart) -> R,
) -> Result<R, ApiError> {
    Ok(state.sessions.update_or_default(&shopper.id, f)?)
}

/// Attach the caller's cart count to a failure.
fn respond(
    state: &AppState,
    shopper: &ShopperSession,
    outcome: Result<CartResponse, ApiError>,
) -> ApiResult {
    outcome.map(Json).map_err(|error| CartFailure {
        cart_count: shopper.cart(state).ok().map(|cart| cart.total_quantity()),
        error,
    })
}

/// `POST /api/cart/add`
pub async fn add(
    State(state): State<AppState>,
    Extension(shopper): Extension<ShopperSession>,
    body: Result<ApiJson<ProductRequest>, ApiError>,
) -> ApiResult {
    let outcome = body.and_then(|ApiJson(body)| add_product(&state, &shopper, body.product_id));
    respond(&state, &shopper, outcome)
}

fn add_product(
    state: &AppState,
    shopper: &ShopperSession,
    product_id: ProductId,
) -> Result<CartResponse, ApiError> {
    let catalog = &state.catalog;
    let cart_count = with_cart(state, shopper, |cart| cart.add(catalog, product_id))??;

    // add succeeded, so the product exists
    let name = catalog
        .by_id(product_id)
        .map(|p| p.name.as_str())
        .unwrap_or("Item");
    debug!(session = %shopper.id, product = %product_id, cart_count, "added to cart");

    Ok(CartResponse::ok(cart_count).with_message(format!("{} added to cart", name)))
}

/// `POST /api/cart/update`
pub async fn update(
    State(state): State<AppState>,
    Extension(shopper): Extension<ShopperSession>,
    body: Result<ApiJson<UpdateRequest>, ApiError>,
) -> ApiResult {
    let outcome = body.and_then(|ApiJson(body)| {
        let cart_count = with_cart(&state, &shopper, |cart| {
            cart.update(body.product_id, body.quantity)
        })?;
        debug!(
            session = %shopper.id,
            product = %body.product_id,
            quantity = body.quantity,
            cart_count,
            "updated cart quantity"
        );
        Ok(CartResponse::ok(cart_count))
    });
    respond(&state, &shopper, outcome)
}

/// `POST /api/cart/remove`
pub async fn remove(
    State(state): State<AppState>,
    Extension(shopper): Extension<ShopperSession>,
    body: Result<ApiJson<ProductRequest>, ApiError>,
) -> ApiResult {
    let outcome = body.and_then(|ApiJson(body)| {
        let cart_count = with_cart(&state, &shopper, |cart| cart.remove(body.product_id))?;
        debug!(session = %shopper.id, product = %body.product_id, cart_count, "removed from cart");
        Ok(CartResponse::ok(cart_count))
    });
    respond(&state, &shopper, outcome)
}

/// `POST /api/cart/clear`
pub async fn clear(
    State(state): State<AppState>,
    Extension(shopper): Extension<ShopperSession>,
) -> ApiResult {
    let outcome = with_cart(&state, &shopper, |cart| cart.clear()).map(|cart_count| {
        debug!(session = %shopper.id, "cleared cart");
        CartResponse::ok(cart_count)
    });
    respond(&state, &shopper, outcome)
}
