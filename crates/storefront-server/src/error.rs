//! Error types for the storefront server.
//!
//! JSON endpoints fail with [`ApiError`], page routes with [`PageError`].
//! Both log on conversion to a response, so handlers just return them.

use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use http::StatusCode;
use serde::Serialize;
use storefront_cache::CacheError;
use storefront_commerce::{CommerceError, ProductId};
use thiserror::Error;
use tracing::{error, warn};

use crate::render;

/// Errors returned by the cart API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// No product with this id exists.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// The product cannot be added right now.
    #[error("Product is out of stock: {0}")]
    OutOfStock(ProductId),

    /// The request body was malformed or missing fields.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Anything the caller cannot fix.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::ProductNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::OutOfStock(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to the shopper.
    pub fn public_message(&self) -> String {
        match self {
            ApiError::ProductNotFound(_) => "Product not found".to_string(),
            ApiError::OutOfStock(_) => "Product is out of stock".to_string(),
            ApiError::BadRequest(reason) => format!("Invalid request: {}", reason),
            ApiError::Internal(_) => "Something went wrong, please try again".to_string(),
        }
    }
}

impl From<CommerceError> for ApiError {
    fn from(err: CommerceError) -> Self {
        match err {
            CommerceError::ProductNotFound(id) => ApiError::ProductNotFound(id),
            CommerceError::OutOfStock(id) => ApiError::OutOfStock(id),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<CacheError> for ApiError {
    fn from(err: CacheError) -> Self {
        ApiError::Internal(format!("session store: {}", err))
    }
}

/// Body of a failed API call.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiFailure {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    cart_count: Option<i64>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        CartFailure {
            error: self,
            cart_count: None,
        }
        .into_response()
    }
}

/// An [`ApiError`] reported together with the caller's current cart size,
/// so the client can resync its badge after a rejected mutation.
#[derive(Debug)]
pub struct CartFailure {
    pub error: ApiError,
    pub cart_count: Option<i64>,
}

impl IntoResponse for CartFailure {
    fn into_response(self) -> Response {
        let status = self.error.status();
        if status.is_server_error() {
            error!(error = %self.error, "cart API request failed");
        } else {
            warn!(error = %self.error, status = status.as_u16(), "cart API request rejected");
        }

        let body = ApiFailure {
            success: false,
            message: self.error.public_message(),
            cart_count: self.cart_count,
        };
        (status, Json(body)).into_response()
    }
}

/// Errors returned by page routes.
#[derive(Error, Debug)]
pub enum PageError {
    /// No route matched the path.
    #[error("Route not found: {0}")]
    RouteNotFound(String),

    /// A handler failed or panicked.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<CacheError> for PageError {
    fn from(err: CacheError) -> Self {
        PageError::Internal(format!("session store: {}", err))
    }
}

impl From<CommerceError> for PageError {
    fn from(err: CommerceError) -> Self {
        PageError::Internal(err.to_string())
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            PageError::RouteNotFound(path) => {
                warn!(%path, "no route matched");
                (
                    StatusCode::NOT_FOUND,
                    Html(render::render_error_page(
                        StatusCode::NOT_FOUND,
                        "The page you are looking for does not exist.",
                    )),
                )
                    .into_response()
            }
            PageError::Internal(details) => {
                error!(%details, "page request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(render::render_error_page(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Something went wrong on our end. Please try again later.",
                    )),
                )
                    .into_response()
            }
        }
    }
}

/// Errors that stop the server from starting.
#[derive(Error, Debug)]
pub enum StartupError {
    /// The catalog could not be loaded, so there is nothing to serve.
    #[error("Server not started, catalog unavailable at {path}: {source}")]
    NotStarted {
        path: String,
        #[source]
        source: CommerceError,
    },

    /// The listener could not be bound.
    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// The server loop failed.
    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}
