//! Server-rendered storefront with per-visitor carts.
//!
//! Serves the product catalog as HTML listing pages (all items, bestsellers,
//! five-star items, early Black Friday deals, search) and a JSON cart API.
//! Each visitor gets a cookie-identified session holding their cart.
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_server::{run, StoreConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     run(StoreConfig::default()).await.unwrap();
//! }
//! ```

pub mod config;
pub mod error;
pub mod render;
pub mod routes;
pub mod session;
pub mod state;
pub mod telemetry;
pub mod views;

use std::any::Any;

use axum::body::Body;
use axum::middleware;
use axum::response::IntoResponse;
use axum::Router;
use http::Response;
use storefront_commerce::Catalog;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

pub use config::StoreConfig;
pub use error::{ApiError, PageError, StartupError};
pub use state::AppState;

/// Build the full application router with middleware and static assets.
pub fn build_router(state: AppState) -> Router {
    wrap_routes(routes::routes(), state)
}

/// Wrap page and API routes with sessions, then add static assets, the
/// 404 fallback, panic recovery and request tracing.
///
/// Sessions only cover matched routes, so asset requests and 404s never
/// create one.
pub fn wrap_routes(app: Router<AppState>, state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.server.public_dir);

    app.route_layer(middleware::from_fn_with_state(
        state.clone(),
        session::resolve_session,
    ))
    .nest_service("/static", static_files)
    .fallback(routes::pages::not_found)
    .layer(CatchPanicLayer::custom(handle_panic))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

/// Turn a handler panic into the 500 page.
fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let details = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    PageError::Internal(format!("handler panicked: {}", details)).into_response()
}

/// Load the catalog named by `config`.
///
/// An empty catalog is allowed but logged.
pub fn load_catalog(config: &StoreConfig) -> Result<Catalog, StartupError> {
    let path = &config.store.catalog;
    let catalog = Catalog::load(path).map_err(|source| StartupError::NotStarted {
        path: path.display().to_string(),
        source,
    })?;

    if catalog.is_empty() {
        warn!(path = %path.display(), "catalog has no products");
    }
    info!(products = catalog.len(), path = %path.display(), "catalog loaded");
    Ok(catalog)
}

/// Load the catalog, bind the listener and serve until shutdown.
pub async fn run(config: StoreConfig) -> Result<(), StartupError> {
    let catalog = load_catalog(&config)?;

    let address = config.bind_address();
    let environment = config.server.environment;
    let state = AppState::new(catalog, config);
    let app = build_router(state);

    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| StartupError::Bind {
            address: address.clone(),
            source,
        })?;
    info!(%address, ?environment, "storefront listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("storefront stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!(error = %e, "failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!(error = %e, "failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
