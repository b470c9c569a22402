//! Shared fixtures for HTTP-level tests.

#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use storefront_commerce::Catalog;
use storefront_server::{build_router, wrap_routes, AppState, StoreConfig};
use tempfile::TempDir;
use tower::ServiceExt;

pub const CATALOG_JSON: &str = r#"{
    "items": [
        { "id": 1, "name": "Wireless Earbuds", "price": 49.99, "inStock": true, "isBestSeller": true, "rating": 5, "blackFridayDeal": true },
        { "id": 2, "name": "USB-C Hub", "price": 29.99, "inStock": true, "isBestSeller": false, "rating": 4, "blackFridayDeal": true },
        { "id": 3, "name": "Mechanical Keyboard", "price": 89.99, "inStock": true, "isBestSeller": true, "rating": 5, "blackFridayDeal": true },
        { "id": 4, "name": "Laptop Sleeve", "description": "Fits 13-inch notebooks", "price": 24.99, "inStock": true, "isBestSeller": false, "rating": 3, "blackFridayDeal": false },
        { "id": 7, "name": "Phone Charger", "description": "Fast charging cable included", "price": 19.99, "inStock": true, "isBestSeller": false, "rating": 4, "blackFridayDeal": false },
        { "id": 8, "name": "Webcam", "price": 39.99, "inStock": false, "isBestSeller": false, "rating": 5, "blackFridayDeal": true }
    ]
}"#;

/// A router over the fixture catalog with a temporary public directory.
pub struct TestApp {
    pub router: Router,
    pub config: StoreConfig,
    _public: TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        Self::build(StoreConfig::default(), None)
    }

    /// The storefront with `config` tweaked before startup.
    pub fn with_config(tweak: impl FnOnce(&mut StoreConfig)) -> Self {
        let mut config = StoreConfig::default();
        tweak(&mut config);
        Self::build(config, None)
    }

    /// Extra routes served behind the storefront's middleware stack.
    pub fn with_routes(routes: Router<AppState>) -> Self {
        Self::build(StoreConfig::default(), Some(routes))
    }

    fn build(mut config: StoreConfig, routes: Option<Router<AppState>>) -> Self {
        let public = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(public.path().join("css")).unwrap();
        std::fs::write(public.path().join("css/style.css"), "body { margin: 0; }").unwrap();
        config.server.public_dir = public.path().to_path_buf();

        let catalog = Catalog::from_json(CATALOG_JSON).unwrap();
        let state = AppState::new(catalog, config.clone());
        let router = match routes {
            Some(routes) => wrap_routes(routes, state),
            None => build_router(state),
        };

        Self {
            router,
            config,
            _public: public,
        }
    }

    pub async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        TestResponse {
            status,
            headers,
            body: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }

    pub async fn get(&self, path: &str, cookie: Option<&str>) -> TestResponse {
        let mut builder = Request::builder().method("GET").uri(path);
        if let Some(cookie) = cookie {
            builder = builder.header(COOKIE, cookie);
        }
        self.request(builder.body(Body::empty()).unwrap()).await
    }

    pub async fn post_json(&self, path: &str, body: &str, cookie: Option<&str>) -> TestResponse {
        let mut builder = Request::builder()
            .method("POST")
            .uri(path)
            .header(CONTENT_TYPE, "application/json");
        if let Some(cookie) = cookie {
            builder = builder.header(COOKIE, cookie);
        }
        self.request(builder.body(Body::from(body.to_string())).unwrap())
            .await
    }

    /// Start a session and return its `name=value` cookie pair.
    pub async fn new_session(&self) -> String {
        self.get("/support", None)
            .await
            .session_cookie()
            .expect("new visitor gets a session cookie")
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }

    /// The `name=value` part of the `Set-Cookie` header, if any.
    pub fn session_cookie(&self) -> Option<String> {
        self.headers
            .get(SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .map(|pair| pair.trim().to_string())
    }

    pub fn set_cookie_header(&self) -> Option<String> {
        self.headers
            .get(SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    }

    pub fn lists_product(&self, id: u64) -> bool {
        self.body
            .contains(&format!(r#"<article class="product-card" data-product-id="{}">"#, id))
    }
}
