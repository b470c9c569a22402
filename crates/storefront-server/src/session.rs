//! Cookie-backed visitor sessions.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use http::header::{COOKIE, SET_COOKIE};
use http::{HeaderMap, HeaderValue};
use storefront_cache::SessionId;
use storefront_commerce::Cart;
use tracing::{debug, warn};

use crate::config::StoreConfig;
use crate::error::PageError;
use crate::state::AppState;

/// The session a request belongs to.
///
/// Inserted into request extensions by [`resolve_session`]; handlers take it
/// with `Extension<ShopperSession>`.
#[derive(Debug, Clone)]
pub struct ShopperSession {
    pub id: SessionId,
    /// The session was created for this request.
    pub is_new: bool,
}

impl ShopperSession {
    /// Read this visitor's cart. A session that expired mid-request reads as
    /// an empty cart.
    pub fn cart(&self, state: &AppState) -> Result<Cart, storefront_cache::CacheError> {
        Ok(state.sessions.get(&self.id)?.unwrap_or_default())
    }
}

/// Middleware resolving the session cookie to a live session, creating one
/// when the cookie is missing, unknown or expired.
pub async fn resolve_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, PageError> {
    let cookie_name = state.config.session.cookie_name.as_str();
    let presented = cookie_value(request.headers(), cookie_name).map(SessionId::new);

    let session = match presented {
        Some(id) if state.sessions.exists(&id)? => ShopperSession { id, is_new: false },
        _ => {
            let (id, _) = state.sessions.create()?;
            debug!(session = %id, "started new session");
            ShopperSession { id, is_new: true }
        }
    };

    request.extensions_mut().insert(session.clone());
    let mut response = next.run(request).await;

    if session.is_new {
        let cookie = session_cookie(&state.config, &session.id);
        match HeaderValue::from_str(&cookie) {
            Ok(value) => {
                response.headers_mut().append(SET_COOKIE, value);
            }
            Err(e) => warn!(error = %e, "session cookie is not a valid header value"),
        }
    }

    Ok(response)
}

/// Find a cookie by name across all `Cookie` headers.
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Build the `Set-Cookie` value for a new session.
pub fn session_cookie(config: &StoreConfig, id: &SessionId) -> String {
    let mut cookie = format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        config.session.cookie_name, id, config.session.ttl_secs
    );
    if config.is_production() {
        cookie.push_str("; Secure");
    }
    cookie
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;

    #[test]
    fn test_cookie_value_parsing() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("theme=dark; storefront.sid=sess_abc; other=1"),
        );

        assert_eq!(
            cookie_value(&headers, "storefront.sid"),
            Some("sess_abc".to_string())
        );
        assert_eq!(cookie_value(&headers, "missing"), None);
    }

    #[test]
    fn test_cookie_value_across_headers() {
        let mut headers = HeaderMap::new();
        headers.append(COOKIE, HeaderValue::from_static("a=1"));
        headers.append(COOKIE, HeaderValue::from_static("storefront.sid=sess_xyz"));

        assert_eq!(
            cookie_value(&headers, "storefront.sid"),
            Some("sess_xyz".to_string())
        );
    }

    #[test]
    fn test_empty_cookie_value_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("storefront.sid="));
        assert_eq!(cookie_value(&headers, "storefront.sid"), None);
    }

    #[test]
    fn test_session_cookie_attributes() {
        let mut config = StoreConfig::default();
        let id = SessionId::new("sess_abc");

        let cookie = session_cookie(&config, &id);
        assert!(cookie.starts_with("storefront.sid=sess_abc;"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Max-Age=86400"));
        assert!(!cookie.contains("Secure"));

        config.server.environment = Environment::Production;
        assert!(session_cookie(&config, &id).ends_with("; Secure"));
    }
}
