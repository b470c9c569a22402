//! Request body extraction for the cart API.

use std::fmt;
use std::str::FromStr;

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::{Deserialize, Deserializer};

use crate::error::ApiError;

/// JSON body extractor that fails with [`ApiError::BadRequest`].
///
/// Axum's own `Json` rejects with a plain-text body; the cart API always
/// answers with `{success, message}`.
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(ApiError::BadRequest(rejection.body_text())),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText<T> {
    Number(T),
    Text(String),
}

/// Deserialize a value given either natively or as a numeric string.
///
/// The storefront script posts values read from `data-*` attributes, which
/// are strings.
pub fn number_or_string<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: fmt::Display,
{
    match NumberOrText::<T>::deserialize(deserializer)? {
        NumberOrText::Number(value) => Ok(value),
        NumberOrText::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_commerce::ProductId;

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Body {
        #[serde(deserialize_with = "number_or_string")]
        product_id: ProductId,
        #[serde(deserialize_with = "number_or_string")]
        quantity: i64,
    }

    #[test]
    fn test_accepts_numbers() {
        let body: Body = serde_json::from_str(r#"{"productId": 7, "quantity": -1}"#).unwrap();
        assert_eq!(body.product_id, ProductId::new(7));
        assert_eq!(body.quantity, -1);
    }

    #[test]
    fn test_accepts_numeric_strings() {
        let body: Body = serde_json::from_str(r#"{"productId": "7", "quantity": " 3 "}"#).unwrap();
        assert_eq!(body.product_id, ProductId::new(7));
        assert_eq!(body.quantity, 3);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(serde_json::from_str::<Body>(r#"{"productId": "abc", "quantity": 1}"#).is_err());
        assert!(serde_json::from_str::<Body>(r#"{"productId": -4, "quantity": 1}"#).is_err());
        assert!(serde_json::from_str::<Body>(r#"{"productId": true, "quantity": 1}"#).is_err());
        assert!(serde_json::from_str::<Body>(r#"{"quantity": 1}"#).is_err());
    }
}
