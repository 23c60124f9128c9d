//! Extractors that turn malformed requests into structured [`ApiError`]s.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::error::ApiError;
use crate::models::FieldError;

/// Types that can be built from a decoded JSON request body.
///
/// Implementations report every offending field rather than stopping at
/// the first one.
pub trait FromJsonBody: Sized {
    fn from_json(body: &Value) -> Result<Self, Vec<FieldError>>;
}

/// Path parameters, rejected with a 422 naming the bad segment
#[derive(Debug)]
pub struct ValidPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ValidPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;
        Ok(ValidPath(value))
    }
}

/// Query string, rejected with a 422
#[derive(Debug)]
pub struct ValidQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ValidQuery<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(ValidQuery(value))
    }
}

/// JSON body validated through [`FromJsonBody`].
///
/// The content type is not checked; any body that parses as JSON is accepted.
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: FromJsonBody,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            warn!("Failed to read request body: {}", rejection.body_text());
            ApiError::new(rejection.status(), rejection.body_text())
        })?;
        decode_body(&bytes).map(ValidJson)
    }
}

fn decode_body<T: FromJsonBody>(bytes: &[u8]) -> Result<T, ApiError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        warn!("Request body is empty");
        return Err(ApiError::validation(vec![FieldError::missing(&["body"])]));
    }

    let value: Value = serde_json::from_slice(bytes).map_err(|e| {
        warn!("Request body is not valid JSON: {}", e);
        ApiError::validation(vec![FieldError::new(
            ["body"],
            format!("JSON decode error: {}", e),
            "json_invalid",
        )])
    })?;

    T::from_json(&value).map_err(|detail| {
        warn!("Request body failed validation: {} field(s)", detail.len());
        ApiError::validation(detail)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Item;
    use axum::{
        body::{to_bytes, Body},
        http::StatusCode,
        routing::get,
        Json, Router,
    };
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize)]
    struct Page {
        limit: u32,
    }

    #[tokio::test]
    async fn malformed_query_is_422_at_query() {
        let app = Router::new().route(
            "/pages",
            get(|ValidQuery(page): ValidQuery<Page>| async move { Json(page.limit) }),
        );

        let ok = app
            .clone()
            .oneshot(axum::http::Request::get("/pages?limit=3").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(ok.status(), StatusCode::OK);

        let response = app
            .oneshot(axum::http::Request::get("/pages?limit=many").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["code"], 422);
        assert_eq!(json["detail"][0]["loc"], serde_json::json!(["query"]));
        assert_eq!(json["detail"][0]["type"], "value_error");
    }

    #[tokio::test]
    async fn missing_path_params_keep_framework_status() {
        let app = Router::new().route(
            "/pages",
            get(|ValidPath(id): ValidPath<i64>| async move { Json(id) }),
        );
        let response = app
            .oneshot(axum::http::Request::get("/pages").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["code"], 500);
        assert!(json.get("detail").is_none());
    }

    #[test]
    fn empty_body_is_missing() {
        let err = decode_body::<Item>(b"  \n").unwrap_err();
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.detail, vec![FieldError::missing(&["body"])]);
    }

    #[test]
    fn broken_json_is_reported() {
        let err = decode_body::<Item>(b"{\"name\": ").unwrap_err();
        assert_eq!(err.detail.len(), 1);
        assert_eq!(err.detail[0].kind, "json_invalid");
    }

    #[test]
    fn valid_body_decodes() {
        let item = decode_body::<Item>(br#"{"name":"a","price":2}"#).unwrap();
        assert_eq!(item.price, 2.0);
    }
}
