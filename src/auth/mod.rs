//! PSK-based authentication for the admin API.
//!
//! Implements constant-time comparison to mitigate timing attacks.

use axum::{
    extract::Request,
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use subtle::ConstantTimeEq;

use crate::errors::{codes, ErrorResponse};

/// Header name for the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// PSK authentication layer function that takes the expected PSK as a parameter.
pub async fn psk_auth_layer(
    expected_psk: Option<String>,
    request: Request,
    next: Next,
) -> Response {
    // If no PSK is configured, allow all requests (dev mode)
    let Some(expected) = expected_psk else {
        return next.run(request).await;
    };

    let provided = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .or_else(|| {
            request
                .headers()
                .get(header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.strip_prefix("Bearer "))
        })
        .map(str::to_string);

    match provided {
        Some(key) if constant_time_compare(&key, &expected) => next.run(request).await,
        Some(_) => unauthorized_response("Invalid API key"),
        None => unauthorized_response("Missing or invalid API key"),
    }
}

/// Perform constant-time string comparison.
fn constant_time_compare(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// Create an unauthorized response.
fn unauthorized_response(message: &str) -> Response {
    let body = ErrorResponse::new(codes::UNAUTHORIZED, message);
    (StatusCode::UNAUTHORIZED, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, middleware, routing::get, Router};
    use tower::ServiceExt;

    fn protected(psk: Option<&str>) -> Router {
        let psk = psk.map(str::to_string);
        Router::new()
            .route("/secret", get(|| async { "ok" }))
            .layer(middleware::from_fn(move |req, next| {
                psk_auth_layer(psk.clone(), req, next)
            }))
    }

    async fn status_for(psk: Option<&str>, header: Option<(&str, &str)>) -> StatusCode {
        let mut builder = axum::http::Request::builder().uri("/secret");
        if let Some((name, value)) = header {
            builder = builder.header(name, value);
        }
        let request = builder.body(Body::empty()).unwrap();
        protected(psk).oneshot(request).await.unwrap().status()
    }

    #[test]
    fn test_constant_time_compare_equal() {
        assert!(constant_time_compare("test-key-123", "test-key-123"));
    }

    #[test]
    fn test_constant_time_compare_not_equal() {
        assert!(!constant_time_compare("test-key-123", "test-key-124"));
    }

    #[test]
    fn test_constant_time_compare_different_lengths() {
        assert!(!constant_time_compare("short", "much-longer-key"));
    }

    #[tokio::test]
    async fn test_layer_without_psk_allows_all() {
        assert_eq!(status_for(None, None).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_layer_accepts_header_and_bearer() {
        assert_eq!(
            status_for(Some("k"), Some((API_KEY_HEADER, "k"))).await,
            StatusCode::OK
        );
        assert_eq!(
            status_for(Some("k"), Some(("authorization", "Bearer k"))).await,
            StatusCode::OK
        );
    }

    #[tokio::test]
    async fn test_layer_rejects_missing_or_wrong_key() {
        assert_eq!(status_for(Some("k"), None).await, StatusCode::UNAUTHORIZED);
        assert_eq!(
            status_for(Some("k"), Some((API_KEY_HEADER, "nope"))).await,
            StatusCode::UNAUTHORIZED
        );
    }
}
