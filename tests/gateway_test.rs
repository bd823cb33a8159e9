//! Router-level tests for the assembled gateway: health, docs bypass, and the
//! 401 contract in front of `/api/v1`.

use std::collections::HashMap;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::Serialize;
use tower::ServiceExt;

use bearer_gateway::app::{build_router, build_state};
use bearer_gateway::config::Config;

const SECRET: &str = "gateway-integration-secret-0123456789";

#[derive(Serialize)]
struct Claims {
    sub: String,
    exp: i64,
}

/// Helper: build the app with an HS256 secret and the default bypass list.
fn test_app() -> axum::Router {
    test_app_with(&[])
}

/// Helper: same as `test_app`, with extra environment entries.
fn test_app_with(extra: &[(&str, &str)]) -> axum::Router {
    let mut vars: HashMap<&str, &str> = HashMap::from([("JWT_SECRET", SECRET)]);
    vars.extend(extra.iter().copied());
    let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string())).unwrap();
    let state = build_state(&config).unwrap();
    build_router(state, &config)
}

fn token(secret: &str, exp_offset_secs: i64) -> String {
    let claims = Claims {
        sub: "member-1".to_string(),
        exp: chrono::Utc::now().timestamp() + exp_offset_secs,
    };
    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

fn get(uri: &str, authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(Body::empty()).unwrap()
}

/// Helper: read response body as string.
async fn body_string(response: axum::http::Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// -- Ungated ------------------------------------------------------------------

#[tokio::test]
async fn health_needs_no_token() {
    let response = test_app().oneshot(get("/health", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, r#"{"status":"ok"}"#);
}

#[tokio::test]
async fn api_docs_path_is_bypassed() {
    let response = test_app()
        .oneshot(get("/v3/api-docs", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let doc: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(doc["openapi"], "3.0.3");
    assert_eq!(
        doc["components"]["schemas"]["ErrorResponse"]["required"][0],
        "httpStatus"
    );
}

#[tokio::test]
async fn bypass_ignores_a_bad_token() {
    let response = test_app()
        .oneshot(get("/v3/api-docs", Some("Bearer garbage")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

// -- Gated --------------------------------------------------------------------

#[tokio::test]
async fn missing_token_is_401_no_jwt_token() {
    let response = test_app()
        .oneshot(get("/api/v1/ping", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    assert_eq!(
        body_string(response).await,
        r#"{"httpStatus":401,"code":"NO_JWT_TOKEN","message":"JWT token does not exist."}"#
    );
}

#[tokio::test]
async fn basic_scheme_is_401_no_jwt_token() {
    let response = test_app()
        .oneshot(get("/api/v1/ping", Some("Basic abcd")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(body_string(response).await.contains(r#""code":"NO_JWT_TOKEN""#));
}

#[tokio::test]
async fn expired_token_is_401_token_not_valid() {
    let bearer = format!("Bearer {}", token(SECRET, -3600));
    let response = test_app()
        .oneshot(get("/api/v1/ping", Some(&bearer)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_string(response).await,
        r#"{"httpStatus":401,"code":"TOKEN_NOT_VALID","message":"JWT token is not valid."}"#
    );
}

#[tokio::test]
async fn token_from_another_issuer_key_is_rejected() {
    let bearer = format!("Bearer {}", token("not-the-gateway-secret-abcdefghijkl", 600));
    let response = test_app()
        .oneshot(get("/api/v1/ping", Some(&bearer)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn valid_token_reaches_upstream() {
    let bearer = format!("Bearer {}", token(SECRET, 600));
    let response = test_app()
        .oneshot(get("/api/v1/ping", Some(&bearer)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, r#"{"message":"pong"}"#);
}

#[tokio::test]
async fn denied_responses_carry_a_request_id() {
    let response = test_app()
        .oneshot(get("/api/v1/ping", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn non_utf8_bearer_token_is_401_token_not_valid() {
    let mut request = get("/api/v1/ping", None);
    request.headers_mut().insert(
        header::AUTHORIZATION,
        header::HeaderValue::from_bytes(b"Bearer \xfftoken").unwrap(),
    );

    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(body_string(response).await.contains(r#""code":"TOKEN_NOT_VALID""#));
}

// -- CORS ---------------------------------------------------------------------

#[tokio::test]
async fn preflight_to_gated_path_needs_no_token() {
    let app = test_app_with(&[
        ("APP_ENV", "production"),
        ("CORS_ALLOWED_ORIGINS", "https://app.example.com"),
    ]);
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/v1/ping")
        .header(header::ORIGIN, "https://app.example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "authorization")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "https://app.example.com"
    );
}

#[tokio::test]
async fn denied_response_is_readable_by_allowlisted_origin() {
    let app = test_app_with(&[
        ("APP_ENV", "production"),
        ("CORS_ALLOWED_ORIGINS", "https://app.example.com"),
    ]);
    let mut request = get("/api/v1/ping", None);
    request
        .headers_mut()
        .insert(header::ORIGIN, header::HeaderValue::from_static("https://app.example.com"));

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "https://app.example.com"
    );
}
