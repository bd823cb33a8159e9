//! CORS for browser clients calling through the gateway.
//!
//! Mounted outside the auth gate:
//! - preflight (`OPTIONS` + `Access-Control-Request-Method`) is answered here and
//!   never reaches the gate, since browsers do not attach `Authorization` to it;
//! - 401 responses produced by the gate still get `Access-Control-Allow-Origin`,
//!   so browser code can read the `NO_JWT_TOKEN` / `TOKEN_NOT_VALID` body.
//!
//! Origins: any in development, exact-match `CORS_ALLOWED_ORIGINS` in production
//! (empty list allows none). No credentials mode; the token travels in a header.

use std::time::Duration;

use axum::Router;
use axum::http::{HeaderName, HeaderValue, header};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::Config;

const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");
const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(60 * 10);

pub fn apply(router: Router, config: &Config) -> Router {
    router.layer(layer(config))
}

fn layer(config: &Config) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allow_origin(config))
        .allow_methods(config.cors_allowed_methods.clone())
        // Headers a gateway client needs to send: the bearer credential and a correlation id.
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
            REQUEST_ID_HEADER,
        ])
        .expose_headers([REQUEST_ID_HEADER])
        .max_age(PREFLIGHT_MAX_AGE)
}

fn allow_origin(config: &Config) -> AllowOrigin {
    if !config.app_env.is_production() {
        return Any.into();
    }

    let allowed: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        // `*` would defeat the allowlist (and is refused by `AllowOrigin::list`).
        .filter(|s| s.as_str() != "*")
        .filter_map(|s| match HeaderValue::from_str(s) {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!(origin = %s, "ignoring unparsable CORS origin");
                None
            }
        })
        .collect();

    AllowOrigin::list(allowed)
}
