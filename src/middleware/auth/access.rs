//! Bearer ゲートを Router に掛ける middleware
//!
//! - Allow: リクエストを一切変更せずに次へ渡す
//! - Deny: 401 + JSON ボディで即時終了 (upstream には一切届かない)

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    extract::{OriginalUri, State},
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::gate::{AuthGate, Decision};

/// Put `gate` in front of every route currently registered on `router`.
///
/// Routes added after this call are not gated, so apply it last:
/// ```ignore
/// let gated = Router::new().nest("/api/v1", api::v1::routes());
/// let gated = middleware::auth::access::apply(gated, gate);
/// let app = gated.route("/health", get(health));
/// ```
pub fn apply<S>(router: Router<S>, gate: Arc<AuthGate>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(middleware::from_fn_with_state(gate, access_middleware))
}

async fn access_middleware(
    State(gate): State<Arc<AuthGate>>,
    OriginalUri(original_uri): OriginalUri,
    req: Request<Body>,
    next: Next,
) -> Response {
    // Nested routers see a stripped uri; bypass rules apply to the path the client sent.
    match gate.evaluate(original_uri.path(), req.headers()).await {
        Decision::Allow => next.run(req).await,
        Decision::Deny(err) => {
            tracing::info!(
                path = original_uri.path(),
                code = err.code(),
                "request denied"
            );
            gate.deny_response(&err)
        }
    }
}
