/*!
 * Authentication gate
 *
 * Responsibility:
 * - リクエストごとに Allow / Deny を一度だけ決める (状態は持たない)
 * - バイパスパス → Bearer 抽出 → TokenValidator の順で判定
 * - Deny 時のレスポンス生成 (render)
 *
 * HTTP への配線は middleware::auth::access 側の責務
 */
use std::sync::Arc;

use axum::{
    http::{HeaderMap, Request},
    response::Response,
};

use crate::error::AuthError;
use crate::services::auth::TokenValidator;

mod bearer;
mod bypass;
mod render;

pub use bearer::{BEARER_PREFIX, Credential, bearer_credential};
pub use bypass::BypassPaths;
pub use render::DenyBodies;

/// Documentation UI and API spec endpoints.
pub const DEFAULT_BYPASS_PATHS: &[&str] = &["/swagger-ui", "/v3/api-docs"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(AuthError),
}

impl Decision {
    pub fn is_allow(&self) -> bool {
        matches!(self, Decision::Allow)
    }
}

#[derive(Clone)]
pub struct AuthGate {
    bypass: BypassPaths,
    validator: Arc<dyn TokenValidator>,
    deny_bodies: DenyBodies,
}

impl std::fmt::Debug for AuthGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthGate")
            .field("bypass", &self.bypass)
            .finish_non_exhaustive()
    }
}

impl AuthGate {
    pub fn new(bypass: BypassPaths, validator: Arc<dyn TokenValidator>) -> Self {
        Self {
            bypass,
            validator,
            deny_bodies: DenyBodies::new(),
        }
    }

    /// Decide whether a request for `path` carrying `headers` may proceed.
    ///
    /// First matching rule wins:
    /// 1. bypass path → `Allow`, headers are not looked at
    /// 2. no `Bearer ` credential → `Deny(MissingCredential)`
    /// 3. token is not UTF-8, or the validator rejects it → `Deny(InvalidCredential)`
    /// 4. otherwise `Allow`
    pub async fn evaluate(&self, path: &str, headers: &HeaderMap) -> Decision {
        if self.bypass.matches(path) {
            tracing::debug!(path, "auth bypassed");
            return Decision::Allow;
        }

        let token = match bearer_credential(headers) {
            Credential::Bearer(token) => token,
            Credential::Missing => {
                tracing::debug!(path, "no bearer credential");
                return Decision::Deny(AuthError::MissingCredential);
            }
            Credential::Unreadable => {
                tracing::warn!(path, "bearer token is not valid UTF-8");
                return Decision::Deny(AuthError::InvalidCredential);
            }
        };

        if !self.validator.validate(token).await {
            tracing::warn!(path, "bearer token rejected");
            return Decision::Deny(AuthError::InvalidCredential);
        }

        Decision::Allow
    }

    pub async fn evaluate_request<B>(&self, req: &Request<B>) -> Decision {
        self.evaluate(req.uri().path(), req.headers()).await
    }

    /// The full 401 response for a denial.
    pub fn deny_response(&self, err: &AuthError) -> Response {
        self.deny_bodies.response(err)
    }
}
