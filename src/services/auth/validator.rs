//! Token validation seam used by the gate.
use async_trait::async_trait;

/// Decides whether a bearer token is currently acceptable.
///
/// The gate only needs a yes/no answer. Expired, malformed, badly signed
/// tokens and backend failures (including timeouts) all surface as `false`.
///
/// Implementations are shared across request tasks (`Arc<dyn TokenValidator>`).
#[async_trait]
pub trait TokenValidator: Send + Sync + 'static {
    async fn validate(&self, token: &str) -> bool;
}
