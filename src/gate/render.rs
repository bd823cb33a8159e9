//! Deny response rendering.
//!
//! Both error payloads are serialized once, when the gate is built, and each
//! denial clones the shared `Bytes`.
use axum::{
    body::{Body, Bytes},
    http::{HeaderValue, StatusCode, header},
    response::Response,
};
use serde::Serialize;

use crate::error::AuthError;

#[derive(Debug, Clone)]
pub struct DenyBodies {
    missing_credential: Bytes,
    invalid_credential: Bytes,
}

impl DenyBodies {
    pub fn new() -> Self {
        Self {
            missing_credential: encode(&AuthError::MissingCredential.to_error_response()),
            invalid_credential: encode(&AuthError::InvalidCredential.to_error_response()),
        }
    }

    pub fn body_for(&self, err: &AuthError) -> Bytes {
        match err {
            AuthError::MissingCredential => self.missing_credential.clone(),
            AuthError::InvalidCredential => self.invalid_credential.clone(),
        }
    }

    /// Status, `Content-Type: application/json` and the payload as the whole body.
    pub fn response(&self, err: &AuthError) -> Response {
        deny_response(err.status(), self.body_for(err))
    }
}

impl Default for DenyBodies {
    fn default() -> Self {
        Self::new()
    }
}

/// Compact JSON, or an empty body if serialization fails.
pub fn encode<T: Serialize>(payload: &T) -> Bytes {
    match serde_json::to_vec(payload) {
        Ok(bytes) => Bytes::from(bytes),
        Err(err) => {
            tracing::error!(error = %err, "failed to serialize error body; sending empty body");
            Bytes::new()
        }
    }
}

fn deny_response(status: StatusCode, body: Bytes) -> Response {
    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    response
}
