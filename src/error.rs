/*
 * Responsibility
 * - 認証ゲートの拒否理由 (AuthError) と JSON エラーボディ (ErrorResponse)
 * - 起動時の AppError 定義 (app::run() が返す)
 */
use axum::http::StatusCode;
use serde::Serialize;
use thiserror::Error;

use crate::config::ConfigError;
use crate::services::auth::JwtValidatorError;

/// Wire shape of every error body this gateway writes.
///
/// Field names are a contract with API consumers.
#[derive(Debug, Serialize)]
pub struct ErrorResponse<'a> {
    #[serde(rename = "httpStatus")]
    pub http_status: u16,
    pub code: &'a str,
    pub message: &'a str,
}

/// Why the gate refused a request. Both kinds end the request with 401.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No `Authorization` header, or not a `Bearer ` credential.
    #[error("JWT token does not exist.")]
    MissingCredential,
    /// A bearer token was presented but the validator rejected it.
    #[error("JWT token is not valid.")]
    InvalidCredential,
}

impl AuthError {
    pub fn status(&self) -> StatusCode {
        StatusCode::UNAUTHORIZED
    }

    pub fn code(&self) -> &'static str {
        match self {
            AuthError::MissingCredential => "NO_JWT_TOKEN",
            AuthError::InvalidCredential => "TOKEN_NOT_VALID",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            AuthError::MissingCredential => "JWT token does not exist.",
            AuthError::InvalidCredential => "JWT token is not valid.",
        }
    }

    pub fn to_error_response(&self) -> ErrorResponse<'static> {
        ErrorResponse {
            http_status: self.status().as_u16(),
            code: self.code(),
            message: self.message(),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validator(#[from] JwtValidatorError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
