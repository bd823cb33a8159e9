/// Factory: build the token validator from application `Config`.
use std::sync::Arc;

use crate::config::{Config, JwtKey};
use crate::services::auth::{JwtValidator, JwtValidatorError, TokenValidator};

pub fn build_token_validator(
    config: &Config,
) -> Result<Arc<dyn TokenValidator>, JwtValidatorError> {
    let validator = match &config.jwt_key {
        JwtKey::Secret(secret) => JwtValidator::hs256(
            secret.as_bytes(),
            config.auth_issuer.as_deref(),
            config.auth_audience.as_deref(),
            config.access_token_leeway_seconds,
        ),
        JwtKey::Ed25519PublicPem(pem) => JwtValidator::ed25519(
            pem,
            config.auth_issuer.as_deref(),
            config.auth_audience.as_deref(),
            config.access_token_leeway_seconds,
        )?,
    };

    Ok(Arc::new(validator))
}
