use async_trait::async_trait;
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use thiserror::Error;

use crate::services::auth::TokenValidator;

#[derive(Debug, Error)]
pub enum JwtValidatorError {
    #[error("invalid ed25519 public key pem: {0}")]
    InvalidKey(#[source] jsonwebtoken::errors::Error),
}

/// Access token (JWT) claims the gateway understands.
///
/// NOTE:
/// - `aud` can be either string or array; `Validation::set_audience` handles both.
/// - Everything beyond `exp` is optional; the gate only needs a yes/no answer.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessTokenClaims {
    pub exp: u64,

    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub iss: Option<String>,
    #[serde(default)]
    pub aud: serde_json::Value,
    #[serde(default)]
    pub nbf: Option<u64>,
    #[serde(default)]
    pub iat: Option<u64>,
    #[serde(default)]
    pub jti: Option<String>,
}

/// JWT access-token validator (HS256 shared secret or EdDSA public key).
///
/// - Key material is intentionally not printable via Debug.
#[derive(Clone)]
pub struct JwtValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for JwtValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print key material
        f.debug_struct("JwtValidator")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtValidator {
    pub fn hs256(
        secret: &[u8],
        issuer: Option<&str>,
        audience: Option<&str>,
        leeway_seconds: u64,
    ) -> Self {
        Self::with_key(
            DecodingKey::from_secret(secret),
            Algorithm::HS256,
            issuer,
            audience,
            leeway_seconds,
        )
    }

    pub fn ed25519(
        public_key_pem: &str,
        issuer: Option<&str>,
        audience: Option<&str>,
        leeway_seconds: u64,
    ) -> Result<Self, JwtValidatorError> {
        let decoding_key = DecodingKey::from_ed_pem(public_key_pem.as_bytes())
            .map_err(JwtValidatorError::InvalidKey)?;

        Ok(Self::with_key(
            decoding_key,
            Algorithm::EdDSA,
            issuer,
            audience,
            leeway_seconds,
        ))
    }

    fn with_key(
        decoding_key: DecodingKey,
        algorithm: Algorithm,
        issuer: Option<&str>,
        audience: Option<&str>,
        leeway_seconds: u64,
    ) -> Self {
        let mut validation = Validation::new(algorithm);
        validation.leeway = leeway_seconds;
        validation.validate_nbf = true;

        if let Some(issuer) = issuer {
            validation.set_issuer(&[issuer]);
        }
        match audience {
            Some(audience) => validation.set_audience(&[audience]),
            // Without a configured audience any `aud` claim is accepted.
            None => validation.validate_aud = false,
        }

        Self {
            decoding_key,
            validation,
        }
    }

    /// Verify signature, `exp`/`nbf` and the configured `iss`/`aud`, then decode claims.
    pub fn verify(&self, token: &str) -> Result<AccessTokenClaims, jsonwebtoken::errors::Error> {
        let data =
            jsonwebtoken::decode::<AccessTokenClaims>(token, &self.decoding_key, &self.validation)?;

        Ok(data.claims)
    }
}

#[async_trait]
impl TokenValidator for JwtValidator {
    async fn validate(&self, token: &str) -> bool {
        match self.verify(token) {
            Ok(claims) => {
                tracing::trace!(sub = ?claims.sub, jti = ?claims.jti, "access token accepted");
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "access token verification failed");
                false
            }
        }
    }
}
