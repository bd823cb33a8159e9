/*
 * Responsibility
 * - 環境変数の読み込み (PORT, バイパスパス, JWT 検証鍵など)
 * - 設定値のバリデーション (不足なら起動失敗)
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

use axum::http::Method;
use thiserror::Error;

use crate::gate::DEFAULT_BYPASS_PATHS;

const DEFAULT_CORS_METHODS: &str = "GET,POST,PUT,PATCH,DELETE,OPTIONS";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(value: Option<String>) -> Self {
        match value
            .unwrap_or_else(|| "development".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing configuration: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

/// Key material used to verify access tokens.
#[derive(Clone)]
pub enum JwtKey {
    /// HS256 shared secret.
    Secret(String),
    /// Ed25519 public key (PEM), EdDSA tokens.
    Ed25519PublicPem(String),
}

impl fmt::Debug for JwtKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Do not print key material
        match self {
            JwtKey::Secret(_) => f.write_str("Secret(..)"),
            JwtKey::Ed25519PublicPem(_) => f.write_str("Ed25519PublicPem(..)"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    pub cors_allowed_origins: Vec<String>,
    pub cors_allowed_methods: Vec<Method>,
    pub request_timeout_seconds: u64,

    // Path substrings exempt from the bearer check.
    pub auth_bypass_paths: Vec<String>,

    pub jwt_key: JwtKey,
    pub auth_issuer: Option<String>,
    pub auth_audience: Option<String>,
    pub access_token_leeway_seconds: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup (the process env in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port: u16 = match lookup("PORT") {
            Some(s) => s.trim().parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            None => 8000,
        };

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::parse(lookup("APP_ENV"));

        let cors_allowed_origins = split_list(&lookup("CORS_ALLOWED_ORIGINS").unwrap_or_default());

        let cors_allowed_methods = split_list(
            &lookup("CORS_ALLOWED_METHODS").unwrap_or_else(|| DEFAULT_CORS_METHODS.to_string()),
        )
        .iter()
        .map(|m| Method::from_bytes(m.to_ascii_uppercase().as_bytes()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| ConfigError::Invalid("CORS_ALLOWED_METHODS"))?;

        let request_timeout_seconds = lookup("REQUEST_TIMEOUT_SECONDS")
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(30);

        let auth_bypass_paths = match lookup("AUTH_BYPASS_PATHS") {
            Some(raw) => split_list(&raw),
            None => DEFAULT_BYPASS_PATHS.iter().map(|s| s.to_string()).collect(),
        };

        let jwt_key = match (lookup("JWT_SECRET"), lookup("ACCESS_JWT_PUBLIC_KEY_PEM")) {
            (Some(secret), _) if !secret.is_empty() => JwtKey::Secret(secret),
            (Some(_), None) => return Err(ConfigError::Invalid("JWT_SECRET")),
            (_, Some(pem)) if !pem.trim().is_empty() => {
                JwtKey::Ed25519PublicPem(pem.replace("\\n", "\n"))
            }
            (_, Some(_)) => return Err(ConfigError::Invalid("ACCESS_JWT_PUBLIC_KEY_PEM")),
            (None, None) => return Err(ConfigError::Missing("JWT_SECRET")),
        };

        let auth_issuer = lookup("AUTH_ISSUER").filter(|s| !s.trim().is_empty());
        let auth_audience = lookup("AUTH_AUDIENCE").filter(|s| !s.trim().is_empty());

        let access_token_leeway_seconds = lookup("ACCESS_TOKEN_LEEWAY_SECONDS")
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(60);

        Ok(Self {
            addr,
            app_env,
            cors_allowed_origins,
            cors_allowed_methods,
            request_timeout_seconds,
            auth_bypass_paths,
            jwt_key,
            auth_issuer,
            auth_audience,
            access_token_leeway_seconds,
        })
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
