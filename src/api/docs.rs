//! `GET /v3/api-docs`: OpenAPI document for the gateway surface.
//!
//! Served behind the gate; reachable without a token only because the path is
//! in the default bypass list.
use axum::{Json, response::IntoResponse};
use serde_json::{Value, json};

use crate::error::AuthError;

pub async fn api_docs() -> impl IntoResponse {
    Json(openapi())
}

fn openapi() -> Value {
    let unauthorized = json!({
        "description": "Missing or invalid bearer token",
        "content": {
            "application/json": {
                "schema": { "$ref": "#/components/schemas/ErrorResponse" },
                "examples": {
                    "missing": { "value": AuthError::MissingCredential.to_error_response() },
                    "invalid": { "value": AuthError::InvalidCredential.to_error_response() }
                }
            }
        }
    });

    json!({
        "openapi": "3.0.3",
        "info": { "title": env!("CARGO_PKG_NAME"), "version": env!("CARGO_PKG_VERSION") },
        "paths": {
            "/api/v1/ping": {
                "get": {
                    "security": [{ "bearerAuth": [] }],
                    "responses": {
                        "200": { "description": "Token accepted" },
                        "401": unauthorized
                    }
                }
            },
            "/health": {
                "get": { "responses": { "200": { "description": "Liveness" } } }
            }
        },
        "components": {
            "securitySchemes": {
                "bearerAuth": { "type": "http", "scheme": "bearer", "bearerFormat": "JWT" }
            },
            "schemas": {
                "ErrorResponse": {
                    "type": "object",
                    "required": ["httpStatus", "code", "message"],
                    "properties": {
                        "httpStatus": { "type": "integer" },
                        "code": { "type": "string", "enum": ["NO_JWT_TOKEN", "TOKEN_NOT_VALID"] },
                        "message": { "type": "string" }
                    }
                }
            }
        }
    })
}
