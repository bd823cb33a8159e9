/*
 * Responsibility
 * - GET /api/v1/ping
 * - ゲートの内側にある upstream の代役 (有効なトークンでのみ到達)
 */
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

pub async fn ping() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"message": "pong"})))
}
