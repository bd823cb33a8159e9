/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - ゲートの適用は app::build_router 側で行う (ここでは掛けない)
 */
use axum::{Router, routing::get};

use crate::api::v1::handlers::ping::ping;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/ping", get(ping))
}
