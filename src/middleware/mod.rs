/*
 * Responsibility
 * - middleware の公開インターフェース
 * - auth (Bearer ゲート), cors, http (request-id / trace / timeout / body limit)
 */
pub mod auth;
pub mod cors;
pub mod http;
