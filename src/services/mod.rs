/*
 * Responsibility
 * - ゲートが呼び出す外部コラボレータ (トークン検証など)
 */
pub mod auth;
