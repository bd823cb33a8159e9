/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 * - Clone 前提で持つ (内部は Arc で clone cheap)
 */
use std::sync::Arc;

use crate::gate::AuthGate;

#[derive(Clone, Debug)]
pub struct AppState {
    pub gate: Arc<AuthGate>,
}

impl AppState {
    pub fn new(gate: Arc<AuthGate>) -> Self {
        Self { gate }
    }
}
