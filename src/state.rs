/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 * - Clone 前提で持つ (内部は Arc で cheap)
 */
use std::sync::Arc;

use crate::middleware::oauth::RequestAuthenticator;
use crate::services::oauth::TokenResolver;

#[derive(Clone)]
pub struct AppState {
    pub authenticator: RequestAuthenticator,
}

impl AppState {
    pub fn new(resolver: Arc<dyn TokenResolver>) -> Self {
        Self {
            authenticator: RequestAuthenticator::new(resolver),
        }
    }
}
