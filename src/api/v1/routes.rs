/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - oauth middleware を掛ける範囲をここで決める (/health は対象外)
 */
use axum::{Router, routing::get};

use crate::api::v1::handlers::{health::health, identity::whoami};
use crate::middleware;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let authenticated = Router::new().route("/whoami", get(whoami));
    let authenticated = middleware::oauth::apply(authenticated, state);

    Router::new()
        .route("/health", get(health))
        .merge(authenticated)
}
