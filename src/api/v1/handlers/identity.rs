/*
 * Responsibility
 * - GET /whoami: middleware が解決した identity をそのまま返す
 * - 認可判断の例: caller_id == 0 かつ public でなければ 401
 */
use axum::Json;
use serde::Serialize;

use crate::api::v1::extractors::CallerCtx;
use crate::error::AppError;

#[derive(Debug, Serialize)]
pub struct WhoAmIResponse {
    pub caller_id: i64,
    pub client_id: i64,
    pub public: bool,
}

pub async fn whoami(CallerCtx(ctx): CallerCtx) -> Result<Json<WhoAmIResponse>, AppError> {
    if !ctx.is_authenticated() && !ctx.public {
        return Err(AppError::Unauthorized);
    }

    Ok(Json(WhoAmIResponse {
        caller_id: ctx.caller_id,
        client_id: ctx.client_id,
        public: ctx.public,
    }))
}
