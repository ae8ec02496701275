use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::middleware::oauth;

use super::Caller;

/// Handler で Caller を受け取るための extractor
/// ヘッダが無い・壊れている場合は 0 (匿名) として扱うので失敗しない
pub struct CallerCtx(pub Caller);

impl<S> FromRequestParts<S> for CallerCtx
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(CallerCtx(Caller {
            caller_id: oauth::caller_id(&parts.headers),
            client_id: oauth::client_id(&parts.headers),
            public: oauth::is_public(&parts.headers),
        }))
    }
}
