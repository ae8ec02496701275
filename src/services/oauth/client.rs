//! Token resolver interface used by the request authenticator.
use async_trait::async_trait;
use thiserror::Error;

use crate::error::RestError;
use crate::services::oauth::types::ResolvedIdentity;

pub const GET_ACCESS_TOKEN_INTERNAL_ERROR_MESSAGE: &str = "error when trying to get access token";

/// Outcome of a failed lookup.
///
/// Kept apart from `RestError` so the authenticator can decide per case
/// (not found is anonymous, everything else is surfaced).
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("access token not found")]
    NotFound,
    #[error("oauth service rejected lookup: {0}")]
    Rejected(RestError),
    #[error("error when trying to get access token")]
    Transport,
}

impl From<ResolveError> for RestError {
    fn from(e: ResolveError) -> Self {
        match e {
            // authenticate absorbs NotFound; other callers of a resolver may not
            ResolveError::NotFound => RestError::not_found("access token not found"),
            ResolveError::Rejected(err) => err,
            ResolveError::Transport => RestError::internal_server_error(
                GET_ACCESS_TOKEN_INTERNAL_ERROR_MESSAGE,
                "rest_client_error",
            ),
        }
    }
}

/// Resolves an access token id into the identity it stands for.
///
/// One lookup per call: no caching, no retries. Implementations are shared
/// across in-flight requests behind an `Arc`.
#[async_trait]
pub trait TokenResolver: Send + Sync + 'static {
    // Backend name (for logging).
    fn backend_name(&self) -> &'static str;

    // `token_id` is already trimmed and non-empty.
    async fn resolve(&self, token_id: &str) -> Result<ResolvedIdentity, ResolveError>;
}
