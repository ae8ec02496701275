//! access_token クエリ → oauth サービスで解決 → X-Caller-Id / X-Client-Id を付与
//!
//! Trust rules:
//! - `X-Caller-Id` / `X-Client-Id` are stripped on entry, whatever happens next.
//!   Only a successful lookup writes them back.
//! - Unknown tokens (404) are anonymous, not an error.
//! - Any other failure is returned to the client as-is and no header is written.
//! - `X-Public` is advisory: read by handlers, never enforced here.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{HeaderMap, HeaderName, HeaderValue, Request, Uri},
    middleware::{self, Next},
    response::Response,
};

use crate::error::{AppError, RestError};
use crate::services::oauth::{ResolveError, TokenResolver};
use crate::state::AppState;

pub const HEADER_X_PUBLIC: &str = "X-Public";
pub const HEADER_X_CLIENT_ID: &str = "X-Client-Id";
pub const HEADER_X_CALLER_ID: &str = "X-Caller-Id";

pub const PARAM_ACCESS_TOKEN: &str = "access_token";

const X_PUBLIC: HeaderName = HeaderName::from_static("x-public");
const X_CLIENT_ID: HeaderName = HeaderName::from_static("x-client-id");
const X_CALLER_ID: HeaderName = HeaderName::from_static("x-caller-id");

/// True when the route was flagged public with exactly `X-Public: true`.
pub fn is_public(headers: &HeaderMap) -> bool {
    headers
        .get(X_PUBLIC)
        .is_some_and(|v| v.as_bytes() == b"true")
}

/// Resolved caller id, or 0 (unauthenticated) when absent or malformed.
pub fn caller_id(headers: &HeaderMap) -> i64 {
    read_id(headers, &X_CALLER_ID)
}

/// Resolved client id, or 0 (unauthenticated) when absent or malformed.
pub fn client_id(headers: &HeaderMap) -> i64 {
    read_id(headers, &X_CLIENT_ID)
}

fn read_id(headers: &HeaderMap, name: &HeaderName) -> i64 {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse::<i64>().ok())
        .unwrap_or(0)
}

/// Drop every identity header the caller may have sent.
pub fn sanitize(headers: &mut HeaderMap) {
    headers.remove(X_CLIENT_ID);
    headers.remove(X_CALLER_ID);
}

/// First `access_token` query value, trimmed. `None` when missing or blank.
pub fn access_token_id(uri: &Uri) -> Option<String> {
    let query = uri.query()?;
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == PARAM_ACCESS_TOKEN)
        .map(|(_, v)| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Authenticates inbound requests against the oauth service.
#[derive(Clone)]
pub struct RequestAuthenticator {
    resolver: Arc<dyn TokenResolver>,
}

impl RequestAuthenticator {
    pub fn new(resolver: Arc<dyn TokenResolver>) -> Self {
        Self { resolver }
    }

    /// Strip identity headers, resolve `access_token` and write the
    /// resolved identity back onto the request.
    ///
    /// Returns `Ok(())` for anonymous requests (no token, unknown token).
    /// Headers are only written on success.
    pub async fn authenticate<B>(&self, req: &mut Request<B>) -> Result<(), RestError> {
        sanitize(req.headers_mut());

        let Some(token_id) = access_token_id(req.uri()) else {
            tracing::debug!("no access token, anonymous request");
            return Ok(());
        };

        let identity = match self.resolver.resolve(&token_id).await {
            Ok(identity) => identity,
            Err(ResolveError::NotFound) => {
                tracing::debug!(
                    backend = self.resolver.backend_name(),
                    "access token not found, anonymous request"
                );
                return Ok(());
            }
            Err(err) => {
                tracing::warn!(
                    backend = self.resolver.backend_name(),
                    error = %err,
                    "access token lookup failed"
                );
                return Err(err.into());
            }
        };

        let headers = req.headers_mut();
        headers.insert(X_CLIENT_ID, HeaderValue::from(identity.client_id));
        headers.insert(X_CALLER_ID, HeaderValue::from(identity.caller_id));

        tracing::debug!(
            caller_id = identity.caller_id,
            client_id = identity.client_id,
            "access token resolved"
        );

        Ok(())
    }
}

/// Apply oauth authentication to every route of `router`.
///
/// ```ignore
/// let v1 = api::v1::routes();
/// let v1 = middleware::oauth::apply(v1, state.clone());
/// app = app.nest("/api/v1", v1);
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    router.layer(middleware::from_fn_with_state(state, oauth_middleware))
}

async fn oauth_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    state.authenticator.authenticate(&mut req).await?;
    Ok(next.run(req).await)
}
