use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use url::Url;

use crate::config::OAuthConfig;
use crate::error::RestError;
use crate::services::oauth::client::{ResolveError, TokenResolver};
use crate::services::oauth::types::{AccessToken, ResolvedIdentity};

/// oauth service client over HTTP.
///
/// Holds a single `reqwest::Client`, so every clone shares one connection
/// pool. The client timeout bounds the whole lookup; a slow answer is a
/// transport failure.
#[derive(Clone, Debug)]
pub struct HttpTokenResolver {
    base_url: Url,
    client: Client,
}

impl HttpTokenResolver {
    pub fn new(config: &OAuthConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self::with_client(config.base_url.clone(), client))
    }

    pub fn with_client(base_url: Url, client: Client) -> Self {
        Self { base_url, client }
    }

    // {base_url}/oauth/access_token/{token_id}, token id encoded as one segment
    fn lookup_url(&self, token_id: &str) -> Option<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .ok()?
            .pop_if_empty()
            .extend(["oauth", "access_token", token_id]);
        Some(url)
    }
}

#[async_trait]
impl TokenResolver for HttpTokenResolver {
    fn backend_name(&self) -> &'static str {
        "oauth-http"
    }

    async fn resolve(&self, token_id: &str) -> Result<ResolvedIdentity, ResolveError> {
        let url = self.lookup_url(token_id).ok_or_else(|| {
            tracing::warn!(base_url = %self.base_url, "oauth base url cannot carry a path");
            ResolveError::Transport
        })?;

        // reqwest errors carry the url, and the url carries the token
        let response = self.client.get(url).send().await.map_err(|err| {
            let (timeout, connect) = (err.is_timeout(), err.is_connect());
            tracing::warn!(
                error = %err.without_url(),
                timeout,
                connect,
                "oauth request failed"
            );
            ResolveError::Transport
        })?;

        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(ResolveError::NotFound);
        }

        if !status.is_success() {
            let mut rest_err = response.json::<RestError>().await.map_err(|err| {
                tracing::warn!(%status, error = %err.without_url(), "malformed oauth error body");
                ResolveError::Transport
            })?;
            if !rest_err.is_error_status() {
                rest_err.status = if status.is_client_error() || status.is_server_error() {
                    status.as_u16()
                } else {
                    StatusCode::INTERNAL_SERVER_ERROR.as_u16()
                };
            }
            return Err(ResolveError::Rejected(rest_err));
        }

        let at = response.json::<AccessToken>().await.map_err(|err| {
            tracing::warn!(
                %status,
                error = %err.without_url(),
                "malformed oauth access token body"
            );
            ResolveError::Transport
        })?;

        Ok(at.into())
    }
}
