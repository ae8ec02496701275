use serde::{Deserialize, Serialize};

/// Access token record as returned by `GET /oauth/access_token/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    pub id: String,
    pub user_id: i64,
    pub client_id: i64,
}

/// Identity behind an access token.
///
/// Only ever built from a successful lookup against the oauth service,
/// never from anything the inbound request carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIdentity {
    pub token_id: String,
    pub caller_id: i64,
    pub client_id: i64,
}

impl From<AccessToken> for ResolvedIdentity {
    fn from(at: AccessToken) -> Self {
        Self {
            token_id: at.id,
            caller_id: at.user_id,
            client_id: at.client_id,
        }
    }
}
