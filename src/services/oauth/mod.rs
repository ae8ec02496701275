pub mod client;
pub mod http;
pub mod types;

pub use client::{GET_ACCESS_TOKEN_INTERNAL_ERROR_MESSAGE, ResolveError, TokenResolver};
pub use self::http::HttpTokenResolver;
pub use types::{AccessToken, ResolvedIdentity};
