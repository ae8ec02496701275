//! Request authentication for inter-service calls.
//!
//! An inbound `access_token` query parameter is resolved against the oauth
//! service and the request is rewritten to carry trusted `X-Caller-Id` /
//! `X-Client-Id` headers. Handlers read them back through the predicates in
//! [`middleware::oauth`].
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;
