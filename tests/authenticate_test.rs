//! Tests for RequestAuthenticator::authenticate.
//!
//! The oauth service is mocked with wiremock; every case starts with spoofed
//! identity headers to check they never survive.

use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderValue, Request};
use oauth_gate::config::OAuthConfig;
use oauth_gate::middleware::oauth::{self, RequestAuthenticator};
use oauth_gate::services::oauth::{GET_ACCESS_TOKEN_INTERNAL_ERROR_MESSAGE, HttpTokenResolver};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn authenticator_for(base_url: &str) -> RequestAuthenticator {
    let config = OAuthConfig::new(base_url, Duration::from_millis(200)).unwrap();
    RequestAuthenticator::new(Arc::new(HttpTokenResolver::new(&config).unwrap()))
}

fn spoofed_request(uri: &str) -> Request<()> {
    let mut req = Request::builder().uri(uri).body(()).unwrap();
    let headers = req.headers_mut();
    headers.insert("x-caller-id", HeaderValue::from_static("1"));
    headers.insert("x-client-id", HeaderValue::from_static("2"));
    req
}

fn assert_anonymous(req: &Request<()>) {
    assert!(req.headers().get("x-caller-id").is_none());
    assert!(req.headers().get("x-client-id").is_none());
    assert_eq!(oauth::caller_id(req.headers()), 0);
    assert_eq!(oauth::client_id(req.headers()), 0);
}

#[tokio::test]
async fn without_query_param_request_is_anonymous() {
    let server = MockServer::start().await;
    // Any call to the oauth service would fail this test.
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let auth = authenticator_for(&server.uri());
    for uri in ["/", "/?other=1", "/?access_token=", "/?access_token=%20%20"] {
        let mut req = spoofed_request(uri);
        auth.authenticate(&mut req).await.unwrap();
        assert_anonymous(&req);
    }
}

#[tokio::test]
async fn not_found_token_is_anonymous() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/oauth/access_token/test"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "not found",
            "status": 404,
            "error": "not_found",
            "causes": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut req = spoofed_request("/?access_token=test");
    authenticator_for(&server.uri())
        .authenticate(&mut req)
        .await
        .unwrap();
    assert_anonymous(&req);
}

#[tokio::test]
async fn client_error_is_propagated() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/oauth/access_token/test"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "message": "bad request",
            "status": 400,
            "error": "bad_request"
        })))
        .mount(&server)
        .await;

    let mut req = spoofed_request("/?access_token=test");
    let err = authenticator_for(&server.uri())
        .authenticate(&mut req)
        .await
        .unwrap_err();
    assert_eq!(err.status, 400);
    assert_eq!(err.message, "bad request");
    assert_anonymous(&req);
}

#[tokio::test]
async fn resolved_identity_is_written_as_decimal_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/oauth/access_token/test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "test",
            "user_id": 234,
            "client_id": 345
        })))
        .mount(&server)
        .await;

    let mut req = spoofed_request("/?access_token=%20test%20");
    authenticator_for(&server.uri())
        .authenticate(&mut req)
        .await
        .unwrap();

    assert_eq!(req.headers().get("x-caller-id").unwrap(), "234");
    assert_eq!(req.headers().get("x-client-id").unwrap(), "345");
    assert_eq!(req.headers().get_all("x-caller-id").iter().count(), 1);
    assert_eq!(oauth::caller_id(req.headers()), 234);
    assert_eq!(oauth::client_id(req.headers()), 345);
}

#[tokio::test]
async fn transport_failure_returns_fixed_internal_error() {
    let mut req = spoofed_request("/?access_token=test");
    let err = authenticator_for("http://127.0.0.1:1")
        .authenticate(&mut req)
        .await
        .unwrap_err();

    assert_eq!(err.status, 500);
    assert_eq!(err.message, GET_ACCESS_TOKEN_INTERNAL_ERROR_MESSAGE);
    assert_eq!(err.causes, vec!["rest_client_error".to_string()]);
    assert_anonymous(&req);
}
