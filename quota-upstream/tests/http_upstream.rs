//! Integration tests for `HttpUpstream` against a local mock server.

use std::time::Duration;

use quota_core::Credential;
use quota_upstream::{HttpUpstream, Upstream, UpstreamError};
use serde_json::json;
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

fn credential(value: &str) -> Credential {
    Credential::new(value).expect("non-empty credential")
}

fn client() -> HttpUpstream {
    HttpUpstream::new(None).expect("client builds")
}

#[tokio::test]
async fn forwards_authorization_and_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/user/info"))
        .and(header("authorization", "Bearer sk-live"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"balance": 42})))
        .expect(1)
        .mount(&server)
        .await;

    let url = format!("{}/v1/user/info", server.uri());
    let reply = client()
        .fetch_json(&url, &credential("Bearer sk-live"))
        .await
        .expect("upstream reply");

    assert_eq!(reply.status, 200);
    assert_eq!(reply.body, json!({"balance": 42}));
}

#[tokio::test]
async fn non_success_status_is_not_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({"error": "invalid token"})))
        .mount(&server)
        .await;

    let reply = client()
        .fetch_json(&server.uri(), &credential("Bearer bad"))
        .await
        .expect("403 is still a reply");

    assert_eq!(reply.status, 403);
    assert_eq!(reply.body, json!({"error": "invalid token"}));
}

#[tokio::test]
async fn non_json_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
        .mount(&server)
        .await;

    let err = client()
        .fetch_json(&server.uri(), &credential("Bearer x"))
        .await
        .expect_err("html is not json");

    assert!(matches!(err, UpstreamError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn slow_upstream_hits_client_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let upstream = HttpUpstream::new(Some(Duration::from_millis(200))).expect("client builds");
    let err = upstream
        .fetch_json(&server.uri(), &credential("Bearer x"))
        .await
        .expect_err("must time out");

    assert!(matches!(err, UpstreamError::Timeout), "got {err:?}");
    assert_eq!(err.to_string(), "timeout");
}

#[tokio::test]
async fn unreachable_upstream_is_transport_error() {
    // Port 9 (discard) is closed on test hosts.
    let err = client()
        .fetch_json("http://127.0.0.1:9/v1/user/info", &credential("Bearer x"))
        .await
        .expect_err("connection refused");

    assert!(matches!(err, UpstreamError::Transport(_)), "got {err:?}");
    let text = err.to_string();
    assert!(!text.contains("/v1/user/info"), "cause must not leak the upstream url: {text}");
    assert!(text.contains(": "), "cause must include the underlying error: {text}");
}

#[tokio::test]
async fn non_utf8_credential_bytes_are_forwarded_unchanged() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"balance": 7})))
        .expect(1)
        .mount(&server)
        .await;

    let raw: &[u8] = b"Bearer \xe9t\xe9";
    let cred = Credential::from_header_bytes(raw).expect("non-empty credential");
    let reply = client().fetch_json(&server.uri(), &cred).await.expect("upstream reply");
    assert_eq!(reply.status, 200);

    let received = server.received_requests().await.expect("recording enabled");
    let forwarded = received[0]
        .headers
        .get("authorization")
        .map(|v| v.as_bytes().to_vec());
    assert_eq!(forwarded.as_deref(), Some(raw));
}
