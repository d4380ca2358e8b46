//! End-to-end tests: router + real HTTP client + mock upstream server.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use quota_gateway::{
    routes::{create_router, AppState},
    settings::{GatewaySettings, BALANCE_URL_VAR, SILICONFLOW_URL_VAR},
};
use serde_json::json;
use tower::ServiceExt;
use wiremock::{
    matchers::{header as match_header, method, path},
    Mock, MockServer, ResponseTemplate,
};

fn app_against(server: &MockServer) -> Router {
    let siliconflow = format!("{}/v1/user/info", server.uri());
    let balance = format!("{}/api/v1/user/remain/points", server.uri());
    let settings = GatewaySettings::from_lookup(|name| match name {
        SILICONFLOW_URL_VAR => Some(siliconflow.clone()),
        BALANCE_URL_VAR => Some(balance.clone()),
        _ => None,
    })
    .expect("valid settings");
    create_router(AppState::from_settings(&settings).expect("client builds"))
}

async fn get(app: Router, uri: &str, authorization: Option<&str>) -> (StatusCode, Option<String>, String) {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    let resp = app
        .oneshot(builder.body(Body::empty()).expect("request builds"))
        .await
        .expect("router is infallible");
    let status = resp.status();
    let origin = resp
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let bytes = axum::body::to_bytes(resp.into_body(), 64 * 1024).await.expect("body");
    (status, origin, String::from_utf8(bytes.to_vec()).expect("utf-8 body"))
}

#[tokio::test]
async fn balance_is_relayed_with_forwarded_credential() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/user/remain/points"))
        .and(match_header("authorization", "Bearer sk-points"))
        .and(match_header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"balance": 42})))
        .expect(1)
        .mount(&server)
        .await;

    let (status, origin, body) = get(app_against(&server), "/api/balance", Some("Bearer sk-points")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(origin.as_deref(), Some("*"));
    assert_eq!(body, r#"{"balance":42}"#);
}

#[tokio::test]
async fn upstream_key_order_is_preserved() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/user/info"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"{"status":true,"data":{"totalBalance":"9.5","name":"x"},"code":20000}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let (status, _, body) = get(app_against(&server), "/api/siliconflow", Some("Bearer sk")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"status":true,"data":{"totalBalance":"9.5","name":"x"},"code":20000}"#);
}

#[tokio::test]
async fn upstream_401_passes_through() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"code": 401, "message": "Invalid token"})))
        .mount(&server)
        .await;

    let (status, origin, body) = get(app_against(&server), "/api/siliconflow", Some("Bearer expired")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(origin.as_deref(), Some("*"));
    assert_eq!(body, r#"{"code":401,"message":"Invalid token"}"#);
}

#[tokio::test]
async fn non_json_upstream_becomes_500() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let (status, _, body) = get(app_against(&server), "/api/balance", Some("Bearer x")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, r#"{"code":-1,"msg":"请求失败"}"#);

    let (status, _, body) = get(app_against(&server), "/api/siliconflow", Some("Bearer x")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.starts_with(r#"{"code":-1,"msg":"请求失败: "#), "got {body}");
}

#[tokio::test]
async fn missing_credential_never_reaches_upstream() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let (status, _, body) = get(app_against(&server), "/api/balance", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"code":-1,"msg":"缺少 Authorization"}"#);
}

#[tokio::test]
async fn each_request_makes_its_own_upstream_call() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"balance": 1})))
        .expect(2)
        .mount(&server)
        .await;

    let app = app_against(&server);
    for _ in 0..2 {
        let (status, _, _) = get(app.clone(), "/api/balance", Some("Bearer same")).await;
        assert_eq!(status, StatusCode::OK);
    }
}
