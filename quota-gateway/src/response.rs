//! Rendering of relay outcomes as HTTP responses.
//!
//! This is the only place cross-origin headers are attached.

use axum::{
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use quota_core::{CorsPolicy, RelayOutcome};

/// Methods advertised in preflight answers.
pub const ALLOW_METHODS: &str = "GET, OPTIONS";

/// Request headers advertised in preflight answers.
pub const ALLOW_HEADERS: &str = "Authorization, Content-Type";

/// Render `outcome` and attach the CORS headers `policy` calls for.
#[must_use]
pub fn render(outcome: &RelayOutcome, policy: CorsPolicy) -> Response {
    let status = StatusCode::from_u16(outcome.status()).unwrap_or(StatusCode::BAD_GATEWAY);
    let mut response = match outcome.body() {
        Some(body) => (status, Json(body)).into_response(),
        None => status.into_response(),
    };
    apply_cors(response.headers_mut(), outcome, policy);
    response
}

fn apply_cors(headers: &mut HeaderMap, outcome: &RelayOutcome, policy: CorsPolicy) {
    if outcome.is_relayed() || policy.decorates_local_responses() {
        headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    }
    if matches!(outcome, RelayOutcome::Preflight) {
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOW_METHODS),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOW_HEADERS),
        );
    }
}
