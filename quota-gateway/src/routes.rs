//! Axum route handlers for the quota gateway.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{any, get},
    Json, Router,
};
use quota_upstream::{HttpUpstream, Relay, Upstream};
use tower_http::trace::TraceLayer;

use crate::{error::GatewayError, response::render, settings::GatewaySettings};

// ── Shared state ─────────────────────────────────────────────────────────────

/// One relay per upstream, shared by all requests.
#[derive(Debug, Clone)]
pub struct AppState {
    pub siliconflow: Arc<Relay>,
    pub balance: Arc<Relay>,
}

impl AppState {
    /// Build both relays on top of a single upstream client.
    #[must_use]
    pub fn new(settings: &GatewaySettings, upstream: Arc<dyn Upstream>) -> Self {
        Self {
            siliconflow: Arc::new(Relay::new(settings.siliconflow.clone(), Arc::clone(&upstream))),
            balance: Arc::new(Relay::new(settings.balance.clone(), upstream)),
        }
    }

    /// Build state with the production HTTP client.
    ///
    /// # Errors
    /// Returns [`GatewayError::Upstream`] if the client cannot be built.
    pub fn from_settings(settings: &GatewaySettings) -> Result<Self, GatewayError> {
        let upstream = HttpUpstream::new(settings.upstream_timeout)?;
        Ok(Self::new(settings, Arc::new(upstream)))
    }
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/siliconflow", any(siliconflow))
        .route("/api/balance", any(balance))
        .route("/health", get(health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /health` — liveness probe.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}

/// `ANY /api/siliconflow` — relay to the SiliconFlow user info endpoint.
pub async fn siliconflow(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
) -> Response {
    relay(&state.siliconflow, &method, &headers).await
}

/// `ANY /api/balance` — relay to the aiping.cn remaining points endpoint.
pub async fn balance(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
) -> Response {
    relay(&state.balance, &method, &headers).await
}

async fn relay(relay: &Relay, method: &Method, headers: &HeaderMap) -> Response {
    // HeaderMap lookups are case-insensitive.
    let authorization = headers.get(header::AUTHORIZATION).map(|v| v.as_bytes());
    let outcome = relay.handle(method, authorization).await;
    render(&outcome, relay.config().cors)
}
