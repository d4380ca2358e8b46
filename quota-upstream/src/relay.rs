//! The authenticated proxy relay.
//!
//! One control flow for every deployment, parameterised by [`RelayConfig`]:
//!
//! 1. `OPTIONS` is answered locally when the CORS policy owns preflight.
//! 2. A missing or empty credential fails fast without an upstream call.
//! 3. Otherwise exactly one `GET` goes upstream and its status and JSON
//!    body are relayed unchanged. Transport and decode failures become a
//!    500 outcome. There is no retry.

use std::sync::Arc;

use quota_core::{Credential, RelayConfig, RelayOutcome};
use reqwest::Method;
use tracing::Instrument;
use uuid::Uuid;

use crate::Upstream;

/// A relay bound to one upstream endpoint.
///
/// Holds no mutable state; share it behind an `Arc` across requests.
#[derive(Clone)]
pub struct Relay {
    config: RelayConfig,
    upstream: Arc<dyn Upstream>,
}

impl std::fmt::Debug for Relay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Relay").field("config", &self.config).finish_non_exhaustive()
    }
}

impl Relay {
    #[must_use]
    pub fn new(config: RelayConfig, upstream: Arc<dyn Upstream>) -> Self {
        Self { config, upstream }
    }

    #[must_use]
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// Handle one inbound request.
    ///
    /// `authorization` is the raw header value, if any. The returned outcome
    /// is never an error: every failure is folded into
    /// [`RelayOutcome::MissingCredential`] or [`RelayOutcome::Failed`].
    ///
    /// # Cancel Safety
    /// Cancel safe. Dropping the future abandons the single upstream call.
    pub async fn handle(&self, method: &Method, authorization: Option<&[u8]>) -> RelayOutcome {
        let span = tracing::info_span!(
            "relay",
            relay = %self.config.name,
            request_id = %Uuid::new_v4(),
            %method,
        );
        self.handle_inner(method, authorization).instrument(span).await
    }

    async fn handle_inner(&self, method: &Method, authorization: Option<&[u8]>) -> RelayOutcome {
        if *method == Method::OPTIONS && self.config.cors.answers_preflight() {
            tracing::debug!("answered preflight");
            return RelayOutcome::Preflight;
        }

        let Some(credential) = authorization.and_then(Credential::from_header_bytes) else {
            tracing::debug!("rejected request without credential");
            return RelayOutcome::MissingCredential;
        };

        match self.upstream.fetch_json(&self.config.upstream_url, &credential).await {
            Ok(reply) => {
                tracing::debug!(status = reply.status, "relaying upstream reply");
                RelayOutcome::Relayed { status: reply.status, body: reply.body }
            }
            Err(e) => {
                tracing::warn!(error = %e, upstream = %self.config.upstream_url, "upstream call failed");
                RelayOutcome::Failed { message: self.config.failure_detail.message(&e.to_string()) }
            }
        }
    }
}
