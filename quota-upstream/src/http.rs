//! `reqwest`-backed upstream client.

use std::time::Duration;

use async_trait::async_trait;
use quota_core::Credential;
use reqwest::header;
use serde_json::Value;

use crate::{Upstream, UpstreamError, UpstreamResponse};

/// Production [`Upstream`] talking HTTPS through a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpUpstream {
    client: reqwest::Client,
}

impl HttpUpstream {
    /// Build a client. `timeout` of `None` keeps the client default (no
    /// overall deadline).
    ///
    /// # Errors
    /// Returns [`UpstreamError::ClientBuild`] if the TLS backend cannot be
    /// initialised.
    pub fn new(timeout: Option<Duration>) -> Result<Self, UpstreamError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| UpstreamError::ClientBuild(e.to_string()))?;
        Ok(Self { client })
    }

    /// Wrap an existing client.
    #[must_use]
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Upstream for HttpUpstream {
    async fn fetch_json(
        &self,
        url: &str,
        credential: &Credential,
    ) -> Result<UpstreamResponse, UpstreamError> {
        let authorization = header::HeaderValue::from_bytes(credential.as_bytes())
            .map_err(|e| UpstreamError::Transport(format!("invalid authorization header: {e}")))?;

        let response = self
            .client
            .get(url)
            .header(header::AUTHORIZATION, authorization)
            .header(header::CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status().as_u16();
        let bytes = response.bytes().await?;
        let body: Value = serde_json::from_slice(&bytes)
            .map_err(|e| UpstreamError::Decode(e.to_string()))?;

        tracing::debug!(status, bytes = bytes.len(), "upstream replied");
        Ok(UpstreamResponse::new(status, body))
    }
}
