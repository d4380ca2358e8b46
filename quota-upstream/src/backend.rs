//! Upstream backend abstraction trait.
//!
//! Allows swapping the HTTP client (for example with an in-memory stub in
//! tests) without changing the relay logic.

use async_trait::async_trait;
use quota_core::Credential;

use crate::{UpstreamError, UpstreamResponse};

/// A source of authenticated JSON replies.
///
/// Implementations must be `Send + Sync` so one instance can serve
/// concurrent requests.
#[async_trait]
pub trait Upstream: Send + Sync {
    /// Issue one `GET` to `url` carrying `credential` as the
    /// `Authorization` header and return the buffered JSON reply.
    ///
    /// Non-2xx statuses are not errors; they are returned in the
    /// [`UpstreamResponse`] unchanged.
    ///
    /// # Errors
    /// Returns [`UpstreamError::Transport`] on connection failure,
    /// [`UpstreamError::Timeout`] if a configured timeout elapses, and
    /// [`UpstreamError::Decode`] if the body is not JSON.
    async fn fetch_json(
        &self,
        url: &str,
        credential: &Credential,
    ) -> Result<UpstreamResponse, UpstreamError>;
}
