//! Error types for the gateway crate.
//!
//! Request handling never fails: every relay outcome renders as a JSON
//! response. These errors cover startup only.

use quota_core::CoreError;
use quota_upstream::UpstreamError;

/// Errors that can occur while configuring or starting the gateway.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// An environment variable held an unusable value.
    #[error("invalid setting {name}: {reason}")]
    InvalidSetting { name: &'static str, reason: String },

    /// A relay configuration was rejected.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The upstream HTTP client could not be built.
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    /// Binding or serving failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
