//! Relay configuration and the two built-in upstream presets.

use url::Url;

use crate::{CoreError, CorsPolicy, FailureDetail};

/// SiliconFlow account info endpoint.
pub const SILICONFLOW_USER_INFO_URL: &str = "https://api.siliconflow.cn/v1/user/info";

/// aiping.cn remaining points endpoint.
pub const AIPING_REMAIN_POINTS_URL: &str = "https://aiping.cn/api/v1/user/remain/points";

/// Everything that distinguishes one relay deployment from another.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct RelayConfig {
    /// Short name used in logs, e.g. `"siliconflow"`.
    pub name: String,

    /// Fixed upstream URL receiving the forwarded `GET`.
    pub upstream_url: String,

    /// Format of the 500 message on upstream failure.
    pub failure_detail: FailureDetail,

    /// Cross-origin handling.
    pub cors: CorsPolicy,
}

impl RelayConfig {
    /// Create a config after checking that `upstream_url` is absolute.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidUpstreamUrl`] if the URL does not parse,
    /// is not `http` or `https`, or has no host.
    pub fn new(
        name: impl Into<String>,
        upstream_url: impl Into<String>,
        failure_detail: FailureDetail,
        cors: CorsPolicy,
    ) -> Result<Self, CoreError> {
        let upstream_url = upstream_url.into();
        validate_upstream_url(&upstream_url)?;
        Ok(Self { name: name.into(), upstream_url, failure_detail, cors })
    }

    /// Relay to SiliconFlow user info. Failure messages include the cause.
    #[must_use]
    pub fn siliconflow() -> Self {
        Self {
            name: "siliconflow".to_owned(),
            upstream_url: SILICONFLOW_USER_INFO_URL.to_owned(),
            failure_detail: FailureDetail::WithCause,
            cors: CorsPolicy::Explicit,
        }
    }

    /// Relay to aiping.cn balance. Failure messages hide the cause.
    #[must_use]
    pub fn aiping_balance() -> Self {
        Self {
            name: "balance".to_owned(),
            upstream_url: AIPING_REMAIN_POINTS_URL.to_owned(),
            failure_detail: FailureDetail::Opaque,
            cors: CorsPolicy::Explicit,
        }
    }

    /// Replace the upstream URL.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidUpstreamUrl`] if the URL is not absolute.
    pub fn with_upstream_url(mut self, url: impl Into<String>) -> Result<Self, CoreError> {
        let url = url.into();
        validate_upstream_url(&url)?;
        self.upstream_url = url;
        Ok(self)
    }

    /// Replace the CORS policy.
    #[must_use]
    pub fn with_cors(mut self, cors: CorsPolicy) -> Self {
        self.cors = cors;
        self
    }

    /// Replace the failure message format.
    #[must_use]
    pub fn with_failure_detail(mut self, failure_detail: FailureDetail) -> Self {
        self.failure_detail = failure_detail;
        self
    }
}

fn validate_upstream_url(raw: &str) -> Result<(), CoreError> {
    let invalid = |reason: String| CoreError::InvalidUpstreamUrl { url: raw.to_owned(), reason };

    let parsed = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!("scheme '{}' is not http or https", parsed.scheme())));
    }
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(invalid("missing host".to_owned()));
    }
    Ok(())
}
