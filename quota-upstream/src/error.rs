//! Error types for the upstream crate.

/// Failures while talking to an upstream API.
///
/// `Display` is the bare cause so it can be embedded in the caller-facing
/// `请求失败: <cause>` message.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum UpstreamError {
    /// Connection, TLS, or request construction failure.
    #[error("{0}")]
    Transport(String),

    /// The response body was not valid JSON.
    #[error("{0}")]
    Decode(String),

    /// The client-side timeout elapsed.
    #[error("timeout")]
    Timeout,

    /// The HTTP client could not be built.
    #[error("failed to build http client: {0}")]
    ClientBuild(String),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if e.is_decode() {
            Self::Decode(describe(e))
        } else {
            Self::Transport(describe(e))
        }
    }
}

/// Render a reqwest error and its source chain without the request URL.
fn describe(e: reqwest::Error) -> String {
    let e = e.without_url();
    let mut text = e.to_string();
    let mut source = std::error::Error::source(&e);
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}
