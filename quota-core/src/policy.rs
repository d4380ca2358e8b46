//! Per-relay policies: cross-origin handling and failure message format.

use std::{fmt, str::FromStr};

use crate::envelope::REQUEST_FAILED_MSG;

/// How cross-origin headers are produced for a relay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CorsPolicy {
    /// The relay answers `OPTIONS` preflight itself and adds
    /// `Access-Control-Allow-Origin: *` to every response.
    #[default]
    Explicit,

    /// The hosting platform handles preflight and cross-origin headers.
    /// `OPTIONS` is relayed like any other method and only relayed upstream
    /// responses get `Access-Control-Allow-Origin: *`.
    PlatformInjected,
}

impl CorsPolicy {
    /// Whether an `OPTIONS` request is answered without contacting upstream.
    #[must_use]
    pub fn answers_preflight(self) -> bool {
        matches!(self, Self::Explicit)
    }

    /// Whether a response synthesized by the relay itself (preflight, 400,
    /// 500) carries `Access-Control-Allow-Origin`.
    #[must_use]
    pub fn decorates_local_responses(self) -> bool {
        matches!(self, Self::Explicit)
    }
}

impl FromStr for CorsPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "explicit" => Ok(Self::Explicit),
            "platform" | "platform-injected" => Ok(Self::PlatformInjected),
            other => Err(format!("unknown cors policy '{other}'; expected 'explicit' or 'platform'")),
        }
    }
}

impl fmt::Display for CorsPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit => f.write_str("explicit"),
            Self::PlatformInjected => f.write_str("platform"),
        }
    }
}

/// How much of an upstream failure is exposed to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureDetail {
    /// `请求失败: <cause>`
    WithCause,
    /// `请求失败`
    Opaque,
}

impl FailureDetail {
    /// Render the caller-facing failure message for `cause`.
    #[must_use]
    pub fn message(self, cause: &str) -> String {
        match self {
            Self::WithCause => format!("{REQUEST_FAILED_MSG}: {cause}"),
            Self::Opaque => REQUEST_FAILED_MSG.to_owned(),
        }
    }
}
