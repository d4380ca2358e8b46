//! JSON error body returned for failures synthesized by the relay.

use serde::Serialize;

/// Error code carried by every synthesized error body.
pub const ERROR_CODE: i32 = -1;

/// Message returned when the `authorization` header is absent.
pub const MISSING_CREDENTIAL_MSG: &str = "缺少 Authorization";

/// Prefix of every upstream failure message.
pub const REQUEST_FAILED_MSG: &str = "请求失败";

/// `{ "code": -1, "msg": "..." }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorEnvelope {
    pub code: i32,
    pub msg: String,
}

impl ErrorEnvelope {
    /// Create an envelope with the standard error code.
    #[must_use]
    pub fn new(msg: impl Into<String>) -> Self {
        Self { code: ERROR_CODE, msg: msg.into() }
    }

    /// The body sent when no credential was supplied.
    #[must_use]
    pub fn missing_credential() -> Self {
        Self::new(MISSING_CREDENTIAL_MSG)
    }
}
