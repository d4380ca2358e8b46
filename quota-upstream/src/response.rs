//! Buffered upstream reply.

use serde_json::Value;

/// An upstream reply: the original status and its JSON body, parsed once.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct UpstreamResponse {
    /// Status code exactly as sent by upstream.
    pub status: u16,

    /// Opaque JSON body. The shape is never validated.
    pub body: Value,
}

impl UpstreamResponse {
    #[must_use]
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }
}
