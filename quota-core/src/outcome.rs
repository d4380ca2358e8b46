//! The result of one relay invocation, before it is rendered as HTTP.

use serde_json::Value;

use crate::ErrorEnvelope;

/// What the relay decided to send back for one inbound request.
#[derive(Debug, Clone, PartialEq)]
pub enum RelayOutcome {
    /// `OPTIONS` answered locally; no body.
    Preflight,

    /// No usable `authorization` header; upstream was not contacted.
    MissingCredential,

    /// Upstream answered with JSON. Status and body pass through unchanged,
    /// including non-2xx statuses.
    Relayed { status: u16, body: Value },

    /// Transport or decode failure talking to upstream.
    Failed { message: String },
}

impl RelayOutcome {
    /// HTTP status code for this outcome.
    #[must_use]
    pub fn status(&self) -> u16 {
        match self {
            Self::Preflight => 204,
            Self::MissingCredential => 400,
            Self::Relayed { status, .. } => *status,
            Self::Failed { .. } => 500,
        }
    }

    /// JSON body for this outcome, or `None` for preflight.
    #[must_use]
    pub fn body(&self) -> Option<Value> {
        match self {
            Self::Preflight => None,
            Self::MissingCredential => envelope_json(&ErrorEnvelope::missing_credential()),
            Self::Relayed { body, .. } => Some(body.clone()),
            Self::Failed { message } => envelope_json(&ErrorEnvelope::new(message.clone())),
        }
    }

    /// `true` only for responses that came from upstream.
    #[must_use]
    pub fn is_relayed(&self) -> bool {
        matches!(self, Self::Relayed { .. })
    }
}

// Serializing a two-field struct cannot fail.
fn envelope_json(envelope: &ErrorEnvelope) -> Option<Value> {
    serde_json::to_value(envelope).ok()
}
