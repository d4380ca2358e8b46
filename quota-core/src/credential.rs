//! Opaque caller credential taken from the `authorization` header.

use std::fmt;

use crate::CoreError;

/// The raw `authorization` header value of an inbound request.
///
/// The bytes are forwarded upstream unchanged. They are never decoded,
/// trimmed or checked for a `Bearer ` prefix, so values carrying non-UTF-8
/// (obs-text) bytes pass through as well.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(Vec<u8>);

impl Credential {
    /// Wrap a header value.
    ///
    /// # Errors
    /// Returns [`CoreError::EmptyCredential`] if `value` is empty.
    pub fn new(value: impl Into<Vec<u8>>) -> Result<Self, CoreError> {
        let value = value.into();
        if value.is_empty() {
            return Err(CoreError::EmptyCredential);
        }
        Ok(Self(value))
    }

    /// Build a credential from raw header bytes.
    ///
    /// Returns `None` only when the bytes are empty, which counts as a
    /// missing credential.
    #[must_use]
    pub fn from_header_bytes(bytes: &[u8]) -> Option<Self> {
        Self::new(bytes).ok()
    }

    /// The forwarded header value.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The header value as text, if it is valid UTF-8.
    #[must_use]
    pub fn to_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.0).ok()
    }
}

// Never print the secret.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credential").field(&"<redacted>").finish()
    }
}

impl TryFrom<&str> for Credential {
    type Error = CoreError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
