/// Errors produced by the `quota-core` crate.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// The `authorization` header was present but carried no value.
    #[error("credential must not be empty")]
    EmptyCredential,

    /// An upstream URL was not an absolute `http`/`https` URL.
    #[error("invalid upstream url '{url}': {reason}")]
    InvalidUpstreamUrl { url: String, reason: String },
}
