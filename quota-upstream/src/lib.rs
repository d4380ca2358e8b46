//! Upstream access for the quota relay.
//!
//! Provides the [`Upstream`] backend seam, the production [`HttpUpstream`]
//! client, and [`Relay`], which turns one inbound request into at most one
//! authenticated upstream call.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod backend;
pub mod error;
pub mod http;
pub mod relay;
pub mod response;

pub use backend::Upstream;
pub use error::UpstreamError;
pub use http::HttpUpstream;
pub use relay::Relay;
pub use response::UpstreamResponse;
