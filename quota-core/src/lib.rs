//! Core types for the quota relay.
//!
//! Defines the request-scoped domain of the authenticated proxy relay:
//! the caller credential, the per-deployment relay configuration, the
//! CORS and failure-message policies, and the relay outcome.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod credential;
pub mod envelope;
pub mod error;
pub mod outcome;
pub mod policy;

pub use config::{RelayConfig, AIPING_REMAIN_POINTS_URL, SILICONFLOW_USER_INFO_URL};
pub use credential::Credential;
pub use envelope::{ErrorEnvelope, MISSING_CREDENTIAL_MSG};
pub use error::CoreError;
pub use outcome::RelayOutcome;
pub use policy::{CorsPolicy, FailureDetail};
