//! HTTP gateway for the quota relay.
//!
//! Exposes the SiliconFlow and aiping.cn balance relays to browser clients,
//! answering CORS preflight and relaying upstream JSON unchanged.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod response;
pub mod routes;
pub mod settings;
