//! Gateway settings read from the environment at startup.

use std::time::Duration;

use quota_core::{CorsPolicy, RelayConfig};

use crate::error::GatewayError;

/// Default bind address.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8787";

pub const LISTEN_ADDR_VAR: &str = "QUOTA_LISTEN_ADDR";
pub const SILICONFLOW_URL_VAR: &str = "QUOTA_SILICONFLOW_URL";
pub const BALANCE_URL_VAR: &str = "QUOTA_BALANCE_URL";
pub const BALANCE_CORS_VAR: &str = "QUOTA_BALANCE_CORS";
pub const UPSTREAM_TIMEOUT_VAR: &str = "QUOTA_UPSTREAM_TIMEOUT_SECS";

/// Resolved gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewaySettings {
    pub listen_addr: String,
    pub siliconflow: RelayConfig,
    pub balance: RelayConfig,
    /// `None` keeps the HTTP client default (no overall deadline).
    pub upstream_timeout: Option<Duration>,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_owned(),
            siliconflow: RelayConfig::siliconflow(),
            balance: RelayConfig::aiping_balance(),
            upstream_timeout: None,
        }
    }
}

impl GatewaySettings {
    /// Read settings from the process environment.
    ///
    /// # Errors
    /// Returns [`GatewayError::InvalidSetting`] or [`GatewayError::Core`] if
    /// a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, GatewayError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read settings through `lookup`, which maps a variable name to its
    /// value. Empty values count as unset.
    ///
    /// # Errors
    /// See [`GatewaySettings::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, GatewayError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let mut settings = Self::default();

        if let Some(addr) = get(LISTEN_ADDR_VAR) {
            settings.listen_addr = addr;
        }
        if let Some(url) = get(SILICONFLOW_URL_VAR) {
            settings.siliconflow = settings.siliconflow.with_upstream_url(url)?;
        }
        if let Some(url) = get(BALANCE_URL_VAR) {
            settings.balance = settings.balance.with_upstream_url(url)?;
        }
        if let Some(raw) = get(BALANCE_CORS_VAR) {
            let cors: CorsPolicy = raw
                .parse()
                .map_err(|reason| GatewayError::InvalidSetting { name: BALANCE_CORS_VAR, reason })?;
            settings.balance = settings.balance.with_cors(cors);
        }
        if let Some(raw) = get(UPSTREAM_TIMEOUT_VAR) {
            let secs: u64 = raw.trim().parse().map_err(|e| GatewayError::InvalidSetting {
                name: UPSTREAM_TIMEOUT_VAR,
                reason: format!("'{raw}' is not a whole number of seconds: {e}"),
            })?;
            if secs == 0 {
                return Err(GatewayError::InvalidSetting {
                    name: UPSTREAM_TIMEOUT_VAR,
                    reason: "timeout must be greater than zero".to_owned(),
                });
            }
            settings.upstream_timeout = Some(Duration::from_secs(secs));
        }

        Ok(settings)
    }
}
