//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Errors produced while assembling the host.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `PORT` is set but is not a valid port number.
    #[error("invalid PORT '{0}'")]
    InvalidPort(String),

    /// `TRUTHLENS_HOST` is set but is not an IP address.
    #[error("invalid TRUTHLENS_HOST '{0}'")]
    InvalidHost(String),

    /// Leptos options could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self { host: DEFAULT_HOST, port: DEFAULT_PORT }
    }
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `TRUTHLENS_HOST`: default `0.0.0.0`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var("TRUTHLENS_HOST").ok().as_deref(),
            std::env::var("PORT").ok().as_deref(),
        )
    }

    fn from_vars(host: Option<&str>, port: Option<&str>) -> Result<Self, ConfigError> {
        let host = match host.map(str::trim).filter(|h| !h.is_empty()) {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidHost(raw.to_owned()))?,
            None => DEFAULT_HOST,
        };
        let port = match port.map(str::trim).filter(|p| !p.is_empty()) {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw.to_owned()))?,
            None => DEFAULT_PORT,
        };
        Ok(Self { host, port })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
