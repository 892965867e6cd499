//! Startup configuration parsed from environment variables.

use std::net::SocketAddr;

/// Errors produced while resolving startup configuration.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// `LOGIN_ADDR` is not a `host:port` socket address.
    #[error("invalid LOGIN_ADDR '{value}' (expected host:port)")]
    InvalidAddr { value: String },

    /// `PORT` is not a valid TCP port.
    #[error("invalid PORT '{value}'")]
    InvalidPort { value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl ServerConfig {
    /// Build the bind configuration from environment variables.
    ///
    /// Optional:
    /// - `LOGIN_ADDR`: full bind address, defaults to the Leptos `site-addr`
    /// - `PORT`: overrides the port of whichever address was chosen
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when either variable is set but malformed.
    pub fn from_env(site_addr: SocketAddr) -> Result<Self, ConfigError> {
        let addr = resolve_addr(
            std::env::var("LOGIN_ADDR").ok().as_deref(),
            std::env::var("PORT").ok().as_deref(),
            site_addr,
        )?;
        Ok(Self { addr })
    }
}

fn resolve_addr(addr: Option<&str>, port: Option<&str>, fallback: SocketAddr) -> Result<SocketAddr, ConfigError> {
    let mut resolved = match non_empty(addr) {
        Some(raw) => raw
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidAddr { value: raw.to_owned() })?,
        None => fallback,
    };
    if let Some(raw) = non_empty(port) {
        let port = raw
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort { value: raw.to_owned() })?;
        resolved.set_port(port);
    }
    Ok(resolved)
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
