//! Listener settings loaded via OrthoConfig.
//!
//! Values come from `--host`/`--port` flags, `HELLO_HOST`/`HELLO_PORT`
//! environment variables, or a configuration file, falling back to
//! `0.0.0.0:8080`.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Errors raised while resolving listener settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The configured host is not an IP address.
    #[error("invalid host {host:?}: {source}")]
    InvalidHost {
        /// Raw configured value.
        host: String,
        /// Parser failure.
        source: std::net::AddrParseError,
    },
}

/// Configuration values controlling the HTTP listener.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "HELLO")]
pub struct ServerSettings {
    /// IP address to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    #[ortho_config(default = 8080)]
    pub port: u16,
}

impl ServerSettings {
    /// Resolve the socket address the listener binds to.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let host = match self.host.as_deref() {
            None => DEFAULT_HOST,
            Some(raw) => raw
                .trim()
                .parse::<IpAddr>()
                .map_err(|source| SettingsError::InvalidHost {
                    host: raw.to_owned(),
                    source,
                })?,
        };
        Ok(SocketAddr::new(host, self.port))
    }
}
