//! Server configuration.
//!
//! The server has two knobs: where to listen and whether to answer CORS
//! preflights. Defaults reproduce the fixed `:8080` bind; `from_env` lets a
//! container override the port through `PORT`.

use std::net::{Ipv4Addr, SocketAddr};

use crate::error::{Result, ServerError};

/// Port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 8080;

/// Environment variable overriding the listen port.
pub const PORT_ENV: &str = "PORT";

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Listen address.
    pub addr: SocketAddr,
    /// Attach a permissive CORS layer.
    pub cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            cors: true,
        }
    }
}

impl ServerConfig {
    /// Build a config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::InvalidPort`] if `PORT` is set but is not a
    /// valid `u16`.
    pub fn from_env() -> Result<Self> {
        Self::from_port_var(std::env::var(PORT_ENV).ok().as_deref())
    }

    /// Build a config from an optional raw `PORT` value.
    pub fn from_port_var(port: Option<&str>) -> Result<Self> {
        let config = Self::default();
        match port.map(str::trim) {
            None | Some("") => Ok(config),
            Some(raw) => {
                let port = raw.parse::<u16>().map_err(|source| ServerError::InvalidPort {
                    value: raw.to_string(),
                    source,
                })?;
                Ok(config.with_port(port))
            }
        }
    }

    /// Replace the listen address.
    pub fn with_addr(mut self, addr: SocketAddr) -> Self {
        self.addr = addr;
        self
    }

    /// Replace only the port, keeping the host.
    pub fn with_port(mut self, port: u16) -> Self {
        self.addr.set_port(port);
        self
    }

    /// Enable or disable the CORS layer.
    pub fn with_cors(mut self, enabled: bool) -> Self {
        self.cors = enabled;
        self
    }
}
