//! HTTP listener configuration.

use std::net::SocketAddr;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Address and request limits for the HTTP server.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Interface to bind.
    ///
    /// Defaults to "127.0.0.1".
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port. 0 picks an ephemeral port.
    ///
    /// Defaults to 5000.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Largest accepted request body.
    ///
    /// Defaults to 1 MiB.
    #[serde(default = "default_body_limit_bytes")]
    pub body_limit_bytes: usize,
}

fn default_host() -> String {
    "127.0.0.1".into()
}

const fn default_port() -> u16 {
    5000
}

const fn default_body_limit_bytes() -> usize {
    1024 * 1024
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            body_limit_bytes: default_body_limit_bytes(),
        }
    }
}

impl ServerConfig {
    /// Socket address to bind.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when `host` is not an IP address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port)
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidValue {
                field: "host",
                reason: e.to_string(),
            })?;
        Ok(addr)
    }
}
