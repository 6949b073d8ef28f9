//! Canonical test configurations.
//!
//! Single source of truth for config structs used across tests.

use crate::infrastructure::config::server::ServerConfig;

/// Server config bound to an ephemeral local port.
pub fn server() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".into(),
        port: 0,
        body_limit_bytes: 16 * 1024,
    }
}

