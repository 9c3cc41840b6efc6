//! HTTP server configuration.

use std::net::SocketAddr;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_listen() -> String {
    String::from("127.0.0.1:3000")
}

/// 4 MiB: a 200k-character transcript in 4-byte UTF-8 plus JSON overhead.
const fn default_max_body_bytes() -> usize {
    4 * 1024 * 1024
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Socket address to bind.
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Maximum accepted request body size.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    /// Allow cross-origin requests from any origin.
    #[serde(default)]
    pub cors_permissive: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            max_body_bytes: default_max_body_bytes(),
            cors_permissive: false,
        }
    }
}

impl ServerConfig {
    /// Parse `listen` as a socket address.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `listen` is not `host:port`.
    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.listen
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidValue {
                field: "server.listen".into(),
                reason: e.to_string(),
            })
    }
}
