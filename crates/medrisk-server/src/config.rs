//! Server configuration from environment variables.

use std::env;
use std::net::{AddrParseError, IpAddr, SocketAddr};

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Invalid HOST value: {0}")]
    Host(#[from] AddrParseError),

    #[error("Invalid PORT value: {0}")]
    Port(#[from] std::num::ParseIntError),
}

/// Bind address for the HTTP server, read from `HOST` and `PORT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    /// Reads `HOST` (default `0.0.0.0`) and `PORT` (default `8000`).
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("HOST")
            .unwrap_or_else(|_| "0.0.0.0".into())
            .parse()?;
        let port = env::var("PORT")
            .map(|p| p.parse())
            .unwrap_or(Ok(8000))?;
        Ok(Self { host, port })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
