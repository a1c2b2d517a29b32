//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `SERVER_HOST` - Bind address (default: 127.0.0.1)
//! - `SERVER_PORT` - Listen port (default: 3000)
//! - `CATALOG_PATH` - JSON file of stores; the built-in catalog is used
//!   when unset
//! - `CATALOG_PRODUCT_MATCH` - `exact` (default) or `name-unit`; how
//!   requested items are matched against catalog products

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::ProductMatch;

const DEFAULT_PORT: u16 = 3000;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// IP address to bind the server to.
    pub host: IpAddr,
    /// Port to listen on.
    pub port: u16,
    /// Path to a JSON catalog file, if configured.
    pub catalog_path: Option<PathBuf>,
    /// Product match policy for catalog validation.
    pub product_match: ProductMatch,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnvVar`] when a set variable fails to
    /// parse; unset variables fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = match std::env::var("SERVER_HOST") {
            Ok(raw) => raw
                .parse()
                .map_err(|e| ConfigError::InvalidEnvVar("SERVER_HOST".to_owned(), format!("{e}")))?,
            Err(_) => IpAddr::V4(Ipv4Addr::LOCALHOST),
        };

        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|e| ConfigError::InvalidEnvVar("SERVER_PORT".to_owned(), format!("{e}")))?,
            Err(_) => DEFAULT_PORT,
        };

        let catalog_path = std::env::var("CATALOG_PATH").ok().map(PathBuf::from);

        let product_match = match std::env::var("CATALOG_PRODUCT_MATCH") {
            Ok(raw) => raw.parse().map_err(|e| {
                ConfigError::InvalidEnvVar("CATALOG_PRODUCT_MATCH".to_owned(), format!("{e}"))
            })?,
            Err(_) => ProductMatch::default(),
        };

        Ok(Self {
            host,
            port,
            catalog_path,
            product_match,
        })
    }

    /// The socket address to bind.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            catalog_path: None,
            product_match: ProductMatch::default(),
        }
    }
}
