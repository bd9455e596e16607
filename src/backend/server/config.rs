//! Server Configuration
//!
//! Configuration is read from environment variables (after `dotenv` has
//! loaded an optional `.env` file in the binary), with defaults suited to
//! local development.
//!
//! | Variable       | Default                | Meaning                         |
//! |----------------|------------------------|---------------------------------|
//! | `SERVER_HOST`  | `0.0.0.0`              | address to bind                 |
//! | `SERVER_PORT`  | `3000`                 | port to bind                    |
//! | `DATABASE_URL` | `sqlite://roomchat.db` | document store location         |
//! | `RUST_LOG`     | `info`                 | `tracing` filter directives     |

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use thiserror::Error;

use crate::backend::store::{DocumentStore, StoreError};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DATABASE_URL: &str = "sqlite://roomchat.db";
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid SERVER_HOST `{0}`")]
    InvalidHost(String),
    #[error("invalid SERVER_PORT `{0}`")]
    InvalidPort(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub database_url: String,
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// Unset and empty variables fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut builder = Self::builder();

        if let Some(host) = get("SERVER_HOST") {
            let parsed = host
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidHost(host.clone()))?;
            builder = builder.host(parsed);
        }
        if let Some(port) = get("SERVER_PORT") {
            let parsed = port
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
            builder = builder.port(parsed);
        }
        if let Some(url) = get("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(filter) = get("RUST_LOG") {
            builder = builder.log_filter(filter);
        }

        builder.build()
    }

    /// Address the server listens on
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Builder for ServerConfig
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    host: Option<IpAddr>,
    port: Option<u16>,
    database_url: Option<String>,
    log_filter: Option<String>,
}

impl ServerConfigBuilder {
    pub fn host(mut self, host: IpAddr) -> Self {
        self.host = Some(host);
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    pub fn log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = Some(filter.into());
        self
    }

    /// Build the configuration, filling unset values with defaults
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        let defaults = ServerConfig::default();
        let database_url = self.database_url.unwrap_or(defaults.database_url);
        if database_url.is_empty() {
            return Err(ConfigError::MissingValue("DATABASE_URL"));
        }

        Ok(ServerConfig {
            host: self.host.unwrap_or(defaults.host),
            port: self.port.unwrap_or(defaults.port),
            database_url,
            log_filter: self.log_filter.unwrap_or(defaults.log_filter),
        })
    }
}

/// Open the document store named by the configuration
///
/// Unlike optional services, the store is required: the server does not
/// start without it.
pub async fn load_database(config: &ServerConfig) -> Result<DocumentStore, StoreError> {
    tracing::info!("Connecting to document store...");
    let store = DocumentStore::connect(&config.database_url).await?;
    tracing::info!("Document store ready");
    Ok(store)
}
