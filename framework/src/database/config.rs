//! Database configuration

use crate::config::env::{env, env_optional};

/// Database backend inferred from the connection URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseType {
    Postgres,
    Sqlite,
}

impl DatabaseType {
    /// Detect the backend from a connection URL, `None` if unsupported
    pub fn from_url(url: &str) -> Option<Self> {
        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Some(Self::Postgres)
        } else if url.starts_with("sqlite:") {
            Some(Self::Sqlite)
        } else {
            None
        }
    }
}

/// Database connection settings
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Connection URL (`postgres://...`, `sqlite://./db.sqlite`, `sqlite::memory:`)
    pub url: String,
    /// Maximum pool size
    pub max_connections: u32,
    /// Minimum pool size
    pub min_connections: u32,
    /// Connect timeout in seconds
    pub connect_timeout: u64,
    /// Log every SQL statement through sqlx
    pub logging: bool,
}

impl DatabaseConfig {
    /// Build config from environment variables
    ///
    /// `DATABASE_URL` falls back to a local SQLite file when unset.
    pub fn from_env() -> Self {
        Self {
            url: env_optional("DATABASE_URL")
                .unwrap_or_else(|| "sqlite://./database.db".to_string()),
            max_connections: env("DB_MAX_CONNECTIONS", 10),
            min_connections: env("DB_MIN_CONNECTIONS", 1),
            connect_timeout: env("DB_CONNECT_TIMEOUT", 30),
            logging: env("DB_LOGGING", false),
        }
    }

    /// Create a builder for customizing config
    pub fn builder() -> DatabaseConfigBuilder {
        DatabaseConfigBuilder::default()
    }

    /// Backend selected by the URL
    pub fn database_type(&self) -> Option<DatabaseType> {
        DatabaseType::from_url(&self.url)
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Builder for DatabaseConfig
///
/// Unset fields take their value from the environment on `build()`.
#[derive(Default)]
pub struct DatabaseConfigBuilder {
    url: Option<String>,
    max_connections: Option<u32>,
    min_connections: Option<u32>,
    connect_timeout: Option<u64>,
    logging: Option<bool>,
}

impl DatabaseConfigBuilder {
    /// Set the connection URL
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the maximum pool size
    pub fn max_connections(mut self, n: u32) -> Self {
        self.max_connections = Some(n);
        self
    }

    /// Set the minimum pool size
    pub fn min_connections(mut self, n: u32) -> Self {
        self.min_connections = Some(n);
        self
    }

    /// Set the connect timeout in seconds
    pub fn connect_timeout(mut self, secs: u64) -> Self {
        self.connect_timeout = Some(secs);
        self
    }

    /// Enable or disable statement logging
    pub fn logging(mut self, enabled: bool) -> Self {
        self.logging = Some(enabled);
        self
    }

    /// Build the config
    pub fn build(self) -> DatabaseConfig {
        let defaults = DatabaseConfig::from_env();
        DatabaseConfig {
            url: self.url.unwrap_or(defaults.url),
            max_connections: self.max_connections.unwrap_or(defaults.max_connections),
            min_connections: self.min_connections.unwrap_or(defaults.min_connections),
            connect_timeout: self.connect_timeout.unwrap_or(defaults.connect_timeout),
            logging: self.logging.unwrap_or(defaults.logging),
        }
    }
}
