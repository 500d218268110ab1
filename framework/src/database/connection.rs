//! Database connection management

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::database::config::DatabaseConfig;
use crate::error::ModelError;

/// Clonable handle around SeaORM's `DatabaseConnection`
///
/// Derefs to `DatabaseConnection`, so it can be passed straight to any
/// manager method or SeaORM query.
///
/// # Example
///
/// ```rust,ignore
/// let conn = DbConnection::connect(&DatabaseConfig::from_env()).await?;
/// let n = todos::Entity::objects().count(&*conn, Criteria::new()).await?;
/// ```
#[derive(Clone)]
pub struct DbConnection {
    inner: Arc<DatabaseConnection>,
}

impl DbConnection {
    /// Open a connection pool from config
    ///
    /// For SQLite file databases the file (and its parent directories) is
    /// created when missing.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, ModelError> {
        if config.database_type().is_none() {
            return Err(ModelError::config(format!(
                "Unsupported database URL: {}",
                config.url
            )));
        }

        let url = sqlite_file_url(&config.url).unwrap_or_else(|| config.url.clone());

        let mut opt = ConnectOptions::new(&url);
        opt.max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(config.connect_timeout))
            .sqlx_logging(config.logging);

        tracing::debug!(
            max_connections = config.max_connections,
            "Connecting to database"
        );
        let conn = Database::connect(opt).await?;

        Ok(Self {
            inner: Arc::new(conn),
        })
    }

    /// Get a reference to the underlying SeaORM connection
    pub fn inner(&self) -> &DatabaseConnection {
        &self.inner
    }
}

/// Rewrite `sqlite://path` to the create-if-missing form SQLite prefers
///
/// Returns `None` for non-SQLite and in-memory URLs.
fn sqlite_file_url(url: &str) -> Option<String> {
    let path = url.strip_prefix("sqlite://")?.trim_start_matches("./");
    if path.starts_with(":memory:") {
        return None;
    }

    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).ok();
        }
    }

    Some(format!("sqlite:{}?mode=rwc", path))
}

impl AsRef<DatabaseConnection> for DbConnection {
    fn as_ref(&self) -> &DatabaseConnection {
        &self.inner
    }
}

impl std::ops::Deref for DbConnection {
    type Target = DatabaseConnection;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
