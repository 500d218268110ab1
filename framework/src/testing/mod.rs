//! Testing utilities
//!
//! [`TestDatabase`] gives every test its own in-memory SQLite database with
//! the given migrations applied.
//!
//! # Example
//!
//! ```rust,ignore
//! use ycutils::testing::TestDatabase;
//!
//! #[tokio::test]
//! async fn removes_softly() {
//!     let db = TestDatabase::fresh::<Migrator>().await.unwrap();
//!     let objects = todos::Entity::objects();
//!     objects.remove_where(db.conn(), Criteria::new()).await.unwrap();
//! }
//! ```

use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;

use crate::database::{DatabaseConfig, DbConnection};
use crate::error::ModelError;

/// Isolated in-memory SQLite database
///
/// Dropping it closes the pool, which discards the database.
pub struct TestDatabase {
    conn: DbConnection,
}

impl TestDatabase {
    /// Create an empty database and run every migration of `M`
    pub async fn fresh<M: MigratorTrait>() -> Result<Self, ModelError> {
        // one connection: each SQLite memory connection is its own database
        let config = DatabaseConfig::builder()
            .url("sqlite::memory:")
            .max_connections(1)
            .min_connections(1)
            .logging(false)
            .build();

        let conn = DbConnection::connect(&config).await?;
        M::up(conn.inner(), None).await?;

        Ok(Self { conn })
    }

    /// Connection to pass to managers and SeaORM queries
    pub fn conn(&self) -> &DatabaseConnection {
        self.conn.inner()
    }
}

impl std::ops::Deref for TestDatabase {
    type Target = DatabaseConnection;

    fn deref(&self) -> &Self::Target {
        self.conn.inner()
    }
}
