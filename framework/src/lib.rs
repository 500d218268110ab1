//! Query shortcuts, timestamped models and soft delete for SeaORM entities
//!
//! See [`database`] for a walkthrough.

pub mod config;
pub mod database;
pub mod error;
pub mod testing;

pub use database::{
    BaseModel, Criteria, CurdManager, DatabaseConfig, DbConnection, DeletedScope, Manager, Model,
    SoftDelManager, SoftDeleteModel,
};
pub use error::ModelError;

// Re-exports for entity definitions
pub use async_trait;
pub use sea_orm;
