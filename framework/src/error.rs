//! Crate-wide error type
//!
//! Host ORM failures are passed through untouched. The only errors this
//! crate raises itself come from `get`-style lookups and configuration.

use thiserror::Error;

/// Error returned by managers and connection helpers
///
/// # Example
///
/// ```rust,ignore
/// use ycutils::{Criteria, Manager, Model, ModelError};
///
/// match todos::Entity::objects().get(&db, Criteria::new().add(todos::Column::Id.eq(7))).await {
///     Ok(todo) => println!("{}", todo.title),
///     Err(ModelError::ModelNotFound { .. }) => println!("gone"),
///     Err(e) => return Err(e),
/// }
/// ```
#[derive(Debug, Error)]
pub enum ModelError {
    /// Error raised by SeaORM or the database behind it
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// `get` matched no row
    #[error("{model_name} matching query does not exist")]
    ModelNotFound {
        /// The name of the model that was queried
        model_name: String,
    },

    /// `get` matched more than one row
    #[error("get() returned more than one {model_name} (at least {count})")]
    MultipleObjectsReturned {
        /// The name of the model that was queried
        model_name: String,
        /// Number of rows seen before giving up
        count: usize,
    },

    /// Missing or invalid configuration
    #[error("Configuration error: {message}")]
    Config {
        /// The error message
        message: String,
    },
}

impl ModelError {
    /// Create a ModelNotFound error
    pub fn model_not_found(name: impl Into<String>) -> Self {
        Self::ModelNotFound {
            model_name: name.into(),
        }
    }

    /// Create a MultipleObjectsReturned error
    pub fn multiple_objects(name: impl Into<String>, count: usize) -> Self {
        Self::MultipleObjectsReturned {
            model_name: name.into(),
            count,
        }
    }

    /// Create a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// True when the error is a "no such row" lookup failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ModelNotFound { .. })
    }
}
