//! Configuration helpers
//!
//! Loads `.env` files and reads typed values from the environment. The
//! database settings built on top of these live in
//! [`DatabaseConfig`](crate::database::DatabaseConfig).
//!
//! # Example
//!
//! ```rust,no_run
//! use ycutils::config;
//!
//! config::load_dotenv(std::path::Path::new("."));
//! let max: u32 = config::env("DB_MAX_CONNECTIONS", 10);
//! ```

pub mod env;

pub use env::{env, env_optional, env_required, load_dotenv};
