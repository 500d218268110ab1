use std::path::Path;

use crate::error::ModelError;

/// Load environment variables from .env files
///
/// Precedence (earlier wins):
/// 1. Actual system environment variables
/// 2. .env.local (local overrides, not committed)
/// 3. .env (base defaults)
///
/// Missing files are skipped. Returns the number of files that were read.
pub fn load_dotenv(project_root: &Path) -> usize {
    // dotenvy never overwrites a variable that is already set, so the most
    // specific file goes first
    [".env.local", ".env"]
        .iter()
        .filter(|name| dotenvy::from_path(project_root.join(name)).is_ok())
        .count()
}

/// Get an environment variable with a default value
///
/// Unset and unparsable values both fall back to `default`.
///
/// # Example
/// ```
/// use ycutils::config::env;
///
/// let timeout: u64 = env("DB_CONNECT_TIMEOUT", 30);
/// ```
pub fn env<T: std::str::FromStr>(key: &str, default: T) -> T {
    env_optional(key).unwrap_or(default)
}

/// Get a required environment variable
///
/// # Example
/// ```no_run
/// use ycutils::config::env_required;
///
/// let url: String = env_required("DATABASE_URL").unwrap();
/// ```
pub fn env_required<T: std::str::FromStr>(key: &str) -> Result<T, ModelError> {
    env_optional(key).ok_or_else(|| {
        ModelError::config(format!(
            "Required environment variable {} is not set or invalid",
            key
        ))
    })
}

/// Get an optional environment variable
pub fn env_optional<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}
