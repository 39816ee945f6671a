//! Application configuration loading from environment variables.
//!
//! All configuration is read from the environment at startup (a `.env` file is
//! loaded first by `main` through `dotenvy`).
//!
//! # Environment Variables
//!
//! ## Required Variables
//! - `ACCESS_TOKEN_KEY`: HS256 secret used to verify bearer tokens
//! - `DATABASE_URL`: PostgreSQL connection string (only for the `postgres` backend)
//!
//! ## Optional Variables
//! - `RUST_LOG`: Logging level (default: "info,forum_api=debug,tower_http=debug")
//! - `HOST`: Server bind address (default: "0.0.0.0")
//! - `PORT`: Server port (default: 5000)
//! - `STORAGE_BACKEND`: `postgres` or `memory` (default: "postgres")
//! - `DATABASE_MAX_CONNECTIONS`: DB pool size (default: 10)
//! - `IGNORE_MISSING_MIGRATIONS`: Skip missing migrations (default: false)

use std::{fmt, str::FromStr};

/// Where forum data is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" => Ok(Self::Memory),
            other => Err(format!("unknown storage backend `{other}`")),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Postgres => f.write_str("postgres"),
            Self::Memory => f.write_str("memory"),
        }
    }
}

/// Complete server configuration loaded from environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection string; `None` when running on the memory backend
    pub database_url: Option<String>,

    /// Maximum number of concurrent database connections
    pub database_max_connections: u32,

    pub storage_backend: StorageBackend,

    /// Server bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Secret for verifying access tokens
    pub access_token_key: String,

    /// Skip missing migrations during startup
    pub ignore_missing_migrations: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or a value cannot be
    /// parsed to the expected type.
    pub fn from_env() -> anyhow::Result<Self> {
        let storage_backend = env_or("STORAGE_BACKEND", StorageBackend::Postgres)?;
        let database_url = match storage_backend {
            StorageBackend::Postgres => Some(env_required("DATABASE_URL")?),
            StorageBackend::Memory => std::env::var("DATABASE_URL").ok(),
        };

        Ok(Self {
            database_url,
            database_max_connections: env_or("DATABASE_MAX_CONNECTIONS", 10)?,
            storage_backend,
            host: env_or("HOST", "0.0.0.0".to_string())?,
            port: env_or("PORT", 5000)?,
            access_token_key: env_required("ACCESS_TOKEN_KEY")?,
            ignore_missing_migrations: env_or("IGNORE_MISSING_MIGRATIONS", false)?,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Load a required environment variable.
///
/// # Errors
///
/// Returns an error if the variable is not set.
fn env_required(key: &str) -> anyhow::Result<String> {
    std::env::var(key).map_err(|_| anyhow::anyhow!("Missing required environment variable: {}", key))
}

/// Load an environment variable with a default value.
///
/// # Errors
///
/// Returns an error if the variable is set but cannot be parsed.
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}
