/// Configuration management for the photo schema tooling
///
/// Loads configuration from environment variables. Pool settings
/// (`DATABASE_URL`, `DB_*`) are read by `db_pool::DbConfig::from_env`.
use anyhow::Result;
use db_pool::DbConfig;

/// Default database file, created on first connect
pub const DEFAULT_DATABASE_URL: &str = "sqlite://photo.db?mode=rwc";

const SERVICE_NAME: &str = "photo-schema";

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// Database pool configuration
    pub database: DbConfig,
}

/// Application settings
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Application environment (dev, staging, prod)
    pub env: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let app = AppConfig {
            env: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        };

        Ok(Config {
            app,
            database: DbConfig::from_env(SERVICE_NAME, DEFAULT_DATABASE_URL),
        })
    }

    /// Pool settings for this configuration
    pub fn db_config(&self) -> DbConfig {
        self.database.clone()
    }
}
