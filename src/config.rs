//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export DATABASE_URL="sqlite://urls.db"
//! export PORT="3001"
//! export BASE_URL="https://sho.rt"
//! ```
//!
//! ## Optional Variables
//!
//! - `DATABASE_URL` - SQLite database (default: `sqlite://urls.db`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:$PORT`)
//! - `PORT` - Port used when `LISTEN` is unset (default: `3001`)
//! - `BASE_URL` - Public origin for short URLs (default: derived from `Host`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `DB_CONNECT_TIMEOUT` - Pool acquire timeout in seconds (default: 30)
//! - `REQUEST_TIMEOUT_SECONDS` - Per-request deadline (default: 10)

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

use crate::infrastructure::persistence::PoolSettings;

const DEFAULT_DATABASE_URL: &str = "sqlite://urls.db";
const DEFAULT_PORT: u16 = 3001;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    /// Public origin used to build short URLs, without trailing slash.
    pub base_url: Option<String>,
    pub log_level: String,
    pub log_format: String,

    // ── Pool settings ───────────────────────────────────────────────────────
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 5).
    pub db_max_connections: u32,
    /// Timeout for acquiring a connection from the pool in seconds
    /// (`DB_CONNECT_TIMEOUT`, default: 30).
    pub db_connect_timeout: u64,

    /// Deadline for a single HTTP request (`REQUEST_TIMEOUT_SECONDS`, default: 10).
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but not a valid port number.
    pub fn from_env() -> Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let listen_addr = Self::load_listen_addr().context("Failed to load listen address")?;

        let base_url = env::var("BASE_URL")
            .ok()
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty());

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let db_connect_timeout = env::var("DB_CONNECT_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        let request_timeout_seconds = env::var("REQUEST_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        Ok(Self {
            database_url,
            listen_addr,
            base_url,
            log_level,
            log_format,
            db_max_connections,
            db_connect_timeout,
            request_timeout_seconds,
        })
    }

    /// Loads the bind address.
    ///
    /// Priority:
    /// 1. `LISTEN` environment variable
    /// 2. `0.0.0.0:$PORT`
    /// 3. `0.0.0.0:3001`
    fn load_listen_addr() -> Result<String> {
        if let Ok(addr) = env::var("LISTEN") {
            return Ok(addr);
        }

        let port = match env::var("PORT") {
            Ok(port) => port
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got '{}'", port))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(format!("0.0.0.0:{}", port))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `database_url` is not a `sqlite:` URL
    /// - `base_url` is not an `http(s)://` origin
    /// - pool or timeout settings are zero
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if let Some(ref base_url) = self.base_url
            && !base_url.starts_with("http://")
            && !base_url.starts_with("https://")
        {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                base_url
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_connect_timeout == 0 {
            anyhow::bail!("DB_CONNECT_TIMEOUT must be greater than 0");
        }
        if self.request_timeout_seconds == 0 {
            anyhow::bail!("REQUEST_TIMEOUT_SECONDS must be greater than 0");
        }

        Ok(())
    }

    /// Pool settings derived from this configuration.
    pub fn pool_settings(&self) -> PoolSettings {
        PoolSettings {
            max_connections: self.db_max_connections,
            acquire_timeout: Duration::from_secs(self.db_connect_timeout),
            create_if_missing: true,
        }
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", mask_connection_string(&self.database_url));
        match self.base_url {
            Some(ref base_url) => tracing::info!("  Base URL: {}", base_url),
            None => tracing::info!("  Base URL: from Host header"),
        }
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Request timeout: {}s", self.request_timeout_seconds);
    }
}

/// Masks query parameters in connection strings for logging.
///
/// - `sqlite://data/urls.db?mode=rwc` → `sqlite://data/urls.db?***`
fn mask_connection_string(url: &str) -> String {
    match url.split_once('?') {
        Some((path, _)) => format!("{}?***", path),
        None => url.to_string(),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if variables are malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn valid_config() -> Config {
        Config {
            database_url: "sqlite://urls.db".to_string(),
            listen_addr: "0.0.0.0:3001".to_string(),
            base_url: None,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            db_max_connections: 5,
            db_connect_timeout: 30,
            request_timeout_seconds: 10,
        }
    }

    #[test]
    fn test_mask_connection_string() {
        assert_eq!(
            mask_connection_string("sqlite://urls.db"),
            "sqlite://urls.db"
        );

        assert_eq!(
            mask_connection_string("sqlite://data/urls.db?mode=rwc"),
            "sqlite://data/urls.db?***"
        );

        assert_eq!(
            mask_connection_string("sqlite::memory:"),
            "sqlite::memory:"
        );
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3001".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:3001".to_string();

        config.database_url = "mysql://localhost/test".to_string();
        assert!(config.validate().is_err());

        config.database_url = "sqlite::memory:".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_base_url_validation() {
        let mut config = valid_config();

        config.base_url = Some("https://sho.rt".to_string());
        assert!(config.validate().is_ok());

        config.base_url = Some("sho.rt".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_settings_rejected() {
        let mut config = valid_config();
        config.db_max_connections = 0;
        assert!(config.validate().is_err());

        let mut config = valid_config();
        config.db_connect_timeout = 0;
        assert!(config.validate().is_err());

        let mut config = valid_config();
        config.request_timeout_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_pool_settings() {
        let settings = valid_config().pool_settings();

        assert_eq!(settings.max_connections, 5);
        assert_eq!(settings.acquire_timeout, Duration::from_secs(30));
    }

    #[test]
    #[serial]
    fn test_listen_addr_from_port() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("LISTEN");
            env::set_var("PORT", "8080");
        }

        assert_eq!(Config::load_listen_addr().unwrap(), "0.0.0.0:8080");

        unsafe {
            env::set_var("PORT", "not-a-port");
        }
        assert!(Config::load_listen_addr().is_err());

        unsafe {
            env::remove_var("PORT");
        }
        assert_eq!(Config::load_listen_addr().unwrap(), "0.0.0.0:3001");
    }

    #[test]
    #[serial]
    fn test_listen_priority() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("LISTEN", "127.0.0.1:4000");
            env::set_var("PORT", "8080");
        }

        assert_eq!(Config::load_listen_addr().unwrap(), "127.0.0.1:4000");

        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("PORT");
        }
    }

    #[test]
    #[serial]
    fn test_base_url_trailing_slash_trimmed() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("BASE_URL", "https://sho.rt/");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.base_url.as_deref(), Some("https://sho.rt"));

        unsafe {
            env::set_var("BASE_URL", "   ");
        }
        let config = Config::from_env().unwrap();
        assert!(config.base_url.is_none());

        unsafe {
            env::remove_var("BASE_URL");
        }
    }
}
