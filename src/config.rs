//! Centralized configuration management for country-browser

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Country dataset endpoint (REST Countries v3.1 by default)
    pub endpoint: String,
    /// Path of the rolling log file
    pub log_file: PathBuf,
    /// HTTP client configuration
    pub http: HttpConfig,
}

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            user_agent: "country-browser/0.1.0".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables and defaults
    pub fn from_env() -> Result<Self> {
        let endpoint = std::env::var("COUNTRY_BROWSER_ENDPOINT")
            .unwrap_or_else(|_| "https://restcountries.com/v3.1/all".to_string());

        let log_file = std::env::var("COUNTRY_BROWSER_LOG_FILE")
            .unwrap_or_else(|_| "./country-browser.log".to_string())
            .into();

        let http = HttpConfig {
            timeout_seconds: parse_env_var("COUNTRY_BROWSER_HTTP_TIMEOUT_SECONDS")?.unwrap_or(30),
            user_agent: std::env::var("COUNTRY_BROWSER_USER_AGENT")
                .unwrap_or_else(|_| "country-browser/0.1.0".to_string()),
        };

        Ok(Config {
            endpoint,
            log_file,
            http,
        })
    }

    /// Get HTTP timeout as Duration
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http.timeout_seconds)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(parent) = self.log_file.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Cannot create log directory: {}", parent.display())
                })?;
            }
        }
        Ok(())
    }
}

/// Helper function to parse environment variable as a specific type
fn parse_env_var<T>(var_name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display + Send + Sync + std::error::Error + 'static,
{
    match std::env::var(var_name) {
        Ok(val) => val.parse().map(Some).with_context(|| {
            format!("Failed to parse environment variable {} = '{}'", var_name, val)
        }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::from_env().unwrap();
        assert_eq!(config.endpoint, "https://restcountries.com/v3.1/all");
        assert_eq!(config.http.timeout_seconds, 30);
        assert_eq!(config.http.user_agent, "country-browser/0.1.0");
    }

    #[test]
    fn test_config_validation_creates_log_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            endpoint: "http://localhost".to_string(),
            log_file: dir.path().join("logs").join("country-browser.log"),
            http: HttpConfig::default(),
        };
        config.validate().unwrap();
        assert!(dir.path().join("logs").exists());
    }
}
