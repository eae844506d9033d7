//! Build-time Configuration
//!
//! Values are baked in at compile time (`API_URL=... trunk build`).

use log::LevelFilter;

const DEFAULT_API_URL: &str = "http://localhost:8080";
const DEFAULT_CSRF_PATH: &str = "/csrf-token";
const DEFAULT_LOG_CAPACITY: usize = 200;

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the REST backend, without trailing slash
    pub api_url: String,
    /// Path that hands out the CSRF token
    pub csrf_path: String,
    /// Lines kept by the in-memory logger
    pub log_capacity: usize,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            csrf_path: DEFAULT_CSRF_PATH.to_string(),
            log_capacity: DEFAULT_LOG_CAPACITY,
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Read overrides from compile-time environment variables
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("API_URL"),
            option_env!("CSRF_PATH"),
            option_env!("LOG_CAPACITY"),
            option_env!("LOG_LEVEL"),
        )
    }

    fn from_values(
        api_url: Option<&str>,
        csrf_path: Option<&str>,
        log_capacity: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            api_url: api_url
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.api_url),
            csrf_path: csrf_path
                .filter(|path| path.starts_with('/'))
                .map(str::to_string)
                .unwrap_or(defaults.csrf_path),
            log_capacity: log_capacity
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.log_capacity),
            log_level: log_level
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.log_level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_values(None, None, None, None);
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_overrides_are_normalized() {
        let config = AppConfig::from_values(
            Some("https://api.example.com/"),
            Some("/csrf"),
            Some("50"),
            Some("debug"),
        );
        assert_eq!(config.api_url, "https://api.example.com");
        assert_eq!(config.csrf_path, "/csrf");
        assert_eq!(config.log_capacity, 50);
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = AppConfig::from_values(Some(""), Some("csrf"), Some("many"), Some("loud"));
        assert_eq!(config, AppConfig::default());
    }
}
