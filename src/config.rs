//! Build-time Configuration
//!
//! The API base URL and log level are baked in at compile time
//! (`CARDS_API_URL`, `CARDS_LOG_LEVEL`), the same way a bundler injects env vars.

use log::LevelFilter;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Base URL without trailing slash, e.g. `https://host/api`
    pub base_url: String,
    pub log_level: LevelFilter,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self::from_values(option_env!("CARDS_API_URL"), option_env!("CARDS_LOG_LEVEL"))
    }

    pub fn from_values(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        let base_url = api_url
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .to_string();

        let log_level = log_level
            .and_then(|level| level.trim().parse::<LevelFilter>().ok())
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self { base_url, log_level }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::from_values(None, None);
        assert_eq!(config.base_url, DEFAULT_API_URL);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_trailing_slashes_stripped() {
        let config = ApiConfig::from_values(Some("https://notes.example/api//"), None);
        assert_eq!(config.base_url, "https://notes.example/api");
    }

    #[test]
    fn test_blank_url_falls_back() {
        let config = ApiConfig::from_values(Some("   "), None);
        assert_eq!(config.base_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(ApiConfig::from_values(None, Some("debug")).log_level, LevelFilter::Debug);
        assert_eq!(ApiConfig::from_values(None, Some("WARN")).log_level, LevelFilter::Warn);
        assert_eq!(ApiConfig::from_values(None, Some("loud")).log_level, LevelFilter::Info);
    }
}
