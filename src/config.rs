use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::common::constants::{API_BASE, PAGE_LIMIT};
use crate::common::error::{Result, ScraperError};

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_PATH: &str = "travaux.toml";

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub page_limit: usize,
    pub timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: API_BASE.to_string(),
            page_limit: PAGE_LIMIT,
            timeout_seconds: 30,
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub directory: String,
    pub file_name: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: "logs".to_string(),
            file_name: "travaux.log".to_string(),
        }
    }
}

impl Config {
    /// Loads `path`, or `travaux.toml` when no path is given.
    ///
    /// A missing default file yields the built-in defaults; an explicitly
    /// requested file must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_PATH))?
            }
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ScraperError::Config(format!("Failed to read config file '{}': {}", path.display(), e))
        })?;
        Ok(toml::from_str(&content)?)
    }

    fn validate(&self) -> Result<()> {
        if self.api.page_limit == 0 {
            return Err(ScraperError::Config("api.page_limit must be greater than zero".to_string()));
        }
        if self.api.base_url.trim().is_empty() {
            return Err(ScraperError::Config("api.base_url must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.api.page_limit, 100);
        assert_eq!(config.api.base_url, API_BASE);
        assert_eq!(config.logging.directory, "logs");
    }

    #[test]
    fn test_partial_override() {
        let config = Config::from_toml(
            r#"
            [api]
            base_url = "http://localhost:8080/records"
            page_limit = 20
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8080/records");
        assert_eq!(config.api.page_limit, 20);
        assert_eq!(config.api.timeout_seconds, 30);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_zero_page_limit_is_rejected() {
        let err = Config::from_toml("[api]\npage_limit = 0\n").unwrap_err();
        assert!(matches!(err, ScraperError::Config(_)));
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let err = Config::from_toml("[api\n").unwrap_err();
        assert!(matches!(err, ScraperError::Toml(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\ndirectory = \"/tmp/travaux-logs\"").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.logging.directory, "/tmp/travaux-logs");
        assert_eq!(config.api, ApiConfig::default());
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, ScraperError::Config(_)));
    }
}
