use super::types::Config;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result of config initialization
#[derive(Debug, PartialEq)]
pub enum InitResult {
    /// Config was created at the given path
    Created(PathBuf),
    /// Config already existed at the given path
    AlreadyExists(PathBuf),
}

/// Validation failure reported by `Config::check`
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("api.base_url must start with http:// or https:// (got '{0}')")]
    InvalidBaseUrl(String),
    #[error("api.user_agent must not be empty")]
    EmptyUserAgent,
    #[error("api.timeout_secs must be greater than zero")]
    ZeroTimeout,
    #[error("display.default_limit must be greater than zero")]
    ZeroLimit,
}

impl Config {
    /// Load configuration from the default location, falling back to defaults
    /// when no file exists yet
    pub fn load() -> Result<Config, Box<dyn std::error::Error>> {
        let config_path = Self::get_config_path();

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        Self::load_from_path(config_path)
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.as_ref().display(), "loaded config");
        Ok(config)
    }

    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        // Ensure config directory exists
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the default config file path (~/.config/gh-activity/config.toml)
    pub fn get_config_path() -> PathBuf {
        if let Some(dir) = dirs::config_dir() {
            dir.join("gh-activity").join("config.toml")
        } else {
            PathBuf::from(".gh-activity/config.toml")
        }
    }

    /// Initialize config directory and create default config
    pub fn init() -> Result<InitResult, Box<dyn std::error::Error>> {
        Self::init_at(Self::get_config_path())
    }

    pub fn init_at<P: AsRef<Path>>(path: P) -> Result<InitResult, Box<dyn std::error::Error>> {
        let config_path = path.as_ref().to_path_buf();

        if config_path.exists() {
            return Ok(InitResult::AlreadyExists(config_path));
        }

        Config::default().save_to(&config_path)?;
        Ok(InitResult::Created(config_path))
    }

    /// Validate configuration
    pub fn check(&self) -> Result<(), ConfigError> {
        let base_url = self.api.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(self.api.base_url.clone()));
        }
        if self.api.user_agent.trim().is_empty() {
            return Err(ConfigError::EmptyUserAgent);
        }
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        if self.display.default_limit == 0 {
            return Err(ConfigError::ZeroLimit);
        }

        Ok(())
    }

    /// Print configuration as TOML
    pub fn print(&self) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        println!("{}", content);
        Ok(())
    }
}
