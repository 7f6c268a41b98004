//! Application configuration structures.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP client settings
    #[serde(default)]
    pub crawler: CrawlerConfig,

    /// Source site settings
    #[serde(default)]
    pub site: SiteConfig,

    /// Export settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Progress reporting settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Load configuration strictly and validate it.
    ///
    /// Unlike [`Config::load_or_default`], an unreadable or malformed file is
    /// an error.
    pub fn load_validated(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config = Self::load(path)
            .map_err(|e| AppError::config(format!("failed to load {}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.crawler.user_agent.trim().is_empty() {
            return Err(AppError::validation("crawler.user_agent is empty"));
        }
        if self.crawler.timeout_secs == 0 {
            return Err(AppError::validation("crawler.timeout_secs must be > 0"));
        }

        let landing = url::Url::parse(&self.site.landing_url).map_err(|e| {
            AppError::validation(format!(
                "site.landing_url '{}' is not a valid URL: {e}",
                self.site.landing_url
            ))
        })?;
        if !matches!(landing.scheme(), "http" | "https") {
            return Err(AppError::validation(
                "site.landing_url must use http or https",
            ));
        }

        if self.output.csv_path.as_os_str().is_empty() {
            return Err(AppError::validation("output.csv_path is empty"));
        }
        Ok(())
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlerConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Source site settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Landing page listing the vehicle categories; also the base for image URLs
    #[serde(default = "defaults::landing_url")]
    pub landing_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            landing_url: defaults::landing_url(),
        }
    }
}

/// Export settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Destination of the CSV export
    #[serde(default = "defaults::csv_path")]
    pub csv_path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_path: defaults::csv_path(),
        }
    }
}

/// Progress reporting settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log per-category and per-page progress at info level
    #[serde(default = "defaults::show_progress")]
    pub show_progress: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            show_progress: defaults::show_progress(),
        }
    }
}

mod defaults {
    use std::path::PathBuf;

    use crate::site::DEFAULT_LANDING_URL;

    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; cardata/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn landing_url() -> String {
        DEFAULT_LANDING_URL.into()
    }
    pub fn csv_path() -> PathBuf {
        PathBuf::from("data/car.csv")
    }
    pub fn show_progress() -> bool {
        true
    }
}
