//! Configuration management for senti
//!
//! Resolution order, lowest to highest: defaults, `config.toml` in the
//! platform config directory (or `--config`), `SENTI_BASE_URL`, `--base-url`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::analysis::AnalysisMode;
use crate::api::SentimentClient;
use crate::tui::ThemePreset;

/// Environment variable overriding `service.base_url`
pub const BASE_URL_ENV: &str = "SENTI_BASE_URL";

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub service: ServiceConfig,
    pub ui: UiConfig,
}

/// Where and how to reach the prediction service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub base_url: String,
    /// Whole-request timeout; unset waits as long as the transport does
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

impl ServiceConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// HTTP client for this service
    pub fn client(&self) -> SentimentClient {
        let client = SentimentClient::new(&self.base_url);
        match self.timeout() {
            Some(timeout) => client.with_timeout(timeout),
            None => client,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UiConfig {
    /// Mode selected when the TUI starts
    pub default_mode: AnalysisMode,
    pub theme: ThemePreset,
}

impl Config {
    /// Load configuration from the default location, or defaults if absent
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    /// Load from an explicit file; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Apply `SENTI_BASE_URL` and then an explicit `--base-url`
    pub fn with_overrides(mut self, base_url: Option<&str>) -> Self {
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            if !url.trim().is_empty() {
                self.service.base_url = url;
            }
        }
        if let Some(url) = base_url {
            self.service.base_url = url.to_string();
        }
        self
    }

    /// Get the configuration file path
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "senti")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Directory for the TUI log file
    pub fn log_dir() -> PathBuf {
        directories::ProjectDirs::from("", "", "senti")
            .map(|dirs| dirs.data_local_dir().to_path_buf())
            .unwrap_or_else(std::env::temp_dir)
    }

    /// Write configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.service.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.service.timeout(), None);
        assert_eq!(config.ui.default_mode, AnalysisMode::Paragraph);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = Config::load_from(&tmp.path().join("nope.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(
            &path,
            "[service]\nbase_url = \"https://senti.example.org\"\ntimeout_secs = 30\n\n[ui]\ndefault_mode = \"sentence\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.service.base_url, "https://senti.example.org");
        assert_eq!(config.service.timeout(), Some(Duration::from_secs(30)));
        assert_eq!(config.ui.default_mode, AnalysisMode::Sentence);
        assert_eq!(config.ui.theme, ThemePreset::default());
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[ui]\ndefault_mode = \"essay\"\n").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid config"));
    }

    #[test]
    fn test_save_then_load() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("config.toml");
        let mut config = Config::default();
        config.ui.theme = ThemePreset::Nord;
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_explicit_base_url_wins() {
        let config = Config::default().with_overrides(Some("http://10.0.0.5:9000"));
        assert_eq!(config.service.base_url, "http://10.0.0.5:9000");
    }
}
