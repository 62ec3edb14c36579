//! `AppConfig` struct and TOML read/write.

use std::path::Path;

use anyhow::{Context, Result};
use chardex_api::disney::SearchCriterion;
use serde::{Deserialize, Serialize};
use url::Url;

/// Top-level application configuration.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// API endpoint settings.
    #[serde(default)]
    pub api: ApiConfig,
    /// Search defaults.
    #[serde(default)]
    pub search: SearchConfig,
}

/// API endpoint configuration.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL override. The public API is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

/// Search defaults.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchConfig {
    /// Criterion used when `--by` is omitted (`name`, `film`, `tvShow`).
    #[serde(default = "default_criterion")]
    pub criterion: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            criterion: default_criterion(),
        }
    }
}

fn default_criterion() -> String {
    String::from(SearchCriterion::Name.as_str())
}

impl AppConfig {
    /// Loads config from a TOML file. Returns default if file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Saves config to a TOML file, creating parent directories if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation or file write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("failed to serialize config to TOML")?;
        std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
    }

    /// Resolves the API base URL, preferring `cli_override` over the file.
    ///
    /// Returns `None` when neither is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen value is not a valid URL.
    pub fn base_url(&self, cli_override: Option<&str>) -> Result<Option<Url>> {
        cli_override
            .or(self.api.base_url.as_deref())
            .map(|raw| Url::parse(raw).with_context(|| format!("invalid API base URL: {raw}")))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_default_config() {
        // Arrange & Act
        let config = AppConfig::default();

        // Assert
        assert!(config.api.base_url.is_none());
        assert_eq!(config.search.criterion, "name");
    }

    #[test]
    fn test_load_nonexistent_returns_default() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        // Act
        let config = AppConfig::load(&path).unwrap();

        // Assert
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = AppConfig {
            api: ApiConfig {
                base_url: Some(String::from("http://localhost:9000/")),
            },
            search: SearchConfig {
                criterion: String::from("tvShow"),
            },
        };

        // Act
        config.save(&path).unwrap();
        let loaded = AppConfig::load(&path).unwrap();

        // Assert
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_partial_config() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[search]\n").unwrap();

        // Act
        let config = AppConfig::load(&path).unwrap();

        // Assert
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_invalid_toml_fails() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[api\nbase_url = ").unwrap();

        // Act
        let result = AppConfig::load(&path);

        // Assert
        assert!(result.is_err());
    }

    #[test]
    fn test_base_url_prefers_cli_override() {
        // Arrange
        let config = AppConfig {
            api: ApiConfig {
                base_url: Some(String::from("http://from-config/")),
            },
            ..AppConfig::default()
        };

        // Act
        let url = config.base_url(Some("http://from-cli/")).unwrap();

        // Assert
        assert_eq!(url.unwrap().as_str(), "http://from-cli/");
    }

    #[test]
    fn test_base_url_unset_and_invalid() {
        // Arrange
        let config = AppConfig::default();

        // Act & Assert
        assert!(config.base_url(None).unwrap().is_none());
        assert!(config.base_url(Some("not a url")).is_err());
    }
}
