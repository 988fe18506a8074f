//! Runtime configuration.
//!
//! Every field has a default matching the behavior of the stock app, so an
//! empty YAML document is a valid configuration. Hosts usually ship a small
//! `recipe-book.yaml` overriding only what they need:
//!
//! ```yaml
//! catalog:
//!   recent_limit: 4
//! menu:
//!   keep_checked: false
//! ```

use camino::Utf8Path;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub menu: MenuConfig,
    pub card: CardConfig,
    pub import: ImportConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Number of recipes on the home card deck.
    pub recent_limit: usize,
    /// Number of recipes on the explore page when not searching.
    pub popular_limit: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            recent_limit: 6,
            popular_limit: 8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Keep shopping-list check marks when the menu changes.
    pub keep_checked: bool,
    /// Plan the first N catalog recipes when the book is created.
    pub seed_with_first: usize,
}

impl Default for MenuConfig {
    fn default() -> Self {
        MenuConfig {
            keep_checked: true,
            seed_with_first: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    /// Horizontal drag distance a swipe has to exceed.
    pub swipe_threshold: f64,
}

impl Default for CardConfig {
    fn default() -> Self {
        CardConfig {
            swipe_threshold: 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Simulated processing time of a submitted link, in milliseconds.
    pub delay_ms: u64,
}

impl Default for ImportConfig {
    fn default() -> Self {
        ImportConfig { delay_ms: 2000 }
    }
}

impl ImportConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Config {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_path(path: &Utf8Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&content)?;
        tracing::info!("Loaded config from {path}");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_yaml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.catalog.recent_limit, 6);
        assert_eq!(config.catalog.popular_limit, 8);
        assert!(config.menu.keep_checked);
        assert_eq!(config.import.delay(), Duration::from_secs(2));
    }

    #[test]
    fn test_partial_override() {
        let config = Config::from_yaml_str(indoc! {r#"
            catalog:
              recent_limit: 4
            card:
              swipe_threshold: 80
        "#})
        .unwrap();

        assert_eq!(config.catalog.recent_limit, 4);
        assert_eq!(config.catalog.popular_limit, 8);
        assert_eq!(config.card.swipe_threshold, 80.0);
        assert_eq!(config.menu, MenuConfig::default());
    }

    #[test]
    fn test_invalid_yaml() {
        let result = Config::from_yaml_str("catalog: [1, 2");
        assert!(matches!(result, Err(ConfigError::YamlError(_))));
    }

    #[test]
    fn test_from_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = Utf8PathBuf::from_path_buf(temp_dir.path().join("recipe-book.yaml")).unwrap();
        std::fs::write(&path, "menu:\n  keep_checked: false\n").unwrap();

        let config = Config::from_path(&path).unwrap();
        assert!(!config.menu.keep_checked);
        assert_eq!(config.menu.seed_with_first, 3);
    }

    #[test]
    fn test_missing_file() {
        let result = Config::from_path(Utf8Path::new("/nonexistent/recipe-book.yaml"));
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }
}
