use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use std::{fs, path::PathBuf};
use tracing::debug;

pub const DEFAULT_FEED_URL: &str = "https://interview.switcheo.com/prices.json";
const DEFAULT_DELAY_MS: u64 = 1000;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FeedConfig {
    pub url: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        FeedConfig {
            url: DEFAULT_FEED_URL.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SwapConfig {
    /// Simulated wait before a conversion resolves.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

fn default_delay_ms() -> u64 {
    DEFAULT_DELAY_MS
}

impl SwapConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for SwapConfig {
    fn default() -> Self {
        SwapConfig {
            delay_ms: DEFAULT_DELAY_MS,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub swap: SwapConfig,
}

impl AppConfig {
    /// Loads the config from the default location, falling back to defaults
    /// when no file has been created yet.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!("No config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("org", "swapcalc", "swapcalc")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
feed:
  url: "http://localhost:8080/prices.json"
swap:
  delay_ms: 250
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.feed.url, "http://localhost:8080/prices.json");
        assert_eq!(config.swap.delay_ms, 250);
        assert_eq!(config.swap.delay(), Duration::from_millis(250));
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config: AppConfig = serde_yaml::from_str("swap: {}").expect("Failed to deserialize");
        assert_eq!(config.feed.url, DEFAULT_FEED_URL);
        assert_eq!(config.swap.delay_ms, 1000);
    }

    #[test]
    fn test_load_from_missing_path_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = AppConfig::load_from_path(dir.path().join("missing.yaml"));
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to read config file")
        );
    }
}
