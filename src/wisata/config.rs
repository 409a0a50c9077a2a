use crate::error::{Result, WisataError};
use crate::query::{DistanceMetric, MatchMode};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LIMIT: usize = 10;
const DEFAULT_PHOTO_URL_BASE: &str = "https://maps.googleapis.com/maps/api/place/photo";

/// Configuration for the catalog, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WisataConfig {
    /// How many records `top` returns
    #[serde(default = "default_limit")]
    pub top_limit: usize,

    /// How many records `nearest` returns
    #[serde(default = "default_limit")]
    pub nearest_limit: usize,

    /// Axis value comparison for lookups
    #[serde(default)]
    pub match_mode: MatchMode,

    /// Distance used by `nearest`
    #[serde(default)]
    pub distance_metric: DistanceMetric,

    /// Endpoint imported photo references are appended to
    #[serde(default = "default_photo_url_base")]
    pub photo_url_base: String,
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

fn default_photo_url_base() -> String {
    DEFAULT_PHOTO_URL_BASE.to_string()
}

impl Default for WisataConfig {
    fn default() -> Self {
        Self {
            top_limit: DEFAULT_LIMIT,
            nearest_limit: DEFAULT_LIMIT,
            match_mode: MatchMode::default(),
            distance_metric: DistanceMetric::default(),
            photo_url_base: default_photo_url_base(),
        }
    }
}

impl WisataConfig {
    pub const KEYS: [&'static str; 5] = [
        "top-limit",
        "nearest-limit",
        "match-mode",
        "distance-metric",
        "photo-url-base",
    ];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: WisataConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// Current value of a key, as text
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "top-limit" => Ok(self.top_limit.to_string()),
            "nearest-limit" => Ok(self.nearest_limit.to_string()),
            "match-mode" => Ok(self.match_mode.to_string()),
            "distance-metric" => Ok(self.distance_metric.to_string()),
            "photo-url-base" => Ok(self.photo_url_base.clone()),
            other => Err(unknown_key(other)),
        }
    }

    /// Parse and set a key from text
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "top-limit" => self.top_limit = parse_limit(key, value)?,
            "nearest-limit" => self.nearest_limit = parse_limit(key, value)?,
            "match-mode" => self.match_mode = value.parse()?,
            "distance-metric" => self.distance_metric = value.parse()?,
            "photo-url-base" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(WisataError::InvalidInput(
                        "photo-url-base cannot be empty".to_string(),
                    ));
                }
                self.photo_url_base = value.trim_end_matches('/').to_string();
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn parse_limit(key: &str, value: &str) -> Result<usize> {
    match value.trim().parse::<usize>() {
        Ok(0) | Err(_) => Err(WisataError::InvalidInput(format!(
            "{} must be a positive integer, got {}",
            key, value
        ))),
        Ok(n) => Ok(n),
    }
}

fn unknown_key(key: &str) -> WisataError {
    WisataError::InvalidInput(format!(
        "Unknown config key: {} (known keys: {})",
        key,
        WisataConfig::KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = WisataConfig::default();
        assert_eq!(config.top_limit, 10);
        assert_eq!(config.nearest_limit, 10);
        assert_eq!(config.match_mode, MatchMode::Exact);
        assert_eq!(config.distance_metric, DistanceMetric::Planar);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempdir().unwrap();
        let config = WisataConfig::load(dir.path().join("absent")).unwrap();
        assert_eq!(config, WisataConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();

        let mut config = WisataConfig::default();
        config.set("top-limit", "5").unwrap();
        config.set("distance-metric", "haversine").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = WisataConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.top_limit, 5);
        assert_eq!(loaded.distance_metric, DistanceMetric::Haversine);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"match_mode":"normalized"}"#).unwrap();

        let loaded = WisataConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.match_mode, MatchMode::Normalized);
        assert_eq!(loaded.nearest_limit, 10);
        assert_eq!(loaded.photo_url_base, DEFAULT_PHOTO_URL_BASE);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = WisataConfig::default();
        assert!(config.set("top-limit", "0").is_err());
        assert!(config.set("nearest-limit", "many").is_err());
        assert!(config.set("match-mode", "fuzzy").is_err());
        assert!(config.set("colour", "blue").is_err());
        assert_eq!(config, WisataConfig::default());
    }

    #[test]
    fn test_get_every_key() {
        let config = WisataConfig::default();
        for key in WisataConfig::KEYS {
            assert!(config.get(key).is_ok(), "{} should be readable", key);
        }
        assert_eq!(config.get("match-mode").unwrap(), "exact");
    }
}
