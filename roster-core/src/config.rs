//! Site configuration
//!
//! Settings are compiled in from `config/site.yaml`. A broken file is logged
//! and replaced by defaults rather than stopping the site.

use crate::images::{ARTIST_PLACEHOLDER, RELEASE_PLACEHOLDER};
use crate::listing::SKELETON_COUNT;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

const SITE_YAML: &str = include_str!("../config/site.yaml");

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid site config: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Configuration error: {0}")]
    Invalid(String),
}

fn default_site_title() -> String {
    "Roster".to_string()
}

fn default_artist_placeholder() -> String {
    ARTIST_PLACEHOLDER.to_string()
}

fn default_release_placeholder() -> String {
    RELEASE_PLACEHOLDER.to_string()
}

fn default_skeleton_count() -> usize {
    SKELETON_COUNT
}

fn default_volume() -> f32 {
    0.8
}

fn default_poll_interval() -> u64 {
    250
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_site_title")]
    pub site_title: String,
    #[serde(default = "default_artist_placeholder")]
    pub artist_placeholder: String,
    #[serde(default = "default_release_placeholder")]
    pub release_placeholder: String,
    #[serde(default = "default_skeleton_count")]
    pub skeleton_count: usize,
    #[serde(default = "default_volume")]
    pub default_volume: f32,
    /// How often the player polls the audio position while playing
    #[serde(default = "default_poll_interval")]
    pub progress_poll_interval_ms: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_title: default_site_title(),
            artist_placeholder: default_artist_placeholder(),
            release_placeholder: default_release_placeholder(),
            skeleton_count: default_skeleton_count(),
            default_volume: default_volume(),
            progress_poll_interval_ms: default_poll_interval(),
        }
    }
}

impl SiteConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_yaml::from_str(yaml)?;
        if config.progress_poll_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "progress_poll_interval_ms must be positive".to_string(),
            ));
        }
        Ok(config)
    }

    /// The compiled-in config, or defaults if it does not parse
    pub fn load_embedded() -> Self {
        Self::from_yaml(SITE_YAML).unwrap_or_else(|e| {
            warn!("Falling back to default site config: {e}");
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = SiteConfig::from_yaml(SITE_YAML).unwrap();
        assert_eq!(config.skeleton_count, 6);
        assert_eq!(config.artist_placeholder, "/images/placeholder-artist.jpg");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = SiteConfig::from_yaml("site_title: Test Label\n").unwrap();
        assert_eq!(config.site_title, "Test Label");
        assert_eq!(config.progress_poll_interval_ms, 250);
    }

    #[test]
    fn test_zero_interval_rejected() {
        let result = SiteConfig::from_yaml("progress_poll_interval_ms: 0\n");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        assert!(matches!(
            SiteConfig::from_yaml("skeleton_count: [oops"),
            Err(ConfigError::Parse(_))
        ));
    }
}
