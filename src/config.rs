use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("bad duration '{value}': {source}")]
    Duration {
        value: String,
        source: humantime::DurationError,
    },
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub view: ViewConfig,
}

/// Element-feed endpoints in fallback order: optional operator proxy, then
/// the public group catalog, then the per-object catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    #[serde(default)]
    pub proxy_url: Option<String>,
    #[serde(default = "default_group_url")]
    pub group_url: String,
    #[serde(default = "default_groups")]
    pub groups: Vec<String>,
    /// Per-object catalog endpoint for the last fallback step. The
    /// default reuses the primary catalog host, which only helps against
    /// group-level outages; point this at a separate mirror for real
    /// redundancy.
    #[serde(default = "default_object_url")]
    pub object_url: String,
    #[serde(default)]
    pub catalog_ids: Vec<u64>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_group_url() -> String {
    "https://celestrak.org/NORAD/elements/gp.php".to_string()
}

fn default_object_url() -> String {
    "https://celestrak.org/NORAD/elements/gp.php".to_string()
}

fn default_groups() -> Vec<String> {
    vec![
        "stations".to_string(),
        "weather".to_string(),
        "gnss".to_string(),
        "geo".to_string(),
    ]
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            proxy_url: None,
            group_url: default_group_url(),
            groups: default_groups(),
            object_url: default_object_url(),
            catalog_ids: Vec::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Camera recompute throttle windows, as humantime strings.
#[derive(Debug, Clone, Deserialize)]
pub struct ViewConfig {
    #[serde(default = "default_window")]
    pub recompute_window: String,
    #[serde(default = "default_quiet")]
    pub quiescence: String,
}

fn default_window() -> String {
    "800ms".to_string()
}

fn default_quiet() -> String {
    "400ms".to_string()
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            recompute_window: default_window(),
            quiescence: default_quiet(),
        }
    }
}

impl ViewConfig {
    pub fn recompute_window_ms(&self) -> Result<u64, ConfigError> {
        parse_ms(&self.recompute_window)
    }

    pub fn quiescence_ms(&self) -> Result<u64, ConfigError> {
        parse_ms(&self.quiescence)
    }
}

fn parse_ms(value: &str) -> Result<u64, ConfigError> {
    humantime::parse_duration(value.trim())
        .map(|d| d.as_millis() as u64)
        .map_err(|source| ConfigError::Duration {
            value: value.to_string(),
            source,
        })
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_field() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert!(config.feed.proxy_url.is_none());
        assert!(!config.feed.groups.is_empty());
        assert_eq!(config.view.recompute_window_ms().unwrap(), 800);
        assert_eq!(config.view.quiescence_ms().unwrap(), 400);
    }

    #[test]
    fn partial_yaml_overrides_defaults() {
        let yaml = "\
feed:
  proxy_url: http://localhost:9090/elements
  groups: [starlink]
view:
  recompute_window: 1s
";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            config.feed.proxy_url.as_deref(),
            Some("http://localhost:9090/elements")
        );
        assert_eq!(config.feed.groups, vec!["starlink"]);
        assert_eq!(config.view.recompute_window_ms().unwrap(), 1000);
        assert_eq!(config.view.quiescence_ms().unwrap(), 400);
    }

    #[test]
    fn object_url_overrides_independently_of_group_url() {
        let yaml = "\
feed:
  object_url: https://mirror.example.net/gp.php
";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.feed.object_url, "https://mirror.example.net/gp.php");
        assert_eq!(config.feed.group_url, default_group_url());
    }

    #[test]
    fn bad_duration_is_reported_with_the_value() {
        let view = ViewConfig {
            recompute_window: "soon".to_string(),
            quiescence: default_quiet(),
        };
        let err = view.recompute_window_ms().unwrap_err();
        assert!(err.to_string().contains("soon"));
    }
}
