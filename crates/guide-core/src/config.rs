//! Application configuration.
//!
//! Read from JSON. Every field has a default, so a config file only needs
//! the settings it changes:
//!
//! ```json
//! { "filter": { "min_query_len": 2 }, "show_secrets": true }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GuideError, GuideResult};
use crate::filter::FilterConfig;
use crate::logging::DEFAULT_FILTER;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuideConfig {
    /// Search weights and activation threshold
    pub filter: FilterConfig,
    /// tracing-subscriber filter directives
    pub log_filter: String,
    /// Campaign JSON to load instead of the bundled sample
    pub data_path: Option<PathBuf>,
    /// Start with GM-only secrets visible
    pub show_secrets: bool,
    pub window_width: f64,
    pub window_height: f64,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            filter: FilterConfig::default(),
            log_filter: DEFAULT_FILTER.to_string(),
            data_path: None,
            show_secrets: false,
            window_width: 1000.0,
            window_height: 900.0,
        }
    }
}

impl GuideConfig {
    /// `<config dir>/campaign-guide/config.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("campaign-guide").join("config.json"))
    }

    pub fn load(path: impl AsRef<Path>) -> GuideResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config: GuideConfig = serde_json::from_str(&json)?;
        config.validate()?;
        tracing::debug!("loaded config from {:?}", path);
        Ok(config)
    }

    /// Load `explicit` if given, else the default path if it exists, else
    /// defaults. An explicit path that cannot be read is an error.
    pub fn load_or_default(explicit: Option<&Path>) -> GuideResult<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> GuideResult<()> {
        if !(self.window_width > 0.0 && self.window_height > 0.0) {
            return Err(GuideError::Config(format!(
                "window size must be positive, got {}x{}",
                self.window_width, self.window_height
            )));
        }
        if self.filter.min_query_len == 0 {
            return Err(GuideError::Config(
                "filter.min_query_len must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn partial_file_keeps_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        std::fs::write(&path, r#"{"show_secrets": true, "filter": {"min_query_len": 4}}"#).unwrap();

        let config = GuideConfig::load(&path).unwrap();
        assert!(config.show_secrets);
        assert_eq!(config.filter.min_query_len, 4);
        assert_eq!(config.filter.weights.name, 4);
        assert_eq!(config.log_filter, DEFAULT_FILTER);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let err = GuideConfig::load_or_default(Some(temp.path().join("nope.json").as_path())).unwrap_err();
        assert!(matches!(err, GuideError::Io(_)));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");

        std::fs::write(&path, r#"{"window_width": 0}"#).unwrap();
        assert!(matches!(GuideConfig::load(&path), Err(GuideError::Config(_))));

        std::fs::write(&path, r#"{"filter": {"min_query_len": 0}}"#).unwrap();
        assert!(matches!(GuideConfig::load(&path), Err(GuideError::Config(_))));

        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(GuideConfig::load(&path), Err(GuideError::Parse(_))));
    }

    #[test]
    fn extreme_weights_load_and_filter_safely() {
        use crate::filter::filter_records_with;
        use crate::types::Npc;

        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        std::fs::write(
            &path,
            r#"{"filter": {"weights": {"name": 4294967295, "location": 4294967295}}}"#,
        )
        .unwrap();
        let config = GuideConfig::load(&path).unwrap();

        let records = vec![Npc {
            key: "harbor-hal".into(),
            name: "Harbor Hal".to_string(),
            location: Some("Harbor District".to_string()),
            ..Default::default()
        }];
        let matches = filter_records_with(&records, "harbor", &config.filter.weights);
        assert_eq!(matches[0].score, u32::MAX);
    }

    #[test]
    fn default_is_valid() {
        GuideConfig::default().validate().unwrap();
    }
}
