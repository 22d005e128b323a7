//! Console logging setup.
//!
//! ```ignore
//! use guide_core::logging::LoggingBuilder;
//!
//! LoggingBuilder::new()
//!     .with_filter("guide_core=debug")
//!     .init()?;
//! ```
//!
//! `RUST_LOG`, when set, wins over the configured filter.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{GuideError, GuideResult};

/// Filter used when neither `RUST_LOG` nor the config sets one
pub const DEFAULT_FILTER: &str = "campaign_guide=info,guide_core=info,guide_ui=info";

/// Builder for the global tracing subscriber
#[derive(Debug, Clone)]
pub struct LoggingBuilder {
    filter: Option<String>,
    ansi: bool,
    respect_env: bool,
}

impl Default for LoggingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggingBuilder {
    pub fn new() -> Self {
        Self {
            filter: None,
            ansi: true,
            respect_env: true,
        }
    }

    /// Set the filter directives (e.g. "campaign_guide=info,guide_core=debug").
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Disable ANSI colors.
    pub fn no_ansi(mut self) -> Self {
        self.ansi = false;
        self
    }

    /// Ignore `RUST_LOG`.
    pub fn ignore_env(mut self) -> Self {
        self.respect_env = false;
        self
    }

    /// Resolve the effective filter.
    pub fn env_filter(&self) -> GuideResult<EnvFilter> {
        if self.respect_env {
            if let Ok(filter) = EnvFilter::try_from_default_env() {
                return Ok(filter);
            }
        }
        let directives = self.filter.as_deref().unwrap_or(DEFAULT_FILTER);
        EnvFilter::try_new(directives)
            .map_err(|e| GuideError::Config(format!("invalid log filter {:?}: {}", directives, e)))
    }

    /// Install as the global subscriber.
    pub fn init(self) -> GuideResult<()> {
        let filter = self.env_filter()?;
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_ansi(self.ansi))
            .try_init()
            .map_err(|e| GuideError::Config(format!("logging already initialized: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_parses() {
        let filter = LoggingBuilder::new().ignore_env().env_filter().unwrap();
        let rendered = filter.to_string();
        for directive in DEFAULT_FILTER.split(',') {
            assert!(rendered.contains(directive), "{rendered} lacks {directive}");
        }
    }

    #[test]
    fn custom_filter_is_used() {
        let filter = LoggingBuilder::new()
            .ignore_env()
            .with_filter("guide_core=trace")
            .env_filter()
            .unwrap();
        assert!(filter.to_string().contains("guide_core=trace"));
    }

    #[test]
    fn bad_filter_is_a_config_error() {
        let err = LoggingBuilder::new()
            .ignore_env()
            .with_filter("guide_core=shouting")
            .env_filter()
            .unwrap_err();
        assert!(matches!(err, GuideError::Config(_)));
    }
}
