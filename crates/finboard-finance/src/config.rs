//! Configuration for the finance facade

use crate::error::{FinanceError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_CHART_WIDTH: u32 = 900;
const DEFAULT_CHART_HEIGHT: u32 = 500;

/// Configuration for the finance facade
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinanceConfig {
    /// NewsAPI.org API key
    pub news_api_key: String,

    /// Request timeout for HTTP clients
    pub request_timeout: Duration,

    /// Rendered chart width in pixels
    pub chart_width: u32,

    /// Rendered chart height in pixels
    pub chart_height: u32,
}

impl Default for FinanceConfig {
    fn default() -> Self {
        Self {
            news_api_key: String::new(),
            request_timeout: Duration::from_secs(30),
            chart_width: DEFAULT_CHART_WIDTH,
            chart_height: DEFAULT_CHART_HEIGHT,
        }
    }
}

impl FinanceConfig {
    /// Create a new configuration builder
    pub fn builder() -> FinanceConfigBuilder {
        FinanceConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.news_api_key.is_empty() {
            return Err(FinanceError::ConfigError(
                "NewsAPI key must not be empty".to_string(),
            ));
        }
        if self.chart_width == 0 || self.chart_height == 0 {
            return Err(FinanceError::ConfigError(
                "Chart dimensions must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for FinanceConfig
#[derive(Debug, Default)]
pub struct FinanceConfigBuilder {
    news_api_key: Option<String>,
    request_timeout: Option<Duration>,
    chart_width: Option<u32>,
    chart_height: Option<u32>,
}

impl FinanceConfigBuilder {
    /// Set the NewsAPI key
    pub fn news_api_key(mut self, key: impl Into<String>) -> Self {
        self.news_api_key = Some(key.into());
        self
    }

    /// Load the NewsAPI key from the `NEWS_API_KEY` environment variable
    pub fn with_env_news_key(mut self) -> Self {
        if let Ok(key) = std::env::var("NEWS_API_KEY") {
            self.news_api_key = Some(key);
        }
        self
    }

    /// Set the request timeout
    pub fn request_timeout(mut self, duration: Duration) -> Self {
        self.request_timeout = Some(duration);
        self
    }

    /// Set the rendered chart dimensions
    pub fn chart_size(mut self, width: u32, height: u32) -> Self {
        self.chart_width = Some(width);
        self.chart_height = Some(height);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<FinanceConfig> {
        let defaults = FinanceConfig::default();

        let config = FinanceConfig {
            news_api_key: self.news_api_key.unwrap_or(defaults.news_api_key),
            request_timeout: self.request_timeout.unwrap_or(defaults.request_timeout),
            chart_width: self.chart_width.unwrap_or(defaults.chart_width),
            chart_height: self.chart_height.unwrap_or(defaults.chart_height),
        };

        config.validate()?;
        Ok(config)
    }
}
