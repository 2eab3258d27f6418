//! Error types for finance facade operations

use thiserror::Error;

/// Finance facade specific errors
#[derive(Debug, Error)]
pub enum FinanceError {
    /// API request failed
    #[error("API error: {0}")]
    ApiError(String),

    /// Yahoo Finance API error
    #[error("Yahoo Finance error: {0}")]
    YahooFinanceError(String),

    /// News search API error
    #[error("News API error: {0}")]
    NewsApiError(String),

    /// Completion provider error
    #[error("Completion error: {0}")]
    CompletionError(#[from] finboard_llm::CompletionError),

    /// Chart rendering error
    #[error("Chart error: {0}")]
    ChartError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Malformed user command
    #[error("Command error: {0}")]
    CommandError(String),

    /// Network or HTTP error
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for finance operations
pub type Result<T> = std::result::Result<T, FinanceError>;
