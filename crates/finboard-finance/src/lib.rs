//! Finance data and summarization facade
//!
//! This crate wires three external services behind one thin facade:
//!
//! - Ticker resolution and article summarization via a text-completion
//!   provider (`finboard-llm`)
//! - Daily OHLCV history and ticker probes via Yahoo Finance
//! - Relevance-ranked article search via NewsAPI.org
//!
//! plus a rendered dual-axis price/return chart. Each operation is
//! stateless per call: nothing is cached, retried, or persisted.
//!
//! # Example
//!
//! ```rust,ignore
//! use finboard_finance::{FinanceConfig, FinanceTools, NewsApiClient, YahooMarketData};
//! use finboard_llm::providers::OpenAiProvider;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = FinanceConfig::builder().with_env_news_key().build()?;
//!     let tools = FinanceTools::new(
//!         Arc::new(OpenAiProvider::from_env()?),
//!         Arc::new(YahooMarketData::new()),
//!         Arc::new(NewsApiClient::new(config.news_api_key.clone(), config.request_timeout)?),
//!         config,
//!     );
//!
//!     let series = tools.price_history("AAPL", 7).await?;
//!     println!("{} bars", series.len());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod chart;
pub mod config;
pub mod error;
pub mod facade;
pub mod news;
pub mod series;

// Re-export main types for convenience
pub use api::{Article, ArticleSource, MarketDataProvider, NewsApiClient, NewsProvider, YahooMarketData};
pub use chart::Chart;
pub use config::FinanceConfig;
pub use error::{FinanceError, Result};
pub use facade::FinanceTools;
pub use news::{NewsLookup, NewsSummary, TICKER_NOT_FOUND_MESSAGE};
pub use series::{PriceBar, PriceSeries};
