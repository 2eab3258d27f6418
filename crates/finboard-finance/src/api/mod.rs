//! External data provider clients and their seams
//!
//! The facade talks to the market-data and news providers through the
//! traits below so tests can substitute deterministic stubs.

pub mod newsapi;
pub mod yahoo;

pub use newsapi::{Article, ArticleSource, NewsApiClient};
pub use yahoo::YahooMarketData;

use crate::error::Result;
use crate::series::PriceBar;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Daily price bars and ticker metadata from a market-data provider
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Fetch daily bars for the inclusive date window `[start, end]`.
    /// A ticker the provider does not know yields an empty list, not an
    /// error; transport faults are errors.
    async fn daily_bars(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PriceBar>>;

    /// Probe whether the provider has usable metadata for the ticker
    async fn probe_ticker(&self, ticker: &str) -> Result<bool>;
}

/// Keyword-searchable news articles from a news provider
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Fetch up to `page_size` articles for the query within the date
    /// window, ordered by relevance.
    async fn relevant_articles(
        &self,
        query: &str,
        from: NaiveDate,
        to: NaiveDate,
        page_size: usize,
    ) -> Result<Vec<Article>>;
}
