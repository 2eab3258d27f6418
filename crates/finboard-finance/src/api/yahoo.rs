//! Yahoo Finance market-data client

use crate::api::MarketDataProvider;
use crate::error::{FinanceError, Result};
use crate::series::PriceBar;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use time::OffsetDateTime;
use tracing::debug;
use yahoo_finance_api as yahoo;

/// Yahoo Finance client; needs no API key
pub struct YahooMarketData {}

impl YahooMarketData {
    /// Create a new Yahoo Finance client
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for YahooMarketData {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a calendar date to the provider's timestamp type
fn to_provider_timestamp(date: NaiveDate, time: NaiveTime) -> Result<OffsetDateTime> {
    let ts = date.and_time(time).and_utc().timestamp();
    OffsetDateTime::from_unix_timestamp(ts)
        .map_err(|e| FinanceError::YahooFinanceError(format!("Invalid timestamp: {e}")))
}

#[async_trait]
impl MarketDataProvider for YahooMarketData {
    async fn daily_bars(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PriceBar>> {
        let provider = yahoo::YahooConnector::new()
            .map_err(|e| FinanceError::YahooFinanceError(e.to_string()))?;

        // end of day so the window is inclusive of `end`
        let end_time = NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN);
        let start_odt = to_provider_timestamp(start, NaiveTime::MIN)?;
        let end_odt = to_provider_timestamp(end, end_time)?;

        let response = provider
            .get_quote_history(ticker, start_odt, end_odt)
            .await
            .map_err(|e| FinanceError::YahooFinanceError(e.to_string()))?;

        let quotes = match response.quotes() {
            Ok(quotes) => quotes,
            Err(e) => {
                // no bars in the window reads as an empty series
                debug!("no quotes for {ticker}: {e}");
                return Ok(Vec::new());
            }
        };

        Ok(quotes
            .iter()
            .map(|q| PriceBar {
                date: DateTime::from_timestamp(q.timestamp as i64, 0)
                    .unwrap_or_else(Utc::now)
                    .date_naive(),
                open: q.open,
                high: q.high,
                low: q.low,
                close: q.close,
                volume: q.volume,
                daily_return: None,
            })
            .collect())
    }

    async fn probe_ticker(&self, ticker: &str) -> Result<bool> {
        let provider = match yahoo::YahooConnector::new() {
            Ok(provider) => provider,
            Err(e) => {
                debug!("ticker probe setup failed for {ticker}: {e}");
                return Ok(false);
            }
        };

        // a provider-level failure means "no usable info", not an error
        match provider.get_latest_quotes(ticker, "1d").await {
            Ok(response) => Ok(response.last_quote().is_ok()),
            Err(e) => {
                debug!("ticker probe failed for {ticker}: {e}");
                Ok(false)
            }
        }
    }
}
