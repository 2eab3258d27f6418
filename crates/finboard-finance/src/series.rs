//! Daily price series model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One daily OHLCV bar with its derived close-to-close return
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
    /// Percent change versus the prior bar's close; absent on the first bar
    pub daily_return: Option<f64>,
}

impl PriceBar {
    /// Create a bar without a derived return
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: u64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
            daily_return: None,
        }
    }
}

/// An ordered series of daily bars for one ticker
///
/// Produced fresh per call and never cached; ownership passes to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceSeries {
    pub ticker: String,
    pub bars: Vec<PriceBar>,
}

impl PriceSeries {
    /// Build a series from raw bars: sorts ascending by date and fills the
    /// daily-return column. The first bar's return stays absent.
    pub fn from_bars(ticker: impl Into<String>, mut bars: Vec<PriceBar>) -> Self {
        bars.sort_by_key(|b| b.date);

        let mut prev_close: Option<f64> = None;
        for bar in &mut bars {
            bar.daily_return = prev_close
                .filter(|prev| *prev != 0.0)
                .map(|prev| (bar.close - prev) / prev * 100.0);
            prev_close = Some(bar.close);
        }

        Self {
            ticker: ticker.into(),
            bars,
        }
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}
