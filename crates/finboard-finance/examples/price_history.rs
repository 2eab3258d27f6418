//! Fetch a week of AAPL bars straight from the market-data client
//!
//! ```bash
//! cargo run -p finboard-finance --example price_history
//! ```

use chrono::{Duration, Utc};
use finboard_finance::{MarketDataProvider, PriceSeries, YahooMarketData};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = YahooMarketData::new();

    let end = Utc::now().date_naive();
    let start = end - Duration::days(7);
    let bars = client.daily_bars("AAPL", start, end).await?;
    let series = PriceSeries::from_bars("AAPL", bars);

    for bar in &series.bars {
        println!(
            "{}  close {:>8.2}  return {}",
            bar.date,
            bar.close,
            bar.daily_return
                .map_or_else(|| "-".to_string(), |r| format!("{r:+.2}%"))
        );
    }

    Ok(())
}
