//! Finance data and summarization facade
//!
//! Four stateless operations over three injected clients: a completion
//! provider, a market-data provider, and a news provider. The facade does
//! parameter shaping and response reshaping only; every computation is
//! delegated.
//!
//! Error handling is deliberately asymmetric: ticker resolution recovers
//! locally (absent result), an unresolvable news input is a typed
//! sentinel, and price-fetch or chart-render failures propagate.

use crate::api::{MarketDataProvider, NewsProvider};
use crate::chart::{self, Chart};
use crate::config::FinanceConfig;
use crate::error::Result;
use crate::news::{NewsLookup, NewsSummary};
use crate::series::PriceSeries;
use chrono::{Duration, Utc};
use finboard_llm::{CompletionProvider, CompletionRequest};
use std::sync::Arc;
use tracing::{debug, warn};

/// History length, in days, used by the chart operation
const CHART_HISTORY_DAYS: u32 = 30;

/// Look-back window, in days, for news search
const NEWS_WINDOW_DAYS: i64 = 5;

/// Output-token bound for each per-article summary
const SUMMARY_MAX_TOKENS: usize = 100;

/// The finance facade
///
/// Stateless per call; clients are shared immutable handles, so the facade
/// itself is cheap to clone and safe to share.
#[derive(Clone)]
pub struct FinanceTools {
    llm: Arc<dyn CompletionProvider>,
    market: Arc<dyn MarketDataProvider>,
    news: Arc<dyn NewsProvider>,
    config: FinanceConfig,
}

impl FinanceTools {
    /// Create a facade from explicit client handles
    pub fn new(
        llm: Arc<dyn CompletionProvider>,
        market: Arc<dyn MarketDataProvider>,
        news: Arc<dyn NewsProvider>,
        config: FinanceConfig,
    ) -> Self {
        Self {
            llm,
            market,
            news,
            config,
        }
    }

    /// Resolve a company name to a ticker symbol via the language model
    ///
    /// The trimmed model response is returned verbatim; nothing checks that
    /// it is a real symbol. Any provider fault is logged and becomes `None`.
    pub async fn resolve_ticker(&self, company_name: &str) -> Option<String> {
        let request =
            CompletionRequest::new(format!("Find the stock ticker symbol for {company_name}."));

        match self.llm.complete(request).await {
            Ok(response) => {
                let symbol = response.text.trim().to_string();
                if symbol.is_empty() { None } else { Some(symbol) }
            }
            Err(e) => {
                warn!("ticker resolution for {company_name:?} failed: {e}");
                None
            }
        }
    }

    /// Fetch daily bars for the window `[today - history_days, today]`
    ///
    /// The day count is passed through unchecked; bounds live in the UI.
    /// Returns come back sorted ascending with derived daily returns.
    pub async fn price_history(&self, ticker: &str, history_days: u32) -> Result<PriceSeries> {
        let end = Utc::now().date_naive();
        let start = end - Duration::days(i64::from(history_days));

        let bars = self.market.daily_bars(ticker, start, end).await?;
        Ok(PriceSeries::from_bars(ticker, bars))
    }

    /// Search recent news for a ticker or company name and summarize each
    /// article with the language model
    ///
    /// The input is first probed as a literal ticker; when the probe yields
    /// no usable info it falls back to name-based resolution. When both
    /// fail the result is the `TickerNotFound` sentinel, never an error.
    /// Summaries preserve the provider's relevance order; articles with no
    /// content and no description are skipped.
    pub async fn search_and_summarize_news(
        &self,
        input: &str,
        num_articles: usize,
    ) -> Result<NewsLookup> {
        let Some(ticker) = self.establish_ticker(input).await else {
            return Ok(NewsLookup::TickerNotFound);
        };

        let to = Utc::now().date_naive();
        let from = to - Duration::days(NEWS_WINDOW_DAYS);

        let articles = self
            .news
            .relevant_articles(&ticker, from, to, num_articles)
            .await?;

        let mut summaries = Vec::with_capacity(articles.len());
        for article in articles {
            let Some(body) = article.body() else {
                debug!("skipping article with no content: {:?}", article.title);
                continue;
            };

            let request = CompletionRequest::new(format!("Summarize: {body}"))
                .max_tokens(SUMMARY_MAX_TOKENS);
            let response = self.llm.complete(request).await?;

            summaries.push(NewsSummary {
                title: article.title,
                summary: response.text.trim().to_string(),
            });
        }

        Ok(NewsLookup::Summaries(summaries))
    }

    /// Render the 30-day dual-axis price/return chart for a ticker
    ///
    /// The history length is fixed; fetch and render failures propagate.
    pub async fn plot_stock_price(&self, ticker: &str) -> Result<Chart> {
        let series = self.price_history(ticker, CHART_HISTORY_DAYS).await?;
        let png = chart::render_price_chart(
            &series,
            self.config.chart_width,
            self.config.chart_height,
        )?;

        Ok(Chart {
            ticker: series.ticker,
            png,
            width: self.config.chart_width,
            height: self.config.chart_height,
        })
    }

    /// Establish a ticker for free-form input: literal probe first, then
    /// name-based resolution. A probe transport fault counts as "no usable
    /// info" and falls through.
    async fn establish_ticker(&self, input: &str) -> Option<String> {
        match self.market.probe_ticker(input).await {
            Ok(true) => Some(input.to_string()),
            Ok(false) => self.resolve_ticker(input).await,
            Err(e) => {
                debug!("ticker probe for {input:?} failed: {e}");
                self.resolve_ticker(input).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Article, ArticleSource, MockMarketDataProvider, MockNewsProvider};
    use crate::error::FinanceError;
    use crate::news::TICKER_NOT_FOUND_MESSAGE;
    use crate::series::PriceBar;
    use async_trait::async_trait;
    use chrono::{Datelike, NaiveDate};
    use finboard_llm::{CompletionError, CompletionResponse, TokenUsage};
    use mockall::mock;

    fn window_ending_today(days: i64) -> (NaiveDate, NaiveDate) {
        let end = Utc::now().date_naive();
        (end - Duration::days(days), end)
    }

    mock! {
        Llm {}

        #[async_trait]
        impl CompletionProvider for Llm {
            async fn complete(
                &self,
                request: CompletionRequest,
            ) -> finboard_llm::Result<CompletionResponse>;

            fn name(&self) -> &'static str;
        }
    }

    fn completion(text: &str) -> CompletionResponse {
        CompletionResponse {
            text: text.to_string(),
            usage: TokenUsage::default(),
        }
    }

    fn article(title: &str, content: Option<&str>, description: Option<&str>) -> Article {
        Article {
            source: ArticleSource {
                id: None,
                name: "Example Wire".to_string(),
            },
            author: None,
            title: title.to_string(),
            description: description.map(str::to_string),
            url: "https://example.com/a".to_string(),
            url_to_image: None,
            published_at: Utc::now(),
            content: content.map(str::to_string),
        }
    }

    fn bar(day: u32, close: f64) -> PriceBar {
        let date = NaiveDate::from_ymd_opt(2026, 7, day).unwrap();
        PriceBar::new(date, close, close, close, close, 1_000)
    }

    fn facade(
        llm: MockLlm,
        market: MockMarketDataProvider,
        news: MockNewsProvider,
    ) -> FinanceTools {
        FinanceTools::new(
            Arc::new(llm),
            Arc::new(market),
            Arc::new(news),
            FinanceConfig::default(),
        )
    }

    #[tokio::test]
    async fn test_resolve_ticker_sends_expected_prompt_and_trims() {
        let mut llm = MockLlm::new();
        llm.expect_complete()
            .withf(|req| {
                req.prompt == "Find the stock ticker symbol for Apple Inc."
                    && req.max_tokens.is_none()
            })
            .times(1)
            .returning(|_| Ok(completion("  AAPL\n")));

        let tools = facade(llm, MockMarketDataProvider::new(), MockNewsProvider::new());
        assert_eq!(
            tools.resolve_ticker("Apple Inc.").await,
            Some("AAPL".to_string())
        );
    }

    #[tokio::test]
    async fn test_resolve_ticker_recovers_from_provider_fault() {
        let mut llm = MockLlm::new();
        llm.expect_complete()
            .returning(|_| Err(CompletionError::RequestFailed("boom".to_string())));

        let tools = facade(llm, MockMarketDataProvider::new(), MockNewsProvider::new());
        assert_eq!(tools.resolve_ticker("Apple Inc.").await, None);
    }

    #[tokio::test]
    async fn test_resolve_ticker_treats_empty_response_as_absent() {
        let mut llm = MockLlm::new();
        llm.expect_complete().returning(|_| Ok(completion("   \n")));

        let tools = facade(llm, MockMarketDataProvider::new(), MockNewsProvider::new());
        assert_eq!(tools.resolve_ticker("Apple Inc.").await, None);
    }

    #[tokio::test]
    async fn test_price_history_requests_exact_window() {
        let (start, end) = window_ending_today(7);

        let mut market = MockMarketDataProvider::new();
        market
            .expect_daily_bars()
            .withf(move |ticker, s, e| ticker == "AAPL" && *s == start && *e == end)
            .times(1)
            .returning(|_, _, _| Ok(vec![bar(3, 100.0), bar(1, 90.0), bar(2, 95.0)]));

        let tools = facade(MockLlm::new(), market, MockNewsProvider::new());
        let series = tools.price_history("AAPL", 7).await.unwrap();

        assert_eq!(series.ticker, "AAPL");
        assert!(series.len() <= 7);
        let dates: Vec<_> = series.bars.iter().map(|b| b.date.day()).collect();
        assert_eq!(dates, vec![1, 2, 3]);
        assert_eq!(series.bars[0].daily_return, None);
        assert!(series.bars[1].daily_return.is_some());
    }

    #[tokio::test]
    async fn test_price_history_passes_empty_series_through() {
        let mut market = MockMarketDataProvider::new();
        market
            .expect_daily_bars()
            .returning(|_, _, _| Ok(Vec::new()));

        let tools = facade(MockLlm::new(), market, MockNewsProvider::new());
        let series = tools.price_history("UNKNOWN", 30).await.unwrap();
        assert!(series.is_empty());
    }

    #[tokio::test]
    async fn test_price_history_propagates_fetch_failure() {
        let mut market = MockMarketDataProvider::new();
        market.expect_daily_bars().returning(|_, _, _| {
            Err(FinanceError::YahooFinanceError("connection reset".to_string()))
        });

        let tools = facade(MockLlm::new(), market, MockNewsProvider::new());
        let result = tools.price_history("AAPL", 30).await;
        assert!(matches!(result, Err(FinanceError::YahooFinanceError(_))));
    }

    #[tokio::test]
    async fn test_news_sentinel_when_probe_and_resolution_fail() {
        let mut market = MockMarketDataProvider::new();
        market
            .expect_probe_ticker()
            .withf(|ticker| ticker == "totally-invalid-xyz")
            .times(1)
            .returning(|_| Ok(false));

        let mut llm = MockLlm::new();
        llm.expect_complete()
            .times(1)
            .returning(|_| Err(CompletionError::RequestFailed("boom".to_string())));

        let tools = facade(llm, market, MockNewsProvider::new());
        let lookup = tools
            .search_and_summarize_news("totally-invalid-xyz", 5)
            .await
            .unwrap();

        assert_eq!(lookup, NewsLookup::TickerNotFound);
        assert_eq!(lookup.lines(), vec![TICKER_NOT_FOUND_MESSAGE.to_string()]);
    }

    #[tokio::test]
    async fn test_news_probe_error_falls_back_to_resolution() {
        let mut market = MockMarketDataProvider::new();
        market
            .expect_probe_ticker()
            .returning(|_| Err(FinanceError::ApiError("probe down".to_string())));

        let mut llm = MockLlm::new();
        // the fallback resolution succeeds, then one article is summarized
        llm.expect_complete()
            .withf(|req| req.prompt.starts_with("Find the stock ticker symbol for"))
            .times(1)
            .returning(|_| Ok(completion("AAPL")));
        llm.expect_complete()
            .withf(|req| req.prompt.starts_with("Summarize: "))
            .times(1)
            .returning(|_| Ok(completion("summary")));

        let mut news = MockNewsProvider::new();
        news.expect_relevant_articles()
            .withf(|query, _, _, _| query == "AAPL")
            .times(1)
            .returning(|_, _, _, _| Ok(vec![article("Title", Some("body"), None)]));

        let tools = facade(llm, market, news);
        let lookup = tools.search_and_summarize_news("Apple Inc.", 5).await.unwrap();
        assert_eq!(
            lookup,
            NewsLookup::Summaries(vec![NewsSummary {
                title: "Title".to_string(),
                summary: "summary".to_string(),
            }])
        );
    }

    #[tokio::test]
    async fn test_news_requests_five_day_window_and_page_size() {
        let (from, to) = window_ending_today(5);

        let mut market = MockMarketDataProvider::new();
        market.expect_probe_ticker().returning(|_| Ok(true));

        let mut news = MockNewsProvider::new();
        news.expect_relevant_articles()
            .withf(move |query, f, t, page_size| {
                query == "AAPL" && *f == from && *t == to && *page_size == 3
            })
            .times(1)
            .returning(|_, _, _, _| Ok(Vec::new()));

        let tools = facade(MockLlm::new(), market, news);
        let lookup = tools.search_and_summarize_news("AAPL", 3).await.unwrap();
        assert_eq!(lookup, NewsLookup::Summaries(vec![]));
    }

    #[tokio::test]
    async fn test_news_summarizes_in_relevance_order_with_token_cap() {
        let mut market = MockMarketDataProvider::new();
        market.expect_probe_ticker().returning(|_| Ok(true));

        let mut news = MockNewsProvider::new();
        news.expect_relevant_articles().returning(|_, _, _, _| {
            Ok(vec![
                article("First", Some("alpha"), None),
                article("Second", Some("beta"), None),
            ])
        });

        let mut llm = MockLlm::new();
        llm.expect_complete()
            .withf(|req| {
                req.prompt.starts_with("Summarize: ") && req.max_tokens == Some(100)
            })
            .times(2)
            .returning(|req| Ok(completion(&format!("echo {}", req.prompt))));

        let tools = facade(llm, market, news);
        let lookup = tools.search_and_summarize_news("AAPL", 2).await.unwrap();

        let NewsLookup::Summaries(summaries) = lookup else {
            panic!("expected summaries");
        };
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].title, "First");
        assert_eq!(summaries[0].summary, "echo Summarize: alpha");
        assert_eq!(summaries[1].title, "Second");
        assert_eq!(summaries[1].summary, "echo Summarize: beta");
    }

    #[tokio::test]
    async fn test_news_skips_articles_without_text() {
        let mut market = MockMarketDataProvider::new();
        market.expect_probe_ticker().returning(|_| Ok(true));

        let mut news = MockNewsProvider::new();
        news.expect_relevant_articles().returning(|_, _, _, _| {
            Ok(vec![
                article("Has content", Some("alpha"), None),
                article("Empty", None, None),
                article("Description only", None, Some("gamma")),
            ])
        });

        let mut llm = MockLlm::new();
        llm.expect_complete()
            .times(2)
            .returning(|req| Ok(completion(&format!("echo {}", req.prompt))));

        let tools = facade(llm, market, news);
        let lookup = tools.search_and_summarize_news("AAPL", 3).await.unwrap();

        let NewsLookup::Summaries(summaries) = lookup else {
            panic!("expected summaries");
        };
        let titles: Vec<_> = summaries.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Has content", "Description only"]);
        assert_eq!(summaries[1].summary, "echo Summarize: gamma");
    }

    #[tokio::test]
    async fn test_news_propagates_search_failure() {
        let mut market = MockMarketDataProvider::new();
        market.expect_probe_ticker().returning(|_| Ok(true));

        let mut news = MockNewsProvider::new();
        news.expect_relevant_articles()
            .returning(|_, _, _, _| Err(FinanceError::NewsApiError("quota".to_string())));

        let tools = facade(MockLlm::new(), market, news);
        let result = tools.search_and_summarize_news("AAPL", 5).await;
        assert!(matches!(result, Err(FinanceError::NewsApiError(_))));
    }

    #[tokio::test]
    async fn test_plot_always_requests_thirty_days() {
        let (start, end) = window_ending_today(30);

        let mut market = MockMarketDataProvider::new();
        market
            .expect_daily_bars()
            .withf(move |ticker, s, e| ticker == "AAPL" && *s == start && *e == end)
            .times(1)
            .returning(|_, _, _| Ok(vec![bar(1, 100.0)]));

        let tools = facade(MockLlm::new(), market, MockNewsProvider::new());
        // a single bar is too little to chart, which is all this test needs:
        // the window expectation above is the real assertion
        let result = tools.plot_stock_price("AAPL").await;
        assert!(matches!(result, Err(FinanceError::ChartError(_))));
    }

    #[tokio::test]
    async fn test_plot_propagates_fetch_failure() {
        let mut market = MockMarketDataProvider::new();
        market
            .expect_daily_bars()
            .returning(|_, _, _| Err(FinanceError::YahooFinanceError("down".to_string())));

        let tools = facade(MockLlm::new(), market, MockNewsProvider::new());
        let result = tools.plot_stock_price("AAPL").await;
        assert!(matches!(result, Err(FinanceError::YahooFinanceError(_))));
    }
}
