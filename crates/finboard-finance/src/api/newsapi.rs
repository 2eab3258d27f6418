//! NewsAPI.org client for relevance-ranked article search

use crate::api::NewsProvider;
use crate::error::{FinanceError, Result};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_NEWS_API_BASE: &str = "https://newsapi.org/v2";

/// One article from the news provider
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub source: ArticleSource,
    pub author: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub url_to_image: Option<String>,
    pub published_at: DateTime<Utc>,
    pub content: Option<String>,
}

/// Publishing outlet of an article
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleSource {
    pub id: Option<String>,
    pub name: String,
}

impl Article {
    /// Text worth summarizing: the content field, falling back to the
    /// description. `None` when neither carries text.
    pub fn body(&self) -> Option<&str> {
        self.content
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .or_else(|| self.description.as_deref().filter(|s| !s.trim().is_empty()))
    }
}

/// NewsAPI.org client
pub struct NewsApiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl NewsApiClient {
    /// Create a new client with the given API key and request timeout
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: DEFAULT_NEWS_API_BASE.to_string(),
        })
    }

    /// Override the API base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[derive(Debug, Deserialize)]
struct EverythingResponse {
    #[allow(dead_code)]
    status: String,
    articles: Vec<Article>,
}

#[async_trait]
impl NewsProvider for NewsApiClient {
    async fn relevant_articles(
        &self,
        query: &str,
        from: NaiveDate,
        to: NaiveDate,
        page_size: usize,
    ) -> Result<Vec<Article>> {
        let url = format!("{}/everything", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", query),
                ("from", &from.to_string()),
                ("to", &to.to_string()),
                ("language", "en"),
                ("sortBy", "relevancy"),
                ("pageSize", &page_size.to_string()),
            ])
            .header("X-Api-Key", &self.api_key)
            .send()
            .await
            .map_err(|e| FinanceError::NewsApiError(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(FinanceError::NewsApiError(format!(
                "NewsAPI error {status}: {body}"
            )));
        }

        let envelope = response
            .json::<EverythingResponse>()
            .await
            .map_err(|e| FinanceError::NewsApiError(format!("Failed to parse response: {e}")))?;

        Ok(envelope.articles)
    }
}
