//! News summarization result types

use serde::{Deserialize, Serialize};

/// Fixed message returned when no ticker can be established for an input.
/// Surfaced as a one-element result, never as an empty list or an error.
pub const TICKER_NOT_FOUND_MESSAGE: &str = "Unable to find stock ticker for the provided input";

/// An article title paired with its model-generated summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsSummary {
    pub title: String,
    pub summary: String,
}

/// Outcome of a news search-and-summarize call
///
/// `TickerNotFound` means neither the direct-ticker probe nor name-based
/// resolution produced a symbol. It is a non-result, distinct from a
/// successful lookup with zero articles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewsLookup {
    /// Summaries in the news provider's relevance order
    Summaries(Vec<NewsSummary>),
    /// No ticker could be established for the input
    TickerNotFound,
}

impl NewsLookup {
    /// Render for display: one "title\nsummary" block per article, or
    /// exactly one sentinel line when no ticker was found.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::Summaries(summaries) => summaries
                .iter()
                .map(|s| format!("{}\n{}", s.title, s.summary))
                .collect(),
            Self::TickerNotFound => vec![TICKER_NOT_FOUND_MESSAGE.to_string()],
        }
    }
}
