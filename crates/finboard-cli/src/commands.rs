//! Command parsing for the dashboard REPL
//!
//! The day and article counts are clamped here, at the presentation
//! boundary; the facade passes whatever it receives through unchecked.

use finboard_finance::{FinanceError, Result};

/// Default price-history length in days
pub const DEFAULT_HISTORY_DAYS: u32 = 30;

/// Default number of news articles
pub const DEFAULT_NUM_ARTICLES: usize = 5;

/// Parsed command from user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Resolve a company name to a ticker symbol
    Ticker { name: String },
    /// Show a tabular price history
    Prices { ticker: String, days: u32 },
    /// Search and summarize recent news
    News { input: String, count: usize },
    /// Render the 30-day price/return chart
    Chart { ticker: String },
    /// Show help
    Help,
    /// Exit the dashboard
    Exit,
}

impl Command {
    /// Parse a command from user input
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();

        if input.is_empty() {
            return Err(FinanceError::CommandError("Empty input".to_string()));
        }
        if !input.starts_with('/') {
            return Err(FinanceError::CommandError(format!(
                "Unknown input: {input} (commands start with '/', see /help)"
            )));
        }

        let parts: Vec<&str> = input[1..].split_whitespace().collect();
        if parts.is_empty() {
            return Err(FinanceError::CommandError("Empty command".to_string()));
        }

        let cmd = parts[0].to_lowercase();
        let args = &parts[1..];

        match cmd.as_str() {
            "ticker" | "t" => {
                if args.is_empty() {
                    return Err(FinanceError::CommandError(
                        "Missing company name for ticker command".to_string(),
                    ));
                }
                Ok(Command::Ticker {
                    name: args.join(" "),
                })
            }
            "prices" | "p" => {
                let ticker = args.first().ok_or_else(|| {
                    FinanceError::CommandError("Missing ticker for prices command".to_string())
                })?;
                let days = match args.get(1) {
                    Some(raw) => raw
                        .parse::<u32>()
                        .map_err(|_| {
                            FinanceError::CommandError(format!("Invalid day count: {raw}"))
                        })?
                        .clamp(1, 365),
                    None => DEFAULT_HISTORY_DAYS,
                };
                Ok(Command::Prices {
                    ticker: ticker.to_uppercase(),
                    days,
                })
            }
            "news" | "n" => {
                if args.is_empty() {
                    return Err(FinanceError::CommandError(
                        "Missing ticker or company name for news command".to_string(),
                    ));
                }
                // a trailing number is the article count, the rest is the query
                let (query_parts, count) = match args.last().and_then(|s| s.parse::<usize>().ok()) {
                    Some(n) if args.len() > 1 => (&args[..args.len() - 1], n.clamp(1, 10)),
                    _ => (args, DEFAULT_NUM_ARTICLES),
                };
                if query_parts.is_empty() {
                    return Err(FinanceError::CommandError(
                        "Missing ticker or company name for news command".to_string(),
                    ));
                }
                Ok(Command::News {
                    input: query_parts.join(" "),
                    count,
                })
            }
            "chart" | "c" => {
                let ticker = args.first().ok_or_else(|| {
                    FinanceError::CommandError("Missing ticker for chart command".to_string())
                })?;
                Ok(Command::Chart {
                    ticker: ticker.to_uppercase(),
                })
            }
            "help" | "h" | "?" => Ok(Command::Help),
            "exit" | "quit" | "q" => Ok(Command::Exit),
            _ => Err(FinanceError::CommandError(format!(
                "Unknown command: {cmd}"
            ))),
        }
    }

    /// Get help text for all commands
    pub fn help_text() -> &'static str {
        r"
Finboard Commands
=================

  /ticker <company name>       Resolve a company name to a ticker symbol
  /prices <ticker> [days]      Price history table (days 1-365, default 30)
  /news <ticker|name> [count]  Summarized recent news (count 1-10, default 5)
  /chart <ticker>              Render the 30-day price/return chart
  /help                        Show this help
  /exit                        Leave the dashboard

Short forms: /t /p /n /c /h /q
"
    }
}
