//! Finboard dashboard CLI
//!
//! An interactive terminal dashboard for stock lookups: ticker resolution,
//! price history, AI-summarized news, and a rendered price/return chart.
//!
//! # Usage
//!
//! ```bash
//! # Set up environment variables
//! export OPENAI_API_KEY="sk-..."
//! export NEWS_API_KEY="..."
//!
//! # Run the dashboard
//! cargo run --bin finboard
//! ```

mod commands;
mod format;

use clap::Parser;
use commands::Command;
use finboard_finance::{
    FinanceConfig, FinanceError, FinanceTools, NewsApiClient, YahooMarketData,
};
use finboard_llm::providers::{OpenAiConfig, OpenAiProvider};
use std::env;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "finboard")]
#[command(about = "Interactive finance dashboard", long_about = None)]
struct Args {
    /// Completion model override (otherwise OPENAI_MODEL or the default)
    #[arg(short, long)]
    model: Option<String>,

    /// Directory where chart images are written
    #[arg(long, default_value = ".")]
    chart_dir: PathBuf,
}

fn print_banner() {
    println!(
        r"
╔══════════════════════════════════════════════════════════════╗
║                         Finboard                             ║
║                                                              ║
║  Commands:                                                   ║
║    /ticker <company name>       Find a stock ticker          ║
║    /prices <ticker> [days]      Price history table          ║
║    /news <ticker|name> [count]  Summarized recent news       ║
║    /chart <ticker>              30-day price/return chart    ║
║    /help                        Help                         ║
║    /exit                        Exit                         ║
╚══════════════════════════════════════════════════════════════╝
"
    );
}

fn get_provider_config(model_override: Option<String>) -> OpenAiConfig {
    let mut config = match OpenAiConfig::from_env() {
        Ok(config) => config,
        Err(_) => {
            eprintln!("Warning: OPENAI_API_KEY not set, using placeholder key");
            OpenAiConfig::new("not-set")
        }
    };

    if let Some(model) = model_override {
        config = config.with_model(model);
    }
    config
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            env::var("RUST_LOG").unwrap_or_else(|_| "warn,finboard_finance=info".to_string()),
        )
        .init();

    let args = Args::parse();

    print_banner();

    let openai_config = get_provider_config(args.model);
    println!("Configuration:");
    println!("  API Base: {}", openai_config.api_base);
    println!("  Model: {}", openai_config.model);
    println!();

    let finance_config = FinanceConfig::builder().with_env_news_key().build()?;

    let tools = FinanceTools::new(
        Arc::new(OpenAiProvider::with_config(openai_config)?),
        Arc::new(YahooMarketData::new()),
        Arc::new(NewsApiClient::new(
            finance_config.news_api_key.clone(),
            finance_config.request_timeout,
        )?),
        finance_config,
    );

    // Run REPL
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("finboard> ");
        stdout.flush()?;

        let mut input = String::new();
        match stdin.lock().read_line(&mut input) {
            Ok(0) => {
                // EOF
                println!("\nGoodbye!");
                break;
            }
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error reading input: {e}");
                continue;
            }
        }

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let command = match Command::parse(input) {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{e}\n");
                continue;
            }
        };

        if command == Command::Exit {
            println!("Goodbye!");
            break;
        }

        if let Err(e) = run_command(&tools, &args.chart_dir, command).await {
            eprintln!("Error: {e}\n");
        }
    }

    Ok(())
}

async fn run_command(
    tools: &FinanceTools,
    chart_dir: &Path,
    command: Command,
) -> Result<(), FinanceError> {
    match command {
        Command::Ticker { name } => {
            match tools.resolve_ticker(&name).await {
                Some(symbol) => println!("{symbol}\n"),
                None => {
                    println!("Unable to find stock ticker for the company name {name}\n");
                }
            }
        }
        Command::Prices { ticker, days } => {
            let series = tools.price_history(&ticker, days).await?;
            if series.is_empty() {
                println!("No price data for {ticker}\n");
            } else {
                println!("{}\n", format::price_table(&series));
            }
        }
        Command::News { input, count } => {
            let lookup = tools.search_and_summarize_news(&input, count).await?;
            for line in lookup.lines() {
                println!("{line}\n");
            }
        }
        Command::Chart { ticker } => {
            let chart = tools.plot_stock_price(&ticker).await?;
            let path = chart_dir.join(format!("{}_chart.png", chart.ticker));
            std::fs::write(&path, &chart.png)
                .map_err(|e| FinanceError::ChartError(format!("Failed to write chart: {e}")))?;
            println!("Chart written to {}\n", path.display());
        }
        Command::Help => println!("{}", Command::help_text()),
        Command::Exit => {}
    }

    Ok(())
}
