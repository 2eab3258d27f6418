//! Minimal completion example against an OpenAI-compatible endpoint
//!
//! ```bash
//! export OPENAI_API_KEY="sk-..."
//! cargo run -p finboard-llm --features openai --example openai_completion
//! ```

use finboard_llm::providers::OpenAiProvider;
use finboard_llm::{CompletionProvider, CompletionRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let provider = OpenAiProvider::from_env()?;

    let request =
        CompletionRequest::new("Find the stock ticker symbol for Apple Inc.").max_tokens(20);
    let response = provider.complete(request).await?;

    println!("resolved: {}", response.text.trim());
    println!("tokens used: {}", response.usage.total());
    Ok(())
}
