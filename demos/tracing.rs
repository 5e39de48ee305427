//! Run with `RUST_LOG=openai_helper=debug cargo run --example tracing` to see
//! the request span, HTTP status and token usage.

use dotenv::dotenv;
use openai_helper::{Completer, HttpClientConfig, OpenAiClient, OpenAiConfig};
use std::time::Duration;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_target(true))
        .init();

    let config = OpenAiConfig::from_env()?
        .with_http_config(HttpClientConfig::default().with_timeout(Duration::from_secs(30)));
    let completer = Completer::new(OpenAiClient::new(config)?);

    match completer.chat("Tell me a random interesting fact about space.").await {
        Ok(text) => println!("Success: {text}"),
        Err(e) => println!("Error: {e}"),
    }

    Ok(())
}
