use dotenv::dotenv;
use openai_helper::{ChatOptions, chat, chat_with};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    let answer = chat("Share a fun fact about Rust programming.").await?;
    println!("Assistant:\n{answer}\n");

    let options = ChatOptions::new()
        .with_model("gpt-4o-mini")
        .with_system_msg("You are a concise, upbeat assistant.");
    let answer = chat_with("Explain lifetimes in two sentences.", &options).await?;
    println!("Assistant ({}):\n{answer}", options.model);

    Ok(())
}
