//! # openai-helper
//!
//! Send a prompt to a hosted chat-completion model and get the text back.
//!
//! Every call builds a two-message conversation (a system instruction followed
//! by the user prompt), sends it once, and returns the content of the first
//! choice exactly as the service produced it. Failures are returned as-is:
//! there is no retry and no fallback value.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use openai_helper::{ChatOptions, chat, chat_with};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads OPENAI_API_KEY from the environment.
//!     let answer = chat("Explain ownership in one sentence.").await?;
//!     println!("{answer}");
//!
//!     let options = ChatOptions::new()
//!         .with_model("gpt-4o-mini")
//!         .with_system_msg("Reply like a pirate.");
//!     let answer = chat_with("Where is the treasure?", &options).await?;
//!     println!("{answer}");
//!     Ok(())
//! }
//! ```
//!
//! Use [`Completer`] with your own [`ChatTransport`] to point the helper at a
//! different backend or at a test double.

pub mod blocking;
pub mod core;
pub mod provider;

pub use self::core::{
    ChatOptions, ChatRequest, ChatResponse, ChatRole, ChatTransport, Choice, Completer,
    Conversation, DEFAULT_MODEL, DEFAULT_SYSTEM_MESSAGE, HttpClientConfig, LlmError, Message,
    ResponseMessage, Usage,
};
pub use provider::{ApiKey, OpenAiClient, OpenAiConfig};

/// Ask the default model with the default system instruction.
///
/// The OpenAI client is configured from the environment on every call, so
/// concurrent calls share nothing.
pub async fn chat(prompt: &str) -> Result<String, LlmError> {
    chat_with(prompt, &ChatOptions::default()).await
}

/// Ask with an explicit model and system instruction.
pub async fn chat_with(prompt: &str, options: &ChatOptions) -> Result<String, LlmError> {
    Completer::from_env()?.chat_with(prompt, options).await
}
