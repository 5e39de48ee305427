mod constants;
pub mod openai;

pub use openai::{ApiKey, OpenAiClient, OpenAiConfig};
