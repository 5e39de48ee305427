pub mod error;
pub mod http;
pub mod llm;
pub mod traits;
pub mod types;

pub use error::LlmError;
pub use http::{HttpClient, HttpClientConfig};
pub use llm::Completer;
pub use traits::ChatTransport;
pub use types::{
    ChatOptions, ChatRequest, ChatResponse, ChatRole, Choice, Conversation, DEFAULT_MODEL,
    DEFAULT_SYSTEM_MESSAGE, Message, ResponseMessage, Usage,
};
