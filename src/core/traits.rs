use async_trait::async_trait;

use super::{
    error::LlmError,
    types::{ChatRequest, ChatResponse},
};

/// Anything that can carry a chat request to a completion service.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, LlmError>;
}

#[async_trait]
impl<T: ChatTransport + ?Sized> ChatTransport for std::sync::Arc<T> {
    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, LlmError> {
        (**self).send(request).await
    }
}
