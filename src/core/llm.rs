use tracing::debug;

use super::{
    error::LlmError,
    traits::ChatTransport,
    types::{ChatOptions, ChatRequest},
};

/// Sends one prompt per call through a [`ChatTransport`] and hands back the
/// first candidate's text.
pub struct Completer<T> {
    transport: T,
}

impl<T: ChatTransport> Completer<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Ask with the default model and system instruction.
    pub async fn chat(&self, prompt: &str) -> Result<String, LlmError> {
        self.chat_with(prompt, &ChatOptions::default()).await
    }

    /// Ask with an explicit model and system instruction.
    ///
    /// Exactly one request goes out. Any failure from the transport is
    /// returned unchanged, and the text of the first choice is returned
    /// without trimming or other cleanup.
    #[tracing::instrument(name = "chat", skip_all, fields(model = %options.model))]
    pub async fn chat_with(&self, prompt: &str, options: &ChatOptions) -> Result<String, LlmError> {
        let request = ChatRequest::new(prompt, options);
        let response = self.transport.send(&request).await?;

        if let Some(usage) = &response.usage {
            debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                "Completion received"
            );
        }

        response.into_first_content()
    }
}
