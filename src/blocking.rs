//! Synchronous entry points for callers outside an async runtime.
//!
//! Each call spins up a current-thread runtime, drives one request on it and
//! tears it down again. Called from inside a tokio runtime they return
//! [`LlmError::ProviderConfiguration`]; use the async functions there instead.

use crate::core::{ChatOptions, LlmError};

pub fn chat(prompt: &str) -> Result<String, LlmError> {
    chat_with(prompt, &ChatOptions::default())
}

pub fn chat_with(prompt: &str, options: &ChatOptions) -> Result<String, LlmError> {
    if tokio::runtime::Handle::try_current().is_ok() {
        return Err(LlmError::ProviderConfiguration(
            "blocking::chat called inside an async runtime".to_string(),
        ));
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| {
            LlmError::ProviderConfiguration(format!("Failed to build tokio runtime: {e}"))
        })?;

    runtime.block_on(crate::chat_with(prompt, options))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn refuses_to_block_inside_a_runtime() {
        match chat("hi") {
            Err(LlmError::ProviderConfiguration(message)) => {
                assert!(message.contains("inside an async runtime"));
            }
            other => panic!("expected configuration error, got {other:?}"),
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn refuses_to_block_on_multi_thread_runtime() {
        let options = ChatOptions::new().with_model("gpt-4o-mini");
        assert!(matches!(
            chat_with("hi", &options),
            Err(LlmError::ProviderConfiguration(_))
        ));
    }
}
