//! Exercises the env-configured entry points. Everything lives in one test
//! because it mutates process-wide environment variables.

use openai_helper::{ChatOptions, LlmError, blocking};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

fn completion(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-env",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
}

#[test]
fn env_configured_chat_async_and_blocking() {
    let runtime = tokio::runtime::Runtime::new().unwrap();

    // SAFETY: this is the only test in this binary, so nothing reads the
    // environment concurrently.
    unsafe {
        std::env::remove_var("OPENAI_API_KEY");
        std::env::remove_var("OPENAI_BASE_URL");
        std::env::remove_var("OPENAI_ORG_ID");
    }

    let missing = runtime.block_on(openai_helper::chat("hi"));
    match missing {
        Err(LlmError::ProviderConfiguration(message)) => {
            assert!(message.contains("OPENAI_API_KEY"));
        }
        other => panic!("expected configuration error, got {other:?}"),
    }
    assert!(matches!(
        blocking::chat("hi"),
        Err(LlmError::ProviderConfiguration(_))
    ));

    let server = runtime.block_on(MockServer::start());
    runtime.block_on(
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("authorization", "Bearer sk-from-env"))
            .and(header("openai-organization", "org-env"))
            .and(body_json(json!({
                "model": "gpt-4-turbo",
                "messages": [
                    {"role": "system", "content": "You are a helpful assistant."},
                    {"role": "user", "content": "async please"}
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion("from async")))
            .expect(1)
            .mount(&server),
    );
    runtime.block_on(
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(body_json(json!({
                "model": "gpt-4o-mini",
                "messages": [
                    {"role": "system", "content": "Be brief."},
                    {"role": "user", "content": "blocking please"}
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion("from blocking")))
            .expect(1)
            .mount(&server),
    );

    // SAFETY: see above.
    unsafe {
        std::env::set_var("OPENAI_API_KEY", "sk-from-env");
        std::env::set_var("OPENAI_BASE_URL", format!("{}/v1", server.uri()));
        std::env::set_var("OPENAI_ORG_ID", "org-env");
    }

    let answer = runtime.block_on(openai_helper::chat("async please")).unwrap();
    assert_eq!(answer, "from async");

    let options = ChatOptions::new()
        .with_model("gpt-4o-mini")
        .with_system_msg("Be brief.");
    let answer = blocking::chat_with("blocking please", &options).unwrap();
    assert_eq!(answer, "from blocking");

    runtime.block_on(async move { server.verify().await });
}
