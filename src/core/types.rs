use serde::{Deserialize, Serialize, Serializer};

use super::error::LlmError;

/// Model used when the caller does not pick one.
pub const DEFAULT_MODEL: &str = "gpt-4-turbo";

/// System instruction used when the caller does not supply one.
pub const DEFAULT_SYSTEM_MESSAGE: &str = "You are a helpful assistant.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: ChatRole,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// The two-message conversation sent with every request.
///
/// Serializes as a JSON array holding the system message followed by the user
/// message. The order never varies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    pub system: Message,
    pub user: Message,
}

impl Conversation {
    pub fn new(system_msg: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            system: Message::system(system_msg),
            user: Message::user(prompt),
        }
    }

    pub fn messages(&self) -> [&Message; 2] {
        [&self.system, &self.user]
    }
}

impl Serialize for Conversation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.messages().serialize(serializer)
    }
}

/// Per-call knobs. `Default` yields the stock model and system instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatOptions {
    pub model: String,
    pub system_msg: String,
}

impl Default for ChatOptions {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            system_msg: DEFAULT_SYSTEM_MESSAGE.to_string(),
        }
    }
}

impl ChatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_system_msg(mut self, system_msg: impl Into<String>) -> Self {
        self.system_msg = system_msg.into();
        self
    }
}

/// Request body for the chat completions endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Conversation,
}

impl ChatRequest {
    pub fn new(prompt: impl Into<String>, options: &ChatOptions) -> Self {
        Self {
            model: options.model.clone(),
            messages: Conversation::new(options.system_msg.clone(), prompt),
        }
    }
}

/// Decoded chat completion response. Fields the helper never reads are
/// kept for logging; anything else the service sends is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub id: Option<String>,
    pub model: Option<String>,
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub index: u32,
    pub message: ResponseMessage,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseMessage {
    pub role: Option<ChatRole>,
    /// `null` when the model answered with something other than text.
    pub content: Option<String>,
}

/// Token counts as reported. Missing counters read as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl ChatResponse {
    /// Builds a response holding a single assistant choice with `content`.
    pub fn from_text(content: impl Into<String>) -> Self {
        Self {
            id: None,
            model: None,
            choices: vec![Choice {
                index: 0,
                message: ResponseMessage {
                    role: Some(ChatRole::Assistant),
                    content: Some(content.into()),
                },
                finish_reason: Some("stop".to_string()),
            }],
            usage: None,
        }
    }

    /// Text of the first choice, untouched.
    pub fn into_first_content(self) -> Result<String, LlmError> {
        let choice = self.choices.into_iter().next().ok_or(LlmError::NoChoices)?;
        choice.message.content.ok_or(LlmError::MissingContent {
            index: choice.index,
        })
    }
}
