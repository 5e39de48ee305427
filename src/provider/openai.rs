//! OpenAI chat completions transport.

use async_trait::async_trait;

use crate::core::{
    ChatRequest, ChatResponse, ChatTransport, Completer, HttpClient, HttpClientConfig, LlmError,
};
use crate::provider::constants::openai;

/// Where the API key comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ApiKey {
    /// Read `OPENAI_API_KEY` from the process environment.
    #[default]
    Default,
    Custom(String),
}

impl ApiKey {
    pub fn resolve(self) -> Result<String, LlmError> {
        match self {
            ApiKey::Custom(key) => Ok(key),
            ApiKey::Default => std::env::var(openai::API_KEY_ENV_VAR).map_err(|_| {
                LlmError::ProviderConfiguration(format!("{} not set.", openai::API_KEY_ENV_VAR))
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub base_url: String,
    /// Sent as the `OpenAI-Organization` header when set.
    pub organization: Option<String>,
    pub http_config: HttpClientConfig,
}

impl OpenAiConfig {
    pub fn new(api_key: ApiKey) -> Result<Self, LlmError> {
        Ok(Self {
            api_key: api_key.resolve()?,
            base_url: openai::API_BASE.to_string(),
            organization: None,
            http_config: HttpClientConfig::default(),
        })
    }

    /// Key from `OPENAI_API_KEY`, plus the optional `OPENAI_BASE_URL` and
    /// `OPENAI_ORG_ID` overrides.
    pub fn from_env() -> Result<Self, LlmError> {
        let mut config = Self::new(ApiKey::Default)?;

        if let Some(base_url) = non_empty(std::env::var(openai::BASE_URL_ENV_VAR).ok()) {
            config.base_url = base_url;
        }
        config.organization = non_empty(std::env::var(openai::ORGANIZATION_ENV_VAR).ok());

        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }

    pub fn with_http_config(mut self, config: HttpClientConfig) -> Self {
        self.http_config = config;
        self
    }

    fn endpoint_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            openai::CHAT_COMPLETIONS_ENDPOINT
        )
    }

    fn headers(&self) -> Vec<(String, String)> {
        let mut headers = vec![(
            "Authorization".to_string(),
            format!("Bearer {}", self.api_key),
        )];

        if let Some(organization) = &self.organization {
            headers.push((openai::ORGANIZATION_HEADER.to_string(), organization.clone()));
        }

        headers
    }
}

/// Blank environment values count as unset.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

pub struct OpenAiClient {
    config: OpenAiConfig,
    http: HttpClient,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> Result<Self, LlmError> {
        let http = HttpClient::new(&config.http_config, None)?;
        Ok(Self { config, http })
    }

    pub fn from_env() -> Result<Self, LlmError> {
        Self::new(OpenAiConfig::from_env()?)
    }

    pub fn config(&self) -> &OpenAiConfig {
        &self.config
    }
}

impl Completer<OpenAiClient> {
    /// Completer backed by a fresh [`OpenAiClient`] configured from the
    /// environment.
    pub fn from_env() -> Result<Self, LlmError> {
        Ok(Self::new(OpenAiClient::from_env()?))
    }
}

#[async_trait]
impl ChatTransport for OpenAiClient {
    #[tracing::instrument(
        name = "openai_chat_completion",
        skip(self, request),
        fields(base_url = %self.config.base_url, model = %request.model),
        err
    )]
    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, LlmError> {
        self.http
            .post_json(&self.config.endpoint_url(), &self.config.headers(), request)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> OpenAiConfig {
        OpenAiConfig::new(ApiKey::Custom("sk-test".to_string())).unwrap()
    }

    #[test]
    fn custom_key_is_used_verbatim() {
        let config = config();
        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.base_url, "https://api.openai.com/v1");
        assert!(config.organization.is_none());
    }

    #[test]
    fn blank_env_values_are_treated_as_unset() {
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(Some("  ".to_string())), None);
        assert_eq!(
            non_empty(Some("http://localhost:8080/v1".to_string())).as_deref(),
            Some("http://localhost:8080/v1")
        );
    }

    #[test]
    fn endpoint_url_joins_without_double_slash() {
        let config = config().with_base_url("http://localhost:8080/v1/");
        assert_eq!(
            config.endpoint_url(),
            "http://localhost:8080/v1/chat/completions"
        );
    }

    #[test]
    fn headers_carry_bearer_and_organization() {
        let headers = config().with_organization("org-42").headers();
        assert_eq!(
            headers,
            vec![
                ("Authorization".to_string(), "Bearer sk-test".to_string()),
                ("OpenAI-Organization".to_string(), "org-42".to_string()),
            ]
        );
    }
}
