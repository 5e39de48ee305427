use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: BoxError,
    },

    #[error("API error{}: {message}", status_suffix(.status_code))]
    Api {
        message: String,
        status_code: Option<u16>,
        #[source]
        source: Option<BoxError>,
    },

    #[error("Parse error: {message}")]
    Parse {
        message: String,
        #[source]
        source: BoxError,
    },

    #[error("Provider configuration error: {0}")]
    ProviderConfiguration(String),

    /// The response decoded fine but carried an empty `choices` list.
    #[error("Completion response contained no choices")]
    NoChoices,

    /// The selected choice had a `null` message content.
    #[error("Choice {index} has no message content")]
    MissingContent { index: u32 },
}

fn status_suffix(status_code: &Option<u16>) -> String {
    status_code.map(|c| format!(" ({c})")).unwrap_or_default()
}

impl LlmError {
    /// HTTP status reported by the service, if the failure came from one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            LlmError::Api { status_code, .. } => *status_code,
            _ => None,
        }
    }
}
