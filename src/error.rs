use thiserror::Error;

pub type Result<T> = std::result::Result<T, WizardError>;

#[derive(Error, Debug)]
pub enum WizardError {
    /// Request body could not be serialized.
    #[error("Failed to encode {provider} request: {source}")]
    Encoding {
        provider: String,
        #[source]
        source: serde_json::Error,
    },

    /// The HTTP call never produced a response (DNS, connect, timeout, body read).
    #[error("{provider} API request failed: {message}")]
    Transport { provider: String, message: String },

    /// Non-2xx status, reported verbatim.
    #[error("{provider} API returned status {status}: {body}")]
    UpstreamStatus {
        provider: String,
        status: u16,
        body: String,
    },

    /// Body was not valid JSON where a structured envelope was required.
    #[error("Failed to parse {provider} response: {message}")]
    Decoding { provider: String, message: String },

    /// Envelope parsed but held no choice / candidate / part.
    #[error("Empty response from {provider} API")]
    EmptyUpstreamResponse { provider: String },

    /// A choice / candidate was present but its text was empty.
    #[error("Could not extract a commit message from the {provider} response")]
    NoExtractableContent { provider: String },

    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Git command failed: {0}")]
    GitCommand(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration parsing error: {0}")]
    ConfigParse(#[from] config::ConfigError),

    #[error("Failed to serialize configuration: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Prompt error: {0}")]
    Prompt(String),

    #[error("No changes to commit")]
    NoChanges,

    #[error("Operation cancelled by user")]
    UserCancelled,
}

impl From<inquire::InquireError> for WizardError {
    fn from(err: inquire::InquireError) -> Self {
        match err {
            inquire::InquireError::OperationCanceled
            | inquire::InquireError::OperationInterrupted => WizardError::UserCancelled,
            other => WizardError::Prompt(other.to_string()),
        }
    }
}

impl WizardError {
    /// 获取错误的解决建议
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            WizardError::NoChanges => Some("Modify or stage some files, then run again"),
            WizardError::Config(msg) if msg.contains("API key") => {
                if msg.contains("Gemini") {
                    Some(
                        "Pass --api-key, set api_key under [llm.providers.gemini], or export WIZARD_COMMIT__LLM__PROVIDERS__GEMINI__API_KEY",
                    )
                } else {
                    Some(
                        "Pass --api-key, set api_key under [llm.providers.deepseek], or export WIZARD_COMMIT__LLM__PROVIDERS__DEEPSEEK__API_KEY",
                    )
                }
            }
            WizardError::Config(msg) if msg.contains("Unknown provider") => {
                Some("Use one of the built-in providers: ollama, deepseek, gemini")
            }
            WizardError::Transport { message, .. } if message.contains("timed out") => {
                Some("The API request timed out. Raise network.request_timeout or try again later")
            }
            WizardError::Transport { provider, .. } if provider.to_lowercase().contains("ollama") => {
                Some("Is Ollama running? Start it with 'ollama serve' or check --url")
            }
            WizardError::Transport { .. } => {
                Some("Check your network connection, proxy settings, or the endpoint URL")
            }
            WizardError::UpstreamStatus { status: 401, .. }
            | WizardError::UpstreamStatus { status: 403, .. } => {
                Some("Check that your API key is valid and has not expired")
            }
            WizardError::UpstreamStatus { status: 404, .. } => {
                Some("Check the endpoint URL and that the model exists")
            }
            WizardError::UpstreamStatus { status: 429, .. } => {
                Some("Rate limit exceeded. Wait a moment and try again")
            }
            WizardError::UpstreamStatus { status, .. } if *status >= 500 => {
                Some("The API service is having trouble. Try again in a few moments")
            }
            WizardError::Decoding { .. } => {
                Some("Run with --verbose to see the full response body")
            }
            _ => None,
        }
    }
}
