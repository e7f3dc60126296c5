use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Ollama is not installed or not running: {0}")]
    EnvironmentUnavailable(String),

    #[error("The required model '{model}' is not available")]
    ModelUnavailable { model: String },

    #[error("Please provide both context and a question")]
    InputIncomplete,

    #[error("A check is already in progress")]
    CheckInProgress,

    #[error("Inference error: {0}")]
    Inference(String),

    #[error("Probe error: {0}")]
    Probe(String),

    /// A query that was sent and failed, with the prompt it carried.
    #[error("{source}")]
    QueryFailed {
        prompt: String,
        #[source]
        source: Box<Error>,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn environment(msg: impl Into<String>) -> Self {
        Self::EnvironmentUnavailable(msg.into())
    }

    pub fn inference(msg: impl Into<String>) -> Self {
        Self::Inference(msg.into())
    }

    pub fn probe(msg: impl Into<String>) -> Self {
        Self::Probe(msg.into())
    }

    /// The underlying error, looking through `QueryFailed`.
    pub fn root(&self) -> &Error {
        match self {
            Self::QueryFailed { source, .. } => source.root(),
            other => other,
        }
    }

    /// Prompt of a failed query, for the debug panel.
    pub fn prompt(&self) -> Option<&str> {
        match self {
            Self::QueryFailed { prompt, .. } => Some(prompt),
            _ => None,
        }
    }

    /// Short machine-readable tag used in API error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::QueryFailed { source, .. } => source.kind(),
            Self::Config(_) => "config",
            Self::EnvironmentUnavailable(_) => "environment_unavailable",
            Self::ModelUnavailable { .. } => "model_unavailable",
            Self::InputIncomplete => "input_incomplete",
            Self::CheckInProgress => "check_in_progress",
            Self::Inference(_) | Self::Network(_) => "inference_error",
            Self::Probe(_) => "probe_error",
            _ => "internal",
        }
    }

    /// Actionable text shown next to the error, when there is one.
    pub fn remediation(&self) -> Option<String> {
        match self {
            Self::QueryFailed { source, .. } => source.remediation(),
            Self::EnvironmentUnavailable(_) => Some(
                "Please install Ollama to use this application: https://ollama.com/download"
                    .to_string(),
            ),
            Self::ModelUnavailable { model } => {
                Some(format!("Please install it using 'ollama pull {}'", model))
            }
            _ => None,
        }
    }
}
