use thiserror::Error;

#[derive(Debug, Error)]
pub enum FolioError {
    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("unknown wizard step '{0}': expected 1-4 or intent, location, details, preview")]
    UnknownStep(String),

    #[error("unknown delivery channel '{0}': expected clipboard, mailto or web")]
    UnknownChannel(String),

    #[error("unknown {kind} option '{value}' (choices: {choices})")]
    UnknownOption {
        kind: String,
        value: String,
        choices: String,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("clipboard write failed: {0}")]
    Clipboard(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, FolioError>;
